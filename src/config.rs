use crate::domain::ArtifactPattern;
use crate::error::{ReleaseLevelError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the project-local configuration file
pub const CONFIG_FILE_NAME: &str = "releaselevel.toml";

/// Represents the complete configuration for release-level.
///
/// Contains artifact naming settings and behavior options.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub artifact: ArtifactConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Returns the default artifact base name.
fn default_artifact_name() -> String {
    "artifact".to_string()
}

/// Returns the default artifact naming pattern.
fn default_artifact_pattern() -> String {
    "{name}-{version}-{template}".to_string()
}

/// Configuration for artifact naming.
///
/// `pattern` accepts the `{name}`, `{version}`, `{suffix}` and `{template}` placeholders.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ArtifactConfig {
    #[serde(default = "default_artifact_name")]
    pub name: String,

    #[serde(default = "default_artifact_pattern")]
    pub pattern: String,
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        ArtifactConfig {
            name: default_artifact_name(),
            pattern: default_artifact_pattern(),
        }
    }
}

impl ArtifactConfig {
    pub fn pattern(&self) -> ArtifactPattern {
        ArtifactPattern::new(self.pattern.clone())
    }
}

fn default_true() -> bool {
    true
}

/// Configuration for behavior customization.
///
/// Controls output only; classification itself is not configurable.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BehaviorConfig {
    #[serde(default = "default_true")]
    pub warnings: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        BehaviorConfig { warnings: true }
    }
}

/// Parse configuration from TOML text and validate the artifact pattern.
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config = toml::from_str(config_str)?;
    config.artifact.pattern().validate()?;
    Ok(config)
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releaselevel.toml` in current directory
/// 3. `~/.config/.releaselevel.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a custom path is missing, or a file exists but cannot be
///   read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);

    let config_str = if let Some(path) = config_path {
        if !Path::new(path).is_file() {
            return Err(ReleaseLevelError::config(format!(
                "Config file not found: {}",
                path
            )));
        }
        fs::read_to_string(path)?
    } else if local.exists() {
        fs::read_to_string(local)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    parse_config(&config_str)
}
