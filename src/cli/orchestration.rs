//! Classification workflow
//!
//! Turns CLI input plus configuration into a [`ClassifyResult`]. Kept apart
//! from `main.rs` so it can be called and tested without clap.

use serde::Serialize;

use crate::config::Config;
use crate::domain::{ReleaseLevel, VersionString};
use crate::error::Result;
use crate::warnings::{self, ClassificationWarning};

/// Arguments for the classify workflow
///
/// Mirrors the CLI Args in a form that does not depend on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassifyArgs {
    /// Version, optionally with a `-SUFFIX`
    pub version: String,

    /// Explicit suffix; replaces any suffix embedded in `version`
    pub suffix: Option<String>,

    /// Artifact name overriding `artifact.name` from the config
    pub name: Option<String>,
}

/// Result of classifying one version
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifyResult {
    pub version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,

    pub level: ReleaseLevel,
    pub template: String,
    pub is_snapshot: bool,
    pub artifact: String,

    #[serde(skip)]
    pub warnings: Vec<ClassificationWarning>,
}

impl ClassifyResult {
    /// Version as classified, with the suffix that was actually used
    pub fn display_version(&self) -> String {
        VersionString::new(self.version.clone(), self.suffix.clone()).to_string()
    }
}

/// Classify a version and render its artifact name
///
/// # Arguments
///
/// * `args` - Version, suffix and artifact name overrides
/// * `config` - Loaded configuration
///
/// # Returns
///
/// The classification, or an error if the version or pattern is invalid
pub fn run_classify(args: &ClassifyArgs, config: &Config) -> Result<ClassifyResult> {
    let parsed = VersionString::parse(&args.version)?;
    let found = warnings::inspect(&parsed, args.suffix.as_deref());

    let version = match &args.suffix {
        Some(explicit) => parsed.with_suffix(Some(explicit.clone())),
        None => parsed,
    };

    let pattern = config.artifact.pattern();
    pattern.validate()?;

    let level = version.level();
    let name = args.name.as_deref().unwrap_or(&config.artifact.name);
    let artifact = pattern.render(name, &version, level)?;
    let classification = level.classification();

    Ok(ClassifyResult {
        version: version.version,
        suffix: version.suffix,
        level,
        template: classification.template.to_string(),
        is_snapshot: classification.is_snapshot,
        artifact,
        warnings: if config.behavior.warnings {
            found
        } else {
            Vec::new()
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(version: &str, suffix: Option<&str>) -> ClassifyArgs {
        ClassifyArgs {
            version: version.to_string(),
            suffix: suffix.map(str::to_string),
            name: None,
        }
    }

    #[test]
    fn test_embedded_suffix() {
        let result = run_classify(&args("1.2.3-SNAPSHOT", None), &Config::default()).unwrap();
        assert_eq!(result.level, ReleaseLevel::Snapshot);
        assert_eq!(result.artifact, "artifact-1.2.3-snapshot");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_explicit_suffix_wins_and_warns() {
        let result = run_classify(&args("1.0.0-RC1", Some("SNAPSHOT")), &Config::default()).unwrap();
        assert_eq!(result.level, ReleaseLevel::Snapshot);
        assert_eq!(result.suffix.as_deref(), Some("SNAPSHOT"));
        assert_eq!(
            result.warnings,
            vec![ClassificationWarning::EmbeddedSuffixIgnored {
                version: "1.0.0-RC1".to_string()
            }]
        );
        assert_eq!(result.display_version(), "1.0.0-SNAPSHOT");
    }

    #[test]
    fn test_display_version_without_suffix() {
        let result = run_classify(&args("2.1", None), &Config::default()).unwrap();
        assert_eq!(result.display_version(), "2.1");
    }

    #[test]
    fn test_warnings_can_be_disabled() {
        let mut config = Config::default();
        config.behavior.warnings = false;
        let result = run_classify(&args("1.1", Some("beta")), &config).unwrap();
        assert_eq!(result.level, ReleaseLevel::ReleaseMinor);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_invalid_version() {
        assert!(run_classify(&args("not a version", None), &Config::default()).is_err());
    }
}
