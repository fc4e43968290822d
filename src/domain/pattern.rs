use crate::domain::level::ReleaseLevel;
use crate::domain::version::VersionString;
use crate::error::{ReleaseLevelError, Result};

const PLACEHOLDERS: [&str; 4] = ["name", "version", "suffix", "template"];

/// Artifact naming pattern (e.g., "{name}-{version}-{template}")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPattern {
    pub pattern: String,
}

impl ArtifactPattern {
    /// Create a new artifact pattern
    pub fn new(pattern: impl Into<String>) -> Self {
        ArtifactPattern {
            pattern: pattern.into(),
        }
    }

    /// Check that the pattern only uses known placeholders and names the
    /// version or the template somewhere
    pub fn validate(&self) -> Result<()> {
        if !self.pattern.contains("{version}") && !self.pattern.contains("{template}") {
            return Err(ReleaseLevelError::pattern(format!(
                "Pattern '{}' must contain {{version}} or {{template}}",
                self.pattern
            )));
        }

        let re = regex::Regex::new(r"\{([^{}]*)\}")
            .map_err(|e| ReleaseLevelError::pattern(e.to_string()))?;
        for cap in re.captures_iter(&self.pattern) {
            let name = &cap[1];
            if !PLACEHOLDERS.contains(&name) {
                return Err(ReleaseLevelError::pattern(format!(
                    "Unknown placeholder '{{{}}}' in pattern '{}'",
                    name, self.pattern
                )));
            }
        }

        Ok(())
    }

    /// Render an artifact name
    ///
    /// Example: pattern="{name}-{version}-{suffix}-{template}", name="nucleus",
    /// version="2.0", no suffix -> "nucleus-2.0-release-big"
    ///
    /// Placeholders are substituted in a single pass, so braces inside the
    /// substituted values are copied through verbatim.
    pub fn render(&self, name: &str, version: &VersionString, level: ReleaseLevel) -> Result<String> {
        let pattern = match version.suffix {
            Some(_) => self.pattern.clone(),
            // Drop one separator that would otherwise be left dangling
            None if self.pattern.contains("-{suffix}") => {
                self.pattern.replace("-{suffix}", "{suffix}")
            }
            None => self.pattern.replace("{suffix}-", "{suffix}"),
        };

        let re = regex::Regex::new(r"\{(\w+)\}")
            .map_err(|e| ReleaseLevelError::pattern(e.to_string()))?;
        let rendered = re.replace_all(&pattern, |caps: &regex::Captures| match &caps[1] {
            "name" => name.to_string(),
            "version" => version.version.clone(),
            "suffix" => version.suffix.clone().unwrap_or_default(),
            "template" => level.template().to_string(),
            _ => caps[0].to_string(),
        });

        Ok(rendered.into_owned())
    }
}
