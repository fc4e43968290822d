use crate::domain::level::{classify, ReleaseLevel};
use crate::error::{ReleaseLevelError, Result};
use regex::Regex;
use std::fmt;

const VERSION_PATTERN: &str = r"^[0-9A-Za-z]+(\.[0-9A-Za-z]+)*$";

/// A version with an optional pre-release suffix (e.g. "1.2.3" + "SNAPSHOT")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionString {
    pub version: String,
    pub suffix: Option<String>,
}

impl VersionString {
    /// Create a version string from already separated parts
    pub fn new(version: impl Into<String>, suffix: Option<String>) -> Self {
        VersionString {
            version: version.into(),
            suffix: suffix.filter(|s| !s.is_empty()),
        }
    }

    /// Parse the combined form "1.2.3-SNAPSHOT" (e.g. "1.2.3-SNAPSHOT" -> ("1.2.3", "SNAPSHOT"))
    ///
    /// Splits on the first '-'; everything after it is the suffix, so
    /// "3.4-BETA-SNAPSHOT" keeps "BETA-SNAPSHOT" intact.
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        let (version, suffix) = match input.split_once('-') {
            Some((version, suffix)) => (version, Some(suffix.to_string())),
            None => (input, None),
        };

        let re = Regex::new(VERSION_PATTERN)
            .map_err(|e| ReleaseLevelError::version(format!("Invalid version pattern: {}", e)))?;
        if !re.is_match(version) {
            return Err(ReleaseLevelError::version(format!(
                "Invalid version format: '{}' - expected dot-separated components like 1.2.3",
                input
            )));
        }

        Ok(VersionString::new(version, suffix))
    }

    /// Replace the suffix, e.g. with one given explicitly on the command line
    pub fn with_suffix(mut self, suffix: Option<String>) -> Self {
        self.suffix = suffix.filter(|s| !s.is_empty());
        self
    }

    pub fn level(&self) -> ReleaseLevel {
        classify(&self.version, self.suffix.as_deref())
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.version)?;
        if let Some(suffix) = &self.suffix {
            write!(f, "-{}", suffix)?;
        }
        Ok(())
    }
}
