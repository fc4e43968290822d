//! Release level classification
//!
//! A version and an optional suffix map to exactly one release channel.
//! Levels are tried in declaration order and the first match wins.

use crate::error::{ReleaseLevelError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Release channel a version belongs to
///
/// Ordering follows evaluation order: `Snapshot < Alpha < ... < ReleaseMinor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReleaseLevel {
    /// Suffix ends with `SNAPSHOT`
    Snapshot,
    /// Suffix contains `ALPHA`
    Alpha,
    /// Suffix contains `BETA`
    Beta,
    /// Suffix contains `RC`
    ReleaseCandidate,
    /// Version ends with `.0`
    ReleaseMajor,
    /// Everything else
    ReleaseMinor,
}

impl ReleaseLevel {
    /// All levels in evaluation order.
    pub const ALL: [ReleaseLevel; 6] = [
        ReleaseLevel::Snapshot,
        ReleaseLevel::Alpha,
        ReleaseLevel::Beta,
        ReleaseLevel::ReleaseCandidate,
        ReleaseLevel::ReleaseMajor,
        ReleaseLevel::ReleaseMinor,
    ];

    /// Level returned when no predicate matches.
    ///
    /// `ReleaseMinor` always matches, so [`classify`] never reaches this.
    pub const FALLBACK: ReleaseLevel = ReleaseLevel::Snapshot;

    /// Selection predicate for this level
    ///
    /// Suffix checks are case-sensitive. A missing suffix fails every
    /// suffix-based predicate.
    pub fn matches(self, version: &str, suffix: Option<&str>) -> bool {
        match self {
            ReleaseLevel::Snapshot => suffix.is_some_and(|s| s.ends_with("SNAPSHOT")),
            ReleaseLevel::Alpha => suffix.is_some_and(|s| s.contains("ALPHA")),
            ReleaseLevel::Beta => suffix.is_some_and(|s| s.contains("BETA")),
            ReleaseLevel::ReleaseCandidate => suffix.is_some_and(|s| s.contains("RC")),
            ReleaseLevel::ReleaseMajor => version.ends_with(".0"),
            ReleaseLevel::ReleaseMinor => true,
        }
    }

    /// Template tag used to name artifacts of this level
    pub fn template(self) -> &'static str {
        match self {
            ReleaseLevel::Snapshot => "snapshot",
            ReleaseLevel::Alpha => "alpha",
            ReleaseLevel::Beta => "beta",
            ReleaseLevel::ReleaseCandidate => "rc",
            ReleaseLevel::ReleaseMajor => "release-big",
            ReleaseLevel::ReleaseMinor => "release",
        }
    }

    pub fn is_snapshot(self) -> bool {
        matches!(self, ReleaseLevel::Snapshot)
    }

    /// Constant-style name, e.g. `RELEASE_CANDIDATE`
    pub fn name(self) -> &'static str {
        match self {
            ReleaseLevel::Snapshot => "SNAPSHOT",
            ReleaseLevel::Alpha => "ALPHA",
            ReleaseLevel::Beta => "BETA",
            ReleaseLevel::ReleaseCandidate => "RELEASE_CANDIDATE",
            ReleaseLevel::ReleaseMajor => "RELEASE_MAJOR",
            ReleaseLevel::ReleaseMinor => "RELEASE_MINOR",
        }
    }

    /// The record consumed by build scripts
    pub fn classification(self) -> Classification {
        Classification {
            level: self,
            template: self.template(),
            is_snapshot: self.is_snapshot(),
        }
    }
}

/// Classify a version and optional suffix into a release level.
///
/// # Example
/// ```
/// use release_level::{classify, ReleaseLevel};
///
/// assert_eq!(classify("1.2.3", Some("SNAPSHOT")), ReleaseLevel::Snapshot);
/// assert_eq!(classify("3.4", Some("BETA-SNAPSHOT")), ReleaseLevel::Snapshot);
/// assert_eq!(classify("2.0", None), ReleaseLevel::ReleaseMajor);
/// assert_eq!(classify("2.1", None).template(), "release");
/// ```
pub fn classify(version: &str, suffix: Option<&str>) -> ReleaseLevel {
    ReleaseLevel::ALL
        .into_iter()
        .find(|level| level.matches(version, suffix))
        .unwrap_or(ReleaseLevel::FALLBACK)
}

impl fmt::Display for ReleaseLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.template())
    }
}

impl FromStr for ReleaseLevel {
    type Err = ReleaseLevelError;

    /// Accepts either the template (`rc`) or the constant name
    /// (`RELEASE_CANDIDATE`), ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        ReleaseLevel::ALL
            .into_iter()
            .find(|level| {
                level.template().eq_ignore_ascii_case(wanted)
                    || level.name().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ReleaseLevelError::level(format!("'{}'", s)))
    }
}

/// Template and snapshot flag for a classified version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub level: ReleaseLevel,
    pub template: &'static str,
    pub is_snapshot: bool,
}
