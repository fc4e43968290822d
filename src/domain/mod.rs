//! Domain logic - pure classification rules independent of the CLI

pub mod level;
pub mod pattern;
pub mod version;

pub use level::{classify, Classification, ReleaseLevel};
pub use pattern::ArtifactPattern;
pub use version::VersionString;
