pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;
pub mod warnings;

pub use domain::{classify, Classification, ReleaseLevel};
pub use error::{ReleaseLevelError, Result};
