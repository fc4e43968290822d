//! CLI-facing workflow, decoupled from clap

pub mod orchestration;
