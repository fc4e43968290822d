//! Terminal output for the CLI.
//!
//! `format_*` functions build the text and are pure; `display_*` functions print it.

use console::style;

use crate::domain::{Classification, ReleaseLevel};
use crate::warnings::ClassificationWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Display a classification warning on stderr.
pub fn display_warning(warning: &ClassificationWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Plain-text lines describing a classification result.
pub fn format_classification(
    version: &str,
    classification: &Classification,
    artifact: &str,
) -> Vec<String> {
    vec![
        format!("version:     {}", version),
        format!("level:       {}", classification.level.name()),
        format!("template:    {}", classification.template),
        format!("is_snapshot: {}", classification.is_snapshot),
        format!("artifact:    {}", artifact),
    ]
}

/// Display a classification result.
pub fn display_classification(version: &str, classification: &Classification, artifact: &str) {
    println!("\n{}", style("Release Level:").bold());
    for line in format_classification(version, classification, artifact) {
        println!("  {}", line);
    }
}

/// One line per level, in evaluation order.
pub fn format_levels() -> Vec<String> {
    ReleaseLevel::ALL
        .iter()
        .enumerate()
        .map(|(i, level)| {
            format!(
                "{}. {:<18} {:<12} snapshot={}",
                i + 1,
                level.name(),
                level.template(),
                level.is_snapshot()
            )
        })
        .collect()
}

/// Display the release levels in the order they are evaluated.
pub fn display_levels() {
    println!("{}", style("Release levels (first match wins):").bold());
    for line in format_levels() {
        println!("  {}", line);
    }
}
