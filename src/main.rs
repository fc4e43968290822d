use anyhow::Result;
use clap::{Parser, ValueEnum};

use release_level::cli::orchestration::{run_classify, ClassifyArgs};
use release_level::{config, ui};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Toml,
}

#[derive(clap::Parser)]
#[command(
    name = "release-level",
    version,
    about = "Classify a version and suffix into a release channel"
)]
struct Args {
    #[arg(
        value_name = "VERSION",
        required_unless_present = "list",
        help = "Version, optionally with -SUFFIX (e.g. 1.2.3-SNAPSHOT)"
    )]
    version_string: Option<String>,

    #[arg(short, long, help = "Explicit suffix, overrides one embedded in VERSION")]
    suffix: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Artifact name used when rendering the pattern")]
    name: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text, help = "Output format")]
    format: OutputFormat,

    #[arg(long, help = "Show release levels in evaluation order and exit")]
    list: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.list {
        ui::display_levels();
        return Ok(());
    }

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let Some(version) = args.version_string else {
        ui::display_error("A version is required");
        std::process::exit(1);
    };

    let workflow_args = ClassifyArgs {
        version,
        suffix: args.suffix,
        name: args.name,
    };

    let result = match run_classify(&workflow_args, &config) {
        Ok(result) => result,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    for warning in &result.warnings {
        ui::display_warning(warning);
    }

    match args.format {
        OutputFormat::Toml => print!("{}", toml::to_string(&result)?),
        OutputFormat::Text => {
            let classification = result.level.classification();
            ui::display_classification(
                &result.display_version(),
                &classification,
                &result.artifact,
            );
        }
    }

    Ok(())
}
