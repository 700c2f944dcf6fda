//! CLI Adapter.

mod build;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use dialoguer::Input;

use crate::app::AppContext;
use crate::app::commands::{compose, detect};
use crate::domain::{ApiConfig, AppError};
use crate::services::HttpTextGenerator;

#[derive(Parser)]
#[command(name = "factboard")]
#[command(version)]
#[command(
    about = "Turn idea blurbs into fact-checked three-scene storyboards",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect missing facts in a blurb via the text-generation service
    #[clap(visible_alias = "d")]
    Detect {
        /// Blurb text (falls back to --file, then an interactive prompt)
        #[arg(conflicts_with = "file")]
        blurb: Option<String>,
        /// Read the blurb from a file
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Show the detection instruction without contacting the service
        #[arg(long)]
        dry_run: bool,
    },
    /// Run the correction pipeline on the demonstration template
    #[clap(visible_alias = "b")]
    Build {
        /// Pre-tagged template to run instead of the built-in demonstration
        #[arg(long, requires = "labels")]
        template: Option<String>,
        /// Comma-separated labels declared for --template
        #[arg(long, requires = "template")]
        labels: Option<String>,
        /// Answer every placeholder choice without prompting
        #[arg(long, value_enum, default_value = "ask")]
        choose: ChoiceMode,
    },
    /// Compose a three-scene storyboard from a resolved blurb
    #[clap(visible_alias = "c")]
    Compose {
        /// Blurb text (falls back to --file, then an interactive prompt)
        #[arg(conflicts_with = "file")]
        blurb: Option<String>,
        /// Read the blurb from a file
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// How placeholder choices are answered during a build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ChoiceMode {
    /// Prompt per placeholder (default = the original value)
    Ask,
    /// Keep every original value
    Original,
    /// Adopt every suggested value
    Suggested,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Detect { blurb, file, dry_run } => run_detect(blurb, file, dry_run),
        Commands::Build { template, labels, choose } => build::run_build(template, labels, choose),
        Commands::Compose { blurb, file } => run_compose(blurb, file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_detect(
    blurb: Option<String>,
    file: Option<PathBuf>,
    dry_run: bool,
) -> Result<(), AppError> {
    let blurb = read_blurb(blurb, file)?;
    let config = ApiConfig::load(&std::env::current_dir()?)?;

    if dry_run {
        println!("=== Detection instruction ===");
        println!("{}", detect::instruction(&blurb)?);
        return Ok(());
    }

    let generator = HttpTextGenerator::from_env_with_config(&config)?;
    let ctx = AppContext::new(generator);
    let outcome = detect::execute(&ctx, &blurb)?;

    println!("=== Detected placeholders & rewritten blurb ===");
    println!("{}", outcome.response);
    Ok(())
}

fn run_compose(blurb: Option<String>, file: Option<PathBuf>) -> Result<(), AppError> {
    let blurb = read_blurb(blurb, file)?;
    let storyboard = compose::execute(&blurb)?;
    println!("{}", storyboard);
    Ok(())
}

/// Resolve the blurb from an argument, a file, or an interactive prompt.
fn read_blurb(blurb: Option<String>, file: Option<PathBuf>) -> Result<String, AppError> {
    if let Some(text) = blurb {
        return Ok(text);
    }
    if let Some(path) = file {
        return Ok(fs::read_to_string(path)?);
    }
    Input::<String>::new()
        .with_prompt("Paste your blurb with missing facts")
        .interact_text()
        .map_err(|e| AppError::Interactive(e.to_string()))
}
