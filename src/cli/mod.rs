//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod colors;
mod generate;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::loader::CliOverrides;
use crate::config::MAX_SCALE;
use crate::rng::parse_seed;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Duckies - generate procedural duck sprites
#[derive(Parser)]
#[command(name = "ducky")]
#[command(about = "Duckies - generate procedural duck sprites from layered templates")]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a ducky and save it as PNG
    Generate {
        /// Seed for reproducible output (integer, or a number like 0.5)
        seed: Option<String>,

        /// Output PNG path (default: ducky.png, or [output] path in ducky.toml)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Asset root containing "silverduck templates" and "accessories"
        #[arg(long)]
        assets: Option<PathBuf>,

        /// Config file (default: ducky.toml found from the current directory upwards)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Scale output by integer factor (1-16)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_SCALE)))]
        scale: Option<u32>,

        /// Also write a JSON report to this path
        #[arg(long)]
        report: Option<PathBuf>,

        /// Probability of a hat (0.0-1.0)
        #[arg(long)]
        hat_chance: Option<f64>,

        /// Probability of equipment (0.0-1.0)
        #[arg(long)]
        equipment_chance: Option<f64>,

        /// Probability of an outfit (0.0-1.0)
        #[arg(long)]
        outfit_chance: Option<f64>,
    },
    /// Print the colors a ducky would get, without rendering
    Colors {
        /// Seed for reproducible output (integer, or a number like 0.5)
        seed: Option<String>,

        /// Use this hue (wrapped into 0.0-1.0) instead of a random one
        #[arg(long)]
        hue: Option<f64>,

        /// Force the dark variant
        #[arg(long, conflicts_with = "light")]
        dark: bool,

        /// Force the light variant
        #[arg(long)]
        light: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parse an optional seed argument, reporting errors on stderr.
pub(crate) fn seed_arg(seed: Option<&str>) -> Result<Option<u64>, ExitCode> {
    match seed.map(parse_seed).transpose() {
        Ok(seed) => Ok(seed),
        Err(e) => {
            eprintln!("Error: {}", e);
            Err(ExitCode::from(EXIT_INVALID_ARGS))
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    // Ignore the error when a logger is already installed (e.g. tests)
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .try_init();
}

/// Main entry point for the CLI
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            seed,
            output,
            assets,
            config,
            scale,
            report,
            hat_chance,
            equipment_chance,
            outfit_chance,
        } => {
            let overrides = CliOverrides {
                assets,
                output,
                scale,
                report,
                hat_chance,
                equipment_chance,
                outfit_chance,
            };
            generate::run_generate(seed.as_deref(), config.as_deref(), &overrides)
        }
        Commands::Colors { seed, hue, dark, light, json } => {
            let dark_variant = match (dark, light) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            colors::run_colors(seed.as_deref(), hue, dark_variant, json)
        }
    }
}
