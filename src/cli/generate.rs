//! Generate command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::assets::load_assets;
use crate::config::loader::{load_config, merge_cli_overrides, CliOverrides, ConfigError};
use crate::generator::DuckyGenerator;
use crate::output::{save_png, scale_image, write_report, DuckyReport};
use crate::rng::seeded_rng;

use super::{seed_arg, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the generate command
pub fn run_generate(
    seed: Option<&str>,
    config_path: Option<&Path>,
    overrides: &CliOverrides,
) -> ExitCode {
    let seed = match seed_arg(seed) {
        Ok(seed) => seed,
        Err(code) => return code,
    };

    let mut config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => return config_failure(&e),
    };
    if let Err(e) = merge_cli_overrides(&mut config, overrides) {
        return config_failure(&e);
    }

    let assets = match load_assets(&config.assets.root) {
        Ok(assets) => assets,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let mut rng = seeded_rng(seed);
    let generator = DuckyGenerator::new(&assets).with_chances(config.chances);
    let ducky = match generator.generate(&mut rng) {
        Ok(ducky) => ducky,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    println!("has_hat: {}", ducky.has_hat);
    println!("has_equipment: {}", ducky.has_equipment);
    println!("has_outfit: {}", ducky.has_outfit);

    let report = DuckyReport::new(&ducky, seed);
    let image = scale_image(ducky.image, config.output.scale);
    if let Err(e) = save_png(&image, &config.output.path) {
        eprintln!("Error: Failed to save {}: {}", config.output.path.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }

    if let Some(report_path) = &config.output.report {
        if let Err(e) = write_report(&report, report_path) {
            eprintln!("Error: Failed to write report {}: {}", report_path.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
        log::info!("report written to {}", report_path.display());
    }

    println!("Ducky saved to {}", config.output.path.display());
    ExitCode::from(EXIT_SUCCESS)
}

/// Report a config error. Invalid values are argument errors wherever they came from.
fn config_failure(e: &ConfigError) -> ExitCode {
    eprintln!("Error: {}", e);
    match e {
        ConfigError::Validation(_) => ExitCode::from(EXIT_INVALID_ARGS),
        _ => ExitCode::from(EXIT_ERROR),
    }
}
