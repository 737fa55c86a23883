//! Configuration loading and discovery for `ducky.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::DuckyConfig;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name searched for when discovering configuration.
pub const CONFIG_FILE_NAME: &str = "ducky.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse ducky.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override asset root
    pub assets: Option<PathBuf>,
    /// Override output path
    pub output: Option<PathBuf>,
    /// Override scale factor
    pub scale: Option<u32>,
    /// Override report path
    pub report: Option<PathBuf>,
    /// Override hat chance
    pub hat_chance: Option<f64>,
    /// Override equipment chance
    pub equipment_chance: Option<f64>,
    /// Override outfit chance
    pub outfit_chance: Option<f64>,
}

/// Find ducky.toml by walking up from the current working directory.
pub fn find_config() -> Option<PathBuf> {
    let cwd = env::current_dir().ok()?;
    find_config_from(cwd)
}

/// Find ducky.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        // Move to parent directory
        if !current.pop() {
            // Reached root, no config found
            return None;
        }
    }
}

/// Load configuration.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the default
/// configuration.
///
/// Relative paths inside a loaded file are resolved against the directory
/// that contains it.
pub fn load_config(path: Option<&Path>) -> Result<DuckyConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            log::info!("using config {}", p.display());
            load_config_file(&p)
        }
        None => Ok(DuckyConfig::default()),
    }
}

/// Load configuration from a specific file path.
fn load_config_file(path: &Path) -> Result<DuckyConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let mut config: DuckyConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    if let Some(root) = project_root(path) {
        config.assets.root = resolve_path(root, &config.assets.root);
        config.output.path = resolve_path(root, &config.output.path);
        config.output.report = config.output.report.map(|report| resolve_path(root, &report));
    }

    Ok(config)
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values. The result is
/// validated again so that out-of-range flags are rejected the same way as
/// out-of-range config values.
pub fn merge_cli_overrides(
    config: &mut DuckyConfig,
    overrides: &CliOverrides,
) -> Result<(), ConfigError> {
    if let Some(ref assets) = overrides.assets {
        config.assets.root = assets.clone();
    }
    if let Some(ref output) = overrides.output {
        config.output.path = output.clone();
    }
    if let Some(scale) = overrides.scale {
        config.output.scale = scale;
    }
    if let Some(ref report) = overrides.report {
        config.output.report = Some(report.clone());
    }

    if let Some(hat) = overrides.hat_chance {
        config.chances.hat = hat;
    }
    if let Some(equipment) = overrides.equipment_chance {
        config.chances.equipment = equipment;
    }
    if let Some(outfit) = overrides.outfit_chance {
        config.chances.outfit = outfit;
    }

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }
    Ok(())
}

/// Get the directory containing a config file.
///
/// An empty parent (a bare file name) yields `None`.
pub fn project_root(config_path: &Path) -> Option<&Path> {
    config_path.parent().filter(|p| !p.as_os_str().is_empty())
}

/// Resolve a path relative to the project root.
///
/// If the path is absolute, returns it unchanged.
/// If relative, joins it with the project root.
pub fn resolve_path(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}
