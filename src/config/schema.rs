//! Configuration schema types for `ducky.toml`
//!
//! Defines the structure and validation rules for generator configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::assets::Accessory;
use crate::composition::AccessoryChances;

/// Asset location section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Root directory holding templates and accessories
    #[serde(default = "default_assets_root")]
    pub root: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self { root: default_assets_root() }
    }
}

fn default_assets_root() -> PathBuf {
    PathBuf::from("img/duck-builder")
}

/// Largest accepted upscale factor.
pub const MAX_SCALE: u32 = 16;

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// PNG output path
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    /// Integer upscale factor, 1 to [`MAX_SCALE`]
    #[serde(default = "default_scale")]
    pub scale: u32,
    /// Optional JSON report path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { path: default_output_path(), scale: default_scale(), report: None }
    }
}

fn default_output_path() -> PathBuf {
    PathBuf::from("ducky.png")
}

fn default_scale() -> u32 {
    1
}

/// Complete `ducky.toml` configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DuckyConfig {
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub chances: AccessoryChances,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Validation error for a config field
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "chances.hat")
    pub field: String,
    /// Error message
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ducky.toml: '{}' {}", self.field, self.message)
    }
}

impl DuckyConfig {
    /// Validate the configuration and return any errors
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.assets.root.as_os_str().is_empty() {
            errors.push(ConfigValidationError {
                field: "assets.root".to_string(),
                message: "must be a non-empty path".to_string(),
            });
        }

        for accessory in Accessory::ALL {
            let chance = self.chances.chance(accessory);
            if !(0.0..=1.0).contains(&chance) {
                errors.push(ConfigValidationError {
                    field: format!("chances.{}", accessory),
                    message: format!("must be between 0 and 1, got {}", chance),
                });
            }
        }

        if !(1..=MAX_SCALE).contains(&self.output.scale) {
            errors.push(ConfigValidationError {
                field: "output.scale".to_string(),
                message: format!("must be between 1 and {}, got {}", MAX_SCALE, self.output.scale),
            });
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}
