//! PNG output, upscaling, and JSON reports

use image::imageops::FilterType;
use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

use crate::color::to_hex;
use crate::composition::GeneratedDucky;
use crate::palette::DuckyColors;

/// Error type for output operations
#[derive(Debug)]
pub enum OutputError {
    /// IO error during file operations
    Io(io::Error),
    /// Image encoding error
    Image(image::ImageError),
    /// Report serialization error
    Json(serde_json::Error),
}

impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputError::Io(e) => write!(f, "IO error: {}", e),
            OutputError::Image(e) => write!(f, "Image error: {}", e),
            OutputError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::Io(e) => Some(e),
            OutputError::Image(e) => Some(e),
            OutputError::Json(e) => Some(e),
        }
    }
}

impl From<io::Error> for OutputError {
    fn from(e: io::Error) -> Self {
        OutputError::Io(e)
    }
}

impl From<image::ImageError> for OutputError {
    fn from(e: image::ImageError) -> Self {
        OutputError::Image(e)
    }
}

impl From<serde_json::Error> for OutputError {
    fn from(e: serde_json::Error) -> Self {
        OutputError::Json(e)
    }
}

/// Hex colors of a ducky, as written in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorReport {
    pub eye: String,
    pub wing: String,
    pub body: String,
    pub beak: String,
}

impl ColorReport {
    pub fn new(colors: &DuckyColors) -> Self {
        Self {
            eye: to_hex(colors.eye),
            wing: to_hex(colors.wing),
            body: to_hex(colors.body),
            beak: to_hex(colors.beak),
        }
    }
}

/// Summary of a generated ducky.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuckyReport {
    /// Seed used, if one was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub has_hat: bool,
    pub has_equipment: bool,
    pub has_outfit: bool,
    pub colors: ColorReport,
}

impl DuckyReport {
    pub fn new(ducky: &GeneratedDucky, seed: Option<u64>) -> Self {
        Self {
            seed,
            has_hat: ducky.has_hat,
            has_equipment: ducky.has_equipment,
            has_outfit: ducky.has_outfit,
            colors: ColorReport::new(&ducky.colors),
        }
    }
}

/// Create the parent directory of `path` if it is missing.
fn ensure_parent(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Save an RGBA image to a PNG file, creating parent directories.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    ensure_parent(path)?;
    image.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

/// Write a report as pretty-printed JSON, creating parent directories.
pub fn write_report(report: &DuckyReport, path: &Path) -> Result<(), OutputError> {
    ensure_parent(path)?;
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json + "\n")?;
    Ok(())
}

/// Scale image by integer factor using nearest-neighbor interpolation.
///
/// Returns the original image if factor is 1 or less, or if the scaled
/// size would not fit in `u32`.
pub fn scale_image(image: RgbaImage, factor: u32) -> RgbaImage {
    if factor <= 1 {
        return image;
    }
    let (w, h) = image.dimensions();
    match (w.checked_mul(factor), h.checked_mul(factor)) {
        (Some(width), Some(height)) => {
            image::imageops::resize(&image, width, height, FilterType::Nearest)
        }
        _ => {
            log::warn!("scale factor {} too large for {}x{}, not scaling", factor, w, h);
            image
        }
    }
}
