//! Loading sprite assets from a directory tree
//!
//! Expected layout under the asset root:
//!
//! ```text
//! silverduck templates/1*.png ... 5*.png
//! accessories/hats/*.png
//! accessories/equipment/*.png
//! accessories/outfits/*.png
//! ```
//!
//! Template keys come from the leading digit of the file name. Accessory
//! pools are sorted by path so that a seed always picks the same sprite.

use std::path::{Path, PathBuf};

use glob::{glob_with, MatchOptions};
use image::RgbaImage;
use thiserror::Error;

use super::{Accessory, AssetBundle, Template, DUCKY_HEIGHT, DUCKY_WIDTH};

/// Directory holding the five base templates.
pub const TEMPLATE_DIR: &str = "silverduck templates";
/// Directory holding one sub-directory per accessory category.
pub const ACCESSORY_DIR: &str = "accessories";

/// Error when loading assets.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AssetError {
    /// Required directory does not exist
    #[error("Asset directory '{}' not found", .0.display())]
    MissingDirectory(PathBuf),
    /// Asset path could not be turned into a glob pattern
    #[error("Invalid asset pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    /// Directory listing failed
    #[error("Failed to list assets: {0}")]
    Glob(#[from] glob::GlobError),
    /// File could not be opened or decoded
    #[error("Failed to load '{}': {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// Template file name does not start with a key from 1 to 5
    #[error("Template file '{}' must start with a key from 1 to 5", .0.display())]
    BadTemplateName(PathBuf),
    /// Two template files share a key
    #[error("Template {key} is defined twice ('{}' and '{}')", first.display(), second.display())]
    DuplicateTemplate { key: u8, first: PathBuf, second: PathBuf },
    /// A template key has no file
    #[error("Template {key} is missing from '{}'", dir.display())]
    MissingTemplate { key: u8, dir: PathBuf },
    /// Sprite does not match the canvas size
    #[error("Sprite '{}' is {}x{}, expected {}x{}", path.display(), size.0, size.1, expected.0, expected.1)]
    SizeMismatch { path: PathBuf, size: (u32, u32), expected: (u32, u32) },
}

/// Load all templates and accessory pools under `root`.
///
/// Missing accessory directories give empty pools; generation only fails if
/// such a category is actually rolled.
pub fn load_assets(root: &Path) -> Result<AssetBundle, AssetError> {
    if !root.is_dir() {
        return Err(AssetError::MissingDirectory(root.to_path_buf()));
    }

    let templates = load_templates(&root.join(TEMPLATE_DIR))?;

    let accessories = root.join(ACCESSORY_DIR);
    let hats = load_pool(&accessories, Accessory::Hat)?;
    let equipment = load_pool(&accessories, Accessory::Equipment)?;
    let outfits = load_pool(&accessories, Accessory::Outfit)?;

    let bundle = AssetBundle::new(templates, hats, equipment, outfits);
    log::info!(
        "loaded {} sprites from {} ({} hats, {} equipment, {} outfits)",
        bundle.sprite_count(),
        root.display(),
        bundle.pool(Accessory::Hat).len(),
        bundle.pool(Accessory::Equipment).len(),
        bundle.pool(Accessory::Outfit).len()
    );
    Ok(bundle)
}

/// Parse the template key from a file name like `3_wing.png`.
pub fn template_key(path: &Path) -> Option<u8> {
    let first = path.file_name()?.to_str()?.chars().next()?;
    let key = first.to_digit(10)? as u8;
    Template::from_key(key).map(Template::key)
}

fn load_templates(dir: &Path) -> Result<[RgbaImage; 5], AssetError> {
    if !dir.is_dir() {
        return Err(AssetError::MissingDirectory(dir.to_path_buf()));
    }

    let mut slots: [Option<(PathBuf, RgbaImage)>; 5] = Default::default();
    for path in list_pngs(dir)? {
        let key = template_key(&path).ok_or_else(|| AssetError::BadTemplateName(path.clone()))?;
        let slot = &mut slots[key as usize - 1];
        if let Some((first, _)) = slot {
            return Err(AssetError::DuplicateTemplate { key, first: first.clone(), second: path });
        }
        let sprite = load_sprite(&path)?;
        log::debug!("template {} <- {}", key, path.display());
        *slot = Some((path, sprite));
    }

    if let Some(missing) = slots.iter().position(Option::is_none) {
        return Err(AssetError::MissingTemplate { key: missing as u8 + 1, dir: dir.to_path_buf() });
    }
    Ok(slots.map(|slot| slot.map(|(_, sprite)| sprite).unwrap_or_default()))
}

fn load_pool(accessories: &Path, accessory: Accessory) -> Result<Vec<RgbaImage>, AssetError> {
    let dir = accessories.join(accessory.dir_name());
    if !dir.is_dir() {
        log::warn!("no {} directory at {}, pool is empty", accessory, dir.display());
        return Ok(Vec::new());
    }
    list_pngs(&dir)?.iter().map(|path| load_sprite(path)).collect()
}

/// List `*.png` files directly inside `dir`, sorted by path.
///
/// The extension is matched case-insensitively, so `HAT.PNG` is included.
fn list_pngs(dir: &Path) -> Result<Vec<PathBuf>, AssetError> {
    let pattern = format!("{}/*.png", glob::Pattern::escape(&dir.to_string_lossy()));
    let options = MatchOptions { case_sensitive: false, ..MatchOptions::new() };
    let mut paths = glob_with(&pattern, options)?.collect::<Result<Vec<_>, _>>()?;
    paths.sort();
    Ok(paths)
}

fn load_sprite(path: &Path) -> Result<RgbaImage, AssetError> {
    let sprite = image::open(path)
        .map_err(|source| AssetError::Decode { path: path.to_path_buf(), source })?
        .to_rgba8();

    let expected = (DUCKY_WIDTH, DUCKY_HEIGHT);
    if sprite.dimensions() != expected {
        return Err(AssetError::SizeMismatch {
            path: path.to_path_buf(),
            size: sprite.dimensions(),
            expected,
        });
    }
    Ok(sprite)
}
