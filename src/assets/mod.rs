//! Sprite assets shared by every generation
//!
//! An [`AssetBundle`] is built once (usually by [`loader::load_assets`]) and
//! then only borrowed. Generation never mutates a sprite; tinting allocates a
//! new image.

pub mod loader;

pub use loader::{load_assets, AssetError};

use std::fmt;

use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// Width of every sprite and of the output canvas.
pub const DUCKY_WIDTH: u32 = 499;
/// Height of every sprite and of the output canvas.
pub const DUCKY_HEIGHT: u32 = 600;

/// The five base template layers, keyed 1-5 on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Template {
    EyeDetail = 1,
    Eye = 2,
    Wing = 3,
    Body = 4,
    Beak = 5,
}

impl Template {
    /// All templates in key order.
    pub const ALL: [Template; 5] =
        [Template::EyeDetail, Template::Eye, Template::Wing, Template::Body, Template::Beak];

    /// Numeric key (1-5).
    pub fn key(self) -> u8 {
        self as u8
    }

    /// Look up a template by its numeric key.
    pub fn from_key(key: u8) -> Option<Template> {
        Template::ALL.into_iter().find(|t| t.key() == key)
    }

    fn slot(self) -> usize {
        self.key() as usize - 1
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "template {}", self.key())
    }
}

/// Optional accessory categories, applied untinted on top of the base duck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accessory {
    Hat,
    Equipment,
    Outfit,
}

impl Accessory {
    /// All categories in the order they are rolled and drawn.
    pub const ALL: [Accessory; 3] = [Accessory::Hat, Accessory::Equipment, Accessory::Outfit];

    /// Directory name under `accessories/`.
    pub fn dir_name(self) -> &'static str {
        match self {
            Accessory::Hat => "hats",
            Accessory::Equipment => "equipment",
            Accessory::Outfit => "outfits",
        }
    }

    /// Default probability that a ducky gets this accessory.
    pub fn default_chance(self) -> f64 {
        match self {
            Accessory::Hat => 0.7,
            Accessory::Equipment => 0.4,
            Accessory::Outfit => 0.5,
        }
    }
}

impl fmt::Display for Accessory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Accessory::Hat => "hat",
            Accessory::Equipment => "equipment",
            Accessory::Outfit => "outfit",
        };
        f.write_str(name)
    }
}

/// Templates plus accessory pools.
#[derive(Debug, Clone)]
pub struct AssetBundle {
    templates: [RgbaImage; 5],
    hats: Vec<RgbaImage>,
    equipment: Vec<RgbaImage>,
    outfits: Vec<RgbaImage>,
}

impl AssetBundle {
    /// Build a bundle. `templates[i]` is the template with key `i + 1`.
    pub fn new(
        templates: [RgbaImage; 5],
        hats: Vec<RgbaImage>,
        equipment: Vec<RgbaImage>,
        outfits: Vec<RgbaImage>,
    ) -> Self {
        Self { templates, hats, equipment, outfits }
    }

    pub fn template(&self, template: Template) -> &RgbaImage {
        &self.templates[template.slot()]
    }

    /// Sprites available for an accessory category. May be empty.
    pub fn pool(&self, accessory: Accessory) -> &[RgbaImage] {
        match accessory {
            Accessory::Hat => &self.hats,
            Accessory::Equipment => &self.equipment,
            Accessory::Outfit => &self.outfits,
        }
    }

    /// Total number of sprites in the bundle.
    pub fn sprite_count(&self) -> usize {
        self.templates.len() + self.hats.len() + self.equipment.len() + self.outfits.len()
    }
}
