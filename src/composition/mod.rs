//! Layer composition for a ducky
//!
//! The base duck is five tinted template layers drawn bottom to top:
//! beak, body, wing, then two eye layers. Each accessory category is then
//! rolled independently and, if selected, one sprite from its pool is drawn
//! on top untinted.

mod blend;
mod error;

pub use blend::{composite_over, tint};
pub use error::CompositionError;

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::assets::{Accessory, AssetBundle, Template, DUCKY_HEIGHT, DUCKY_WIDTH};
use crate::color::{opaque, Color};
use crate::palette::DuckyColors;
use crate::rng::RandomSource;

/// Probability of each accessory category being applied.
///
/// A roll selects the category when it is strictly below the chance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessoryChances {
    pub hat: f64,
    pub equipment: f64,
    pub outfit: f64,
}

impl Default for AccessoryChances {
    fn default() -> Self {
        Self {
            hat: Accessory::Hat.default_chance(),
            equipment: Accessory::Equipment.default_chance(),
            outfit: Accessory::Outfit.default_chance(),
        }
    }
}

impl AccessoryChances {
    pub fn chance(&self, accessory: Accessory) -> f64 {
        match accessory {
            Accessory::Hat => self.hat,
            Accessory::Equipment => self.equipment,
            Accessory::Outfit => self.outfit,
        }
    }
}

/// A finished ducky.
#[derive(Debug, Clone)]
pub struct GeneratedDucky {
    pub image: RgbaImage,
    pub colors: DuckyColors,
    pub has_hat: bool,
    pub has_equipment: bool,
    pub has_outfit: bool,
}

impl GeneratedDucky {
    /// Whether the given accessory category was applied.
    pub fn has(&self, accessory: Accessory) -> bool {
        match accessory {
            Accessory::Hat => self.has_hat,
            Accessory::Equipment => self.has_equipment,
            Accessory::Outfit => self.has_outfit,
        }
    }
}

/// Owns the canvas for one generation.
#[derive(Debug, Clone)]
pub struct LayerComposer {
    canvas: RgbaImage,
}

impl Default for LayerComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerComposer {
    /// Start from a fully transparent canvas.
    pub fn new() -> Self {
        Self { canvas: RgbaImage::new(DUCKY_WIDTH, DUCKY_HEIGHT) }
    }

    /// Add `layer` on top of the canvas, multiplied by `recolor` if given.
    ///
    /// `name` is only used in errors and logs.
    pub fn apply_layer(
        &mut self,
        name: &str,
        layer: &RgbaImage,
        recolor: Option<Color>,
    ) -> Result<(), CompositionError> {
        if layer.dimensions() != self.canvas.dimensions() {
            return Err(CompositionError::SizeMismatch {
                layer: name.to_string(),
                size: layer.dimensions(),
                expected: self.canvas.dimensions(),
            });
        }

        match recolor {
            Some(color) => {
                log::debug!("applying {} tinted {:?}", name, color);
                composite_over(&mut self.canvas, &tint(layer, opaque(color)))?;
            }
            None => {
                log::debug!("applying {}", name);
                composite_over(&mut self.canvas, layer)?;
            }
        }
        Ok(())
    }

    pub fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    pub fn into_image(self) -> RgbaImage {
        self.canvas
    }
}

/// Template layers in draw order with the color each is tinted with.
pub fn base_layers(colors: &DuckyColors) -> [(Template, Color); 5] {
    [
        (Template::Beak, colors.beak),
        (Template::Body, colors.body),
        (Template::Wing, colors.wing),
        (Template::Eye, colors.eye),
        (Template::EyeDetail, colors.eye),
    ]
}

/// Compose a ducky from planned colors and shared assets.
///
/// Consumes one roll per accessory category, plus one index draw for every
/// category that is selected.
///
/// # Errors
///
/// Returns `CompositionError` if a selected pool is empty or a sprite has the
/// wrong size. Nothing is returned in that case, not even a partial image.
pub fn compose<R: RandomSource + ?Sized>(
    colors: &DuckyColors,
    assets: &AssetBundle,
    chances: &AccessoryChances,
    rng: &mut R,
) -> Result<GeneratedDucky, CompositionError> {
    let mut composer = LayerComposer::new();

    for (template, color) in base_layers(colors) {
        composer.apply_layer(&template.to_string(), assets.template(template), Some(color))?;
    }

    let mut applied = [false; 3];
    for (slot, accessory) in Accessory::ALL.into_iter().enumerate() {
        applied[slot] = roll_accessory(&mut composer, accessory, chances, assets, rng)?;
    }
    let [has_hat, has_equipment, has_outfit] = applied;

    Ok(GeneratedDucky {
        image: composer.into_image(),
        colors: *colors,
        has_hat,
        has_equipment,
        has_outfit,
    })
}

fn roll_accessory<R: RandomSource + ?Sized>(
    composer: &mut LayerComposer,
    accessory: Accessory,
    chances: &AccessoryChances,
    assets: &AssetBundle,
    rng: &mut R,
) -> Result<bool, CompositionError> {
    let chance = chances.chance(accessory);
    let roll = rng.next_unit();
    let selected = roll < chance;
    if !selected {
        log::debug!("{} roll {:.4} >= {}, skipped", accessory, roll, chance);
        return Ok(false);
    }

    let pool = assets.pool(accessory);
    if pool.is_empty() {
        return Err(CompositionError::EmptyPool { accessory });
    }
    let index = rng.next_index(pool.len());
    composer.apply_layer(&format!("{} #{}", accessory, index), &pool[index], None)?;
    Ok(true)
}
