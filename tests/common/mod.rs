//! Shared fixtures for integration tests
//!
//! Sprites are synthetic so tests never depend on real artwork. Template `k`
//! is opaque white in rows `0..k*100`, so each layer shows through in its own
//! band and the draw order can be read back from the output.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use duckies::assets::{AssetBundle, DUCKY_HEIGHT, DUCKY_WIDTH};
use duckies::rng::RandomSource;
use image::{Rgba, RgbaImage};
use sha2::{Digest, Sha256};

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const HAT_RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const EQUIPMENT_GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
pub const OUTFIT_BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

/// Opaque `color` in rows `0..rows`, transparent below.
pub fn band(rows: u32, color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_fn(DUCKY_WIDTH, DUCKY_HEIGHT, |_, y| if y < rows { color } else { Rgba([0; 4]) })
}

/// Opaque `color` in a 10x10 square with its top-left corner at `(x0, y0)`.
pub fn patch(x0: u32, y0: u32, color: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_fn(DUCKY_WIDTH, DUCKY_HEIGHT, |x, y| {
        if x >= x0 && x < x0 + 10 && y >= y0 && y < y0 + 10 {
            color
        } else {
            Rgba([0; 4])
        }
    })
}

pub fn template(key: u8) -> RgbaImage {
    band(key as u32 * 100, WHITE)
}

/// Bundle with stacked templates and one patch per accessory pool.
pub fn stacked_bundle() -> AssetBundle {
    AssetBundle::new(
        std::array::from_fn(|i| template(i as u8 + 1)),
        vec![patch(0, 0, HAT_RED)],
        vec![patch(100, 0, EQUIPMENT_GREEN)],
        vec![patch(200, 0, OUTFIT_BLUE)],
    )
}

/// Write the same sprites as [`stacked_bundle`] as an asset tree on disk.
pub fn write_asset_tree(root: &Path, with_hats: bool) {
    let templates = root.join("silverduck templates");
    fs::create_dir_all(&templates).expect("should create template dir");
    for key in 1..=5u8 {
        template(key)
            .save(templates.join(format!("{key}_layer.png")))
            .expect("should write template");
    }

    let mut pools = vec![
        ("equipment", patch(100, 0, EQUIPMENT_GREEN)),
        ("outfits", patch(200, 0, OUTFIT_BLUE)),
    ];
    if with_hats {
        pools.push(("hats", patch(0, 0, HAT_RED)));
    }
    for (dir, sprite) in pools {
        let dir = root.join("accessories").join(dir);
        fs::create_dir_all(&dir).expect("should create accessory dir");
        sprite.save(dir.join("only.png")).expect("should write accessory");
    }
}

/// SHA256 of the raw RGBA bytes.
pub fn pixel_hash(image: &RgbaImage) -> String {
    let mut hasher = Sha256::new();
    hasher.update(image.as_raw());
    format!("{:x}", hasher.finalize())
}

/// Wraps a source and records every draw it hands out.
pub struct Recording<R> {
    inner: R,
    pub units: Vec<f64>,
    /// `(len, drawn index)` pairs
    pub indices: Vec<(usize, usize)>,
}

impl<R: RandomSource> Recording<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, units: Vec::new(), indices: Vec::new() }
    }
}

impl<R: RandomSource> RandomSource for Recording<R> {
    fn next_unit(&mut self) -> f64 {
        let unit = self.inner.next_unit();
        self.units.push(unit);
        unit
    }

    fn next_index(&mut self, len: usize) -> usize {
        let index = self.inner.next_index(len);
        self.indices.push((len, index));
        index
    }
}

/// Replays fixed draws.
pub struct Scripted {
    pub units: Vec<f64>,
    pub indices: Vec<usize>,
}

impl RandomSource for Scripted {
    fn next_unit(&mut self) -> f64 {
        self.units.remove(0)
    }

    fn next_index(&mut self, _len: usize) -> usize {
        self.indices.remove(0)
    }
}
