//! Duckies - procedural duck sprite generator
//!
//! This library provides functionality to:
//! - Plan a harmonious set of duck colors from one random hue
//! - Layer tinted template sprites and random accessories into one image
//! - Load sprite assets, configuration, and write PNG output
//!
//! Randomness is always passed in explicitly, so a seed fully determines the
//! result.
//!
//! ```no_run
//! use duckies::assets::load_assets;
//! use duckies::generator::make_ducky;
//! use duckies::rng::seeded_rng;
//!
//! let assets = load_assets(std::path::Path::new("img/duck-builder")).unwrap();
//! let ducky = make_ducky(&assets, &mut seeded_rng(Some(42))).unwrap();
//! println!("hat: {}", ducky.has_hat);
//! ```

pub mod assets;
pub mod cli;
pub mod color;
pub mod composition;
pub mod config;
pub mod generator;
pub mod output;
pub mod palette;
pub mod rng;
