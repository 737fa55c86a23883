//! Colors command implementation

use std::process::ExitCode;

use crate::color::to_hex;
use crate::output::ColorReport;
use crate::palette::{plan_colors_from, ColorSeed};
use crate::rng::seeded_rng;

use super::{seed_arg, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the colors command
///
/// `hue` and `dark_variant` replace the corresponding random choices when given.
pub fn run_colors(
    seed: Option<&str>,
    hue: Option<f64>,
    dark_variant: Option<bool>,
    json: bool,
) -> ExitCode {
    let seed = match seed_arg(seed) {
        Ok(seed) => seed,
        Err(code) => return code,
    };

    let mut rng = seeded_rng(seed);
    let drawn = ColorSeed::draw(&mut rng);
    let color_seed = ColorSeed::new(
        hue.unwrap_or(drawn.hue),
        dark_variant.unwrap_or(drawn.dark_variant),
    );
    let colors = plan_colors_from(color_seed, &mut rng);

    if json {
        match serde_json::to_string_pretty(&ColorReport::new(&colors)) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        println!("hue: {:.4}", color_seed.hue);
        println!("dark_variant: {}", color_seed.dark_variant);
        println!("eye: {}", to_hex(colors.eye));
        println!("wing: {}", to_hex(colors.wing));
        println!("body: {}", to_hex(colors.body));
        println!("beak: {}", to_hex(colors.beak));
    }

    ExitCode::from(EXIT_SUCCESS)
}
