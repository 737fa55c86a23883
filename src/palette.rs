//! Color planning for a ducky
//!
//! One hue and one dark/light choice are shared by every part of the duck so
//! the parts stay in the same color family. Each part still gets its own
//! lightness draw so the layers remain distinguishable.
//!
//! Greens and blues look washed out at high lightness, so lightness and
//! saturation are pulled down by `hue_fix`, which grows as the hue approaches
//! cyan (0.5).

use crate::color::{wrap_unit, Color, Hls};
use crate::rng::RandomSource;

/// Lower bound of the per-part lightness draw.
pub const LIGHTNESS_MIN: f64 = 0.5;
/// Upper bound of the per-part lightness draw.
pub const LIGHTNESS_MAX: f64 = 0.65;
/// Lightness added to the eye color.
pub const EYE_LIGHTNESS_BOOST: f64 = 0.4;
/// Eye lightness never exceeds this.
pub const EYE_LIGHTNESS_CAP: f64 = 0.9;
/// Hue offset of the beak relative to the shared hue.
pub const BEAK_HUE_SHIFT: f64 = 0.1;

const LIGHTNESS_FIX: f64 = 0.15;
const DARK_LIGHTNESS_FIX: f64 = 0.25;
const SATURATION_FIX: f64 = 0.1;

/// The four colors of a ducky.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuckyColors {
    pub eye: Color,
    pub wing: Color,
    pub body: Color,
    pub beak: Color,
}

/// The choices shared by all four colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSeed {
    /// Shared hue in `[0, 1)`
    pub hue: f64,
    /// Darken colors further near cyan
    pub dark_variant: bool,
}

impl ColorSeed {
    /// Build a seed from an external hue. The hue is wrapped into `[0, 1)`.
    pub fn new(hue: f64, dark_variant: bool) -> Self {
        let hue = if hue.is_finite() { wrap_unit(hue) } else { 0.0 };
        Self { hue, dark_variant }
    }

    /// Draw the hue, then the dark/light choice (index 0 of `[dark, light]`).
    pub fn draw<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let hue = rng.next_unit();
        let dark_variant = rng.next_index(2) == 0;
        Self { hue, dark_variant }
    }
}

/// Distance-based correction factor: `(1 - |hue - 0.5|)^2`.
///
/// 1.0 at cyan, 0.25 at the red ends of the hue circle.
pub fn hue_fix(hue: f64) -> f64 {
    (1.0 - (hue - 0.5).abs()).powi(2)
}

/// Make one part color with its own lightness draw.
pub fn make_color<R: RandomSource + ?Sized>(seed: ColorSeed, rng: &mut R) -> Hls {
    let mut lightness = LIGHTNESS_MIN + (LIGHTNESS_MAX - LIGHTNESS_MIN) * rng.next_unit();
    let mut saturation = 1.0;

    let fix = hue_fix(seed.hue);
    lightness -= fix * LIGHTNESS_FIX;
    if seed.dark_variant {
        lightness -= fix * DARK_LIGHTNESS_FIX;
    }
    saturation -= fix * SATURATION_FIX;

    Hls::new(seed.hue, lightness, saturation)
}

/// Plan a full color set, drawing the seed from `rng`.
pub fn plan_colors<R: RandomSource + ?Sized>(rng: &mut R) -> DuckyColors {
    let seed = ColorSeed::draw(rng);
    plan_colors_from(seed, rng)
}

/// Plan a full color set from a given seed. Consumes four lightness draws
/// in the order eye, wing, body, beak.
pub fn plan_colors_from<R: RandomSource + ?Sized>(seed: ColorSeed, rng: &mut R) -> DuckyColors {
    let eye = make_color(seed, rng);
    let wing = make_color(seed, rng);
    let body = make_color(seed, rng);
    let beak = make_color(seed, rng);

    let eye = brighten_eye(eye);
    let beak = shift_beak(beak);

    log::debug!(
        "planned colors for hue {:.4} (dark: {}): eye {:?}, wing {:?}, body {:?}, beak {:?}",
        seed.hue,
        seed.dark_variant,
        eye,
        wing,
        body,
        beak
    );

    DuckyColors {
        eye: eye.to_color(),
        wing: wing.to_color(),
        body: body.to_color(),
        beak: beak.to_color(),
    }
}

fn brighten_eye(eye: Hls) -> Hls {
    Hls { lightness: (eye.lightness + EYE_LIGHTNESS_BOOST).min(EYE_LIGHTNESS_CAP), ..eye }
}

fn shift_beak(beak: Hls) -> Hls {
    Hls { hue: wrap_unit(beak.hue + BEAK_HUE_SHIFT), ..beak }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::scripted::Scripted;
    use crate::rng::seeded_rng;

    #[test]
    fn test_hue_fix_extremes() {
        assert_eq!(hue_fix(0.5), 1.0);
        assert_eq!(hue_fix(0.0), 0.25);
        assert_eq!(hue_fix(1.0), 0.25);
    }

    #[test]
    fn test_hue_fix_range_and_shape() {
        for i in 0..=1000 {
            let h = i as f64 / 1000.0;
            let fix = hue_fix(h);
            assert!((0.0..=1.0).contains(&fix));
            assert!(fix <= hue_fix(0.5));
            assert!(fix >= hue_fix(0.0));
        }
        // Symmetric around cyan
        assert!((hue_fix(0.2) - hue_fix(0.8)).abs() < 1e-12);
    }

    #[test]
    fn test_make_color_light_variant() {
        let mut rng = Scripted::new(vec![0.0], vec![]);
        let hls = make_color(ColorSeed::new(0.5, false), &mut rng);
        assert!((hls.lightness - (0.5 - 0.15)).abs() < 1e-12);
        assert!((hls.saturation - 0.9).abs() < 1e-12);
        assert_eq!(hls.hue, 0.5);
    }

    #[test]
    fn test_make_color_dark_variant() {
        let mut rng = Scripted::new(vec![0.0], vec![]);
        let hls = make_color(ColorSeed::new(0.5, true), &mut rng);
        assert!((hls.lightness - (0.5 - 0.15 - 0.25)).abs() < 1e-12);
    }

    #[test]
    fn test_lightness_draw_bounds() {
        let seed = ColorSeed::new(0.0, false);
        let mut low = Scripted::new(vec![0.0], vec![]);
        let mut high = Scripted::new(vec![0.999_999], vec![]);
        let fix = hue_fix(0.0) * 0.15;
        assert!((make_color(seed, &mut low).lightness - (0.5 - fix)).abs() < 1e-9);
        assert!((make_color(seed, &mut high).lightness - (0.65 - fix)).abs() < 1e-6);
    }

    #[test]
    fn test_seed_draw_order() {
        let mut dark = Scripted::new(vec![0.3], vec![0]);
        assert_eq!(ColorSeed::draw(&mut dark), ColorSeed { hue: 0.3, dark_variant: true });

        let mut light = Scripted::new(vec![0.3], vec![1]);
        assert_eq!(ColorSeed::draw(&mut light), ColorSeed { hue: 0.3, dark_variant: false });
    }

    #[test]
    fn test_eye_lightness_capped() {
        for i in 0..=100 {
            let eye = brighten_eye(Hls::new(0.1, i as f64 / 100.0, 1.0));
            assert!(eye.lightness <= EYE_LIGHTNESS_CAP);
        }
        assert_eq!(brighten_eye(Hls::new(0.1, 0.6, 1.0)).lightness, 0.9);
        assert!((brighten_eye(Hls::new(0.1, 0.3, 1.0)).lightness - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_beak_hue_shift_wraps() {
        for i in 0..1000 {
            let base = i as f64 / 1000.0;
            let beak = shift_beak(Hls::new(base, 0.5, 1.0));
            let expected = (base + 0.1) % 1.0;
            assert!((beak.hue - expected).abs() < 1e-12, "base {base}");
            assert!(beak.hue < 1.0);
        }
    }

    #[test]
    fn test_plan_colors_uses_four_lightness_draws() {
        // Same hue, different lightness draws: wing and body must differ
        let mut rng = Scripted::new(vec![0.0, 0.0, 0.0, 0.999, 0.0], vec![1]);
        let colors = plan_colors(&mut rng);
        assert_ne!(colors.wing, colors.body);
        assert!(rng.is_exhausted());
    }

    #[test]
    fn test_plan_colors_red_hue() {
        // Hue 0 with minimum lightness: l = 0.5 - 0.25 * 0.15, s = 1 - 0.025
        let mut rng = Scripted::new(vec![0.0; 5], vec![1]);
        let colors = plan_colors(&mut rng);
        let wing = colors.wing;
        assert!(wing[0] > wing[1] && wing[0] > wing[2], "wing should be red: {wing:?}");
        assert_eq!(wing[1], wing[2]);
        assert_eq!(colors.wing, colors.body);
        // Eye is much lighter than the wing
        assert!(colors.eye[1] > wing[1]);
        // Beak is shifted towards orange
        assert!(colors.beak[1] > wing[1]);
    }

    #[test]
    fn test_plan_colors_deterministic_with_seed() {
        let a = plan_colors(&mut seeded_rng(Some(2024)));
        let b = plan_colors(&mut seeded_rng(Some(2024)));
        assert_eq!(a, b);
    }

    #[test]
    fn test_color_seed_new_wraps_hue() {
        assert!((ColorSeed::new(1.25, false).hue - 0.25).abs() < 1e-12);
        assert_eq!(ColorSeed::new(f64::NAN, true).hue, 0.0);
    }
}
