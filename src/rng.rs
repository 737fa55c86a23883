//! Random sources for color planning and accessory rolls
//!
//! Generation never touches a global generator. Callers pass a
//! [`RandomSource`] explicitly, which makes runs reproducible from a seed and
//! keeps concurrent generations independent.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use thiserror::Error;

/// Deterministic generator used by the CLI and tests.
pub type DuckRng = Pcg64;

/// The two kinds of draws generation needs.
///
/// Every [`rand::Rng`] implements this, so any generator can be passed in.
/// Tests can implement it directly to script exact draw sequences.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Error for seed strings that are neither integers nor floats.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid seed '{0}', expected an integer or a number like 0.5")]
pub struct SeedError(pub String);

/// Parse a seed given on the command line.
///
/// Integers are used as-is. Floats (e.g. `0.5`) are mapped through their bit
/// pattern so that fractional seeds stay distinct from each other.
///
/// ```
/// use duckies::rng::parse_seed;
///
/// assert_eq!(parse_seed("42").unwrap(), 42);
/// assert_eq!(parse_seed("0.5").unwrap(), 0.5f64.to_bits());
/// assert!(parse_seed("duck").is_err());
/// ```
pub fn parse_seed(s: &str) -> Result<u64, SeedError> {
    let s = s.trim();
    if let Ok(seed) = s.parse::<u64>() {
        return Ok(seed);
    }
    match s.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value.to_bits()),
        _ => Err(SeedError(s.to_string())),
    }
}

/// Build a generator from an optional seed.
///
/// Without a seed the generator is seeded from the thread-local entropy source.
pub fn seeded_rng(seed: Option<u64>) -> DuckRng {
    match seed {
        Some(seed) => DuckRng::seed_from_u64(seed),
        None => DuckRng::from_rng(&mut rand::rng()),
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use super::RandomSource;
    use std::collections::VecDeque;

    /// Replays fixed unit draws and indices, panicking when either runs out.
    pub(crate) struct Scripted {
        units: VecDeque<f64>,
        indices: VecDeque<usize>,
    }

    impl Scripted {
        pub(crate) fn new(units: Vec<f64>, indices: Vec<usize>) -> Self {
            Self { units: units.into(), indices: indices.into() }
        }

        pub(crate) fn is_exhausted(&self) -> bool {
            self.units.is_empty() && self.indices.is_empty()
        }
    }

    impl RandomSource for Scripted {
        fn next_unit(&mut self) -> f64 {
            self.units.pop_front().expect("scripted unit draws exhausted")
        }

        fn next_index(&mut self, len: usize) -> usize {
            let index = self.indices.pop_front().expect("scripted index draws exhausted");
            assert!(index < len, "scripted index {index} out of range for {len}");
            index
        }
    }
}
