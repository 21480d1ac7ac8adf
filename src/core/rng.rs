//! Pin-count sources.
//!
//! A `PinSource` decides how many pins a knock takes down. The default is a
//! seeded uniform draw (`GameRng`); tests swap in `ScriptedPins` or
//! `ConstantPins` to make turns fully deterministic.
//!
//! ```
//! use kata_bowling::core::{GameRng, PinSource};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! // Same seed, same knocks
//! assert_eq!(rng1.next(10).unwrap(), rng2.next(10).unwrap());
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::warn;

use super::error::{BowlingError, Result};

/// Strategy producing knock values.
pub trait PinSource {
    /// Produce a value in `[0, max_value]`.
    ///
    /// Implementations are not required to respect the bound; the frame
    /// rejects out-of-range knocks with `InvalidHitCount`.
    fn next(&mut self, max_value: u8) -> Result<u8>;

    /// Seed that reproduces this source, if it is seeded at all.
    fn seed(&self) -> Option<u64> {
        None
    }
}

impl<S: PinSource + ?Sized> PinSource for &mut S {
    fn next(&mut self, max_value: u8) -> Result<u8> {
        (**self).next(max_value)
    }

    fn seed(&self) -> Option<u64> {
        (**self).seed()
    }
}

impl<S: PinSource + ?Sized> PinSource for Box<S> {
    fn next(&mut self, max_value: u8) -> Result<u8> {
        (**self).next(max_value)
    }

    fn seed(&self) -> Option<u64> {
        (**self).seed()
    }
}

/// Deterministic uniform RNG.
///
/// Uses ChaCha8 for speed; the same seed always yields the same knocks.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with a seed drawn from the thread RNG.
    ///
    /// The seed is still recorded so a run can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl PinSource for GameRng {
    fn next(&mut self, max_value: u8) -> Result<u8> {
        Ok(self.inner.gen_range(0..=max_value))
    }

    fn seed(&self) -> Option<u64> {
        Some(self.seed)
    }
}

/// Replays a fixed sequence of knock values.
///
/// Values are handed out as-is, so a script can deliberately knock more
/// pins than are standing.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPins {
    values: VecDeque<u8>,
}

impl ScriptedPins {
    /// Create a source that yields `values` in order.
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Values not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl PinSource for ScriptedPins {
    fn next(&mut self, _max_value: u8) -> Result<u8> {
        self.values.pop_front().ok_or_else(|| {
            warn!("scripted pin source ran dry");
            BowlingError::PinSourceExhausted
        })
    }
}

/// Always knocks the same number of pins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConstantPins(pub u8);

impl PinSource for ConstantPins {
    fn next(&mut self, _max_value: u8) -> Result<u8> {
        Ok(self.0)
    }
}
