//! Core engine types: errors, configuration, pin sources, players.
//!
//! Everything here is independent of how a frame is scored; the `scoring`
//! and `rules` modules build on these pieces.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{GameConfig, DEFAULT_TOTAL_PINS, DEFAULT_TURNS};
pub use error::{BowlingError, Result};
pub use player::{Player, PlayerId, PlayerIdAllocator};
pub use rng::{ConstantPins, GameRng, PinSource, ScriptedPins};
