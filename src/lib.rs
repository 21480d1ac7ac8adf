//! # kata-bowling
//!
//! A bowling-style scoring kata: a player knocks down pins across tries and
//! the engine scores each turn, including spare and strike bonuses.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Knocks come from an injectable `PinSource`. The
//!    default is a seeded ChaCha8 RNG; tests script exact knock sequences.
//!
//! 2. **Invariants Are Errors**: A third knock, too many pins, a second
//!    bonus frame or a bonus frame on an open frame all return a
//!    `BowlingError` instead of being silently tolerated.
//!
//! 3. **Stateless Rules**: `GameRuleEngine` and `Scorer` are pure functions
//!    over frame data.
//!
//! ## Modules
//!
//! - `core`: Errors, configuration, pin sources, players
//! - `scoring`: Frames, turns and the scorer
//! - `rules`: Strike/spare classification
//! - `games`: The bowling game loop and tournament driver
//!
//! ## Example
//!
//! ```
//! use kata_bowling::{Game, Player, PlayerId, ScriptedPins};
//!
//! let player = Player::new(PlayerId::new(0), "kunal", ScriptedPins::new([3, 7, 1, 4]));
//! let mut game = Game::new(player);
//!
//! let record = game.play().unwrap();
//! assert_eq!(record.score, 16);
//! ```

pub mod core;
pub mod games;
pub mod rules;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    BowlingError, Result,
    GameConfig,
    PinSource, GameRng, ScriptedPins, ConstantPins,
    Player, PlayerId, PlayerIdAllocator,
};

pub use crate::scoring::{Frame, Turn, Scorer};

pub use crate::rules::{FrameOutcome, GameRuleEngine};

pub use crate::games::bowling::{Game, TurnRecord, Tournament, TournamentSummary};
