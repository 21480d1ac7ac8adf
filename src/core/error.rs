//! Error taxonomy for frames, turns and scoring.
//!
//! Every error is raised at the point of violation and propagates unchanged
//! through `Player` and `Game`. Nothing in the library recovers from them.

use thiserror::Error;

/// Errors raised by the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BowlingError {
    /// A third knock was attempted on a frame that already has two.
    #[error("no one can try more than twice in a frame")]
    InvalidTry,

    /// A knock asked for more pins than are standing (or exist at all).
    #[error("cannot knock {hits} pins: {standing} standing of {total}")]
    InvalidHitCount {
        /// Pins the knock tried to take down.
        hits: u8,
        /// Pins standing before the knock.
        standing: u8,
        /// Total pins in the frame.
        total: u8,
    },

    /// A bonus frame exists but the primary frame is neither spare nor strike.
    #[error("bonus frame present on a turn without a spare or strike")]
    InternalInconsistency,

    /// A turn was asked for a second bonus frame.
    #[error("turn already has a bonus frame")]
    BonusFrameExists,

    /// A stored frame's standing pins disagree with its knocks.
    #[error("frame records {recorded} standing pins but its knocks leave {expected}")]
    InconsistentFrame {
        /// Standing pins as stored.
        recorded: u8,
        /// Standing pins implied by total pins minus the knocks.
        expected: u8,
    },

    /// A scripted pin source ran out of values.
    #[error("pin source exhausted")]
    PinSourceExhausted,

    /// Configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BowlingError>;
