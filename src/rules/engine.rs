//! Strike and spare classification.

use serde::{Deserialize, Serialize};

use crate::scoring::Frame;

/// How a frame ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameOutcome {
    /// Every pin down on the first knock.
    Strike,
    /// Every pin down using exactly two knocks.
    Spare,
    /// Anything else, including an unplayed frame.
    Open,
}

impl FrameOutcome {
    /// Strikes and spares earn a bonus frame.
    #[must_use]
    pub fn earns_bonus(self) -> bool {
        matches!(self, FrameOutcome::Strike | FrameOutcome::Spare)
    }
}

impl std::fmt::Display for FrameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameOutcome::Strike => write!(f, "strike"),
            FrameOutcome::Spare => write!(f, "spare"),
            FrameOutcome::Open => write!(f, "open"),
        }
    }
}

/// Stateless rule checks over a frame.
///
/// Strike needs one knock and spare needs two, so the two are mutually
/// exclusive.
pub struct GameRuleEngine;

impl GameRuleEngine {
    /// One knock that took down every pin.
    #[must_use]
    pub fn is_strike(frame: &Frame) -> bool {
        frame.knock_counter() == 1 && frame.first_knock() == Some(frame.total_pins())
    }

    /// Two knocks that together took down every pin.
    #[must_use]
    pub fn is_spare(frame: &Frame) -> bool {
        frame.knock_counter() == 2
            && frame.knocks().iter().map(|&k| u32::from(k)).sum::<u32>() == u32::from(frame.total_pins())
    }

    /// Classify a frame.
    #[must_use]
    pub fn classify(frame: &Frame) -> FrameOutcome {
        if Self::is_strike(frame) {
            FrameOutcome::Strike
        } else if Self::is_spare(frame) {
            FrameOutcome::Spare
        } else {
            FrameOutcome::Open
        }
    }
}
