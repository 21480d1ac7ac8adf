//! A single try: up to two knocks against one rack of pins.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::config::DEFAULT_TOTAL_PINS;
use crate::core::error::{BowlingError, Result};

/// Maximum number of knocks in a frame.
pub const MAX_KNOCKS: usize = 2;

/// Knock state for one try.
///
/// Invariant: `standing_pins == total_pins - sum(knocks)` and at most
/// `MAX_KNOCKS` knocks are recorded. The only mutator is [`Frame::knock`];
/// deserialization replays the stored knocks through it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredFrame")]
pub struct Frame {
    total_pins: u8,
    standing_pins: u8,
    knocks: SmallVec<[u8; MAX_KNOCKS]>,
}

/// Frame fields as they appear on the wire, before validation.
#[derive(Deserialize)]
struct StoredFrame {
    total_pins: u8,
    standing_pins: u8,
    knocks: SmallVec<[u8; MAX_KNOCKS]>,
}

impl TryFrom<StoredFrame> for Frame {
    type Error = BowlingError;

    fn try_from(stored: StoredFrame) -> Result<Self> {
        let mut frame = Frame::with_total_pins(stored.total_pins);
        for hits in stored.knocks {
            frame.knock(hits)?;
        }
        if frame.standing_pins != stored.standing_pins {
            return Err(BowlingError::InconsistentFrame {
                recorded: stored.standing_pins,
                expected: frame.standing_pins,
            });
        }
        Ok(frame)
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}

impl Frame {
    /// Pins in a standard frame.
    pub const TOTAL_PINS: u8 = DEFAULT_TOTAL_PINS;

    /// Create a fresh frame with the standard ten pins.
    #[must_use]
    pub fn new() -> Self {
        Self::with_total_pins(Self::TOTAL_PINS)
    }

    /// Create a fresh frame with a custom pin count.
    #[must_use]
    pub fn with_total_pins(total_pins: u8) -> Self {
        Self {
            total_pins,
            standing_pins: total_pins,
            knocks: SmallVec::new(),
        }
    }

    /// Record a knock and return the pins left standing.
    pub fn knock(&mut self, hits: u8) -> Result<u8> {
        if self.knocks.len() >= MAX_KNOCKS {
            return Err(BowlingError::InvalidTry);
        }
        if hits > self.standing_pins || hits > self.total_pins {
            return Err(BowlingError::InvalidHitCount {
                hits,
                standing: self.standing_pins,
                total: self.total_pins,
            });
        }

        self.standing_pins -= hits;
        self.knocks.push(hits);
        debug!(hits, standing = self.standing_pins, "knock recorded");
        Ok(self.standing_pins)
    }

    /// Knock values in the order they happened.
    #[must_use]
    pub fn knocks(&self) -> &[u8] {
        &self.knocks
    }

    /// Number of knocks so far (0, 1 or 2).
    #[must_use]
    pub fn knock_counter(&self) -> usize {
        self.knocks.len()
    }

    /// The first knock, if any.
    #[must_use]
    pub fn first_knock(&self) -> Option<u8> {
        self.knocks.first().copied()
    }

    /// Pins still up.
    #[must_use]
    pub fn standing_pins(&self) -> u8 {
        self.standing_pins
    }

    /// Pins set up at the start of the frame.
    #[must_use]
    pub fn total_pins(&self) -> u8 {
        self.total_pins
    }

    /// True once no further knock makes sense: two knocks taken or every pin down.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.knocks.len() >= MAX_KNOCKS || (!self.knocks.is_empty() && self.standing_pins == 0)
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Frame<")?;
        for (i, hits) in self.knocks.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", hits)?;
        }
        write!(f, ">")
    }
}
