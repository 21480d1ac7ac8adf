//! Player identification and the knocking behaviour.
//!
//! ## PlayerId
//!
//! Opaque player identifier, handed out by a `PlayerIdAllocator` owned by
//! whoever creates players. There is no global id counter.
//!
//! ## Player
//!
//! A named actor owning a `PinSource`. A player never owns a `Frame`: it
//! borrows one, knocks into it and hands it back.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::Result;
use super::rng::{GameRng, PinSource};
use crate::scoring::Frame;

/// Player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out unique `PlayerId`s in creation order.
#[derive(Clone, Debug, Default)]
pub struct PlayerIdAllocator {
    next: u32,
}

impl PlayerIdAllocator {
    /// Create an allocator starting at id 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next unused id.
    pub fn allocate(&mut self) -> PlayerId {
        let id = PlayerId(self.next);
        self.next += 1;
        id
    }
}

/// A player and the pin source that drives their knocks.
#[derive(Clone, Debug)]
pub struct Player<S = GameRng> {
    id: PlayerId,
    name: String,
    pins: S,
}

impl<S> Player<S> {
    /// Create a player with an explicit pin source.
    pub fn new(id: PlayerId, name: impl Into<String>, pins: S) -> Self {
        Self {
            id,
            name: name.into(),
            pins,
        }
    }

    /// The player's unique id.
    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Access the pin source (e.g. to check how much of a script is left).
    pub fn pins(&self) -> &S {
        &self.pins
    }
}

impl<S: PinSource> Player<S> {
    /// Play a frame: one knock, plus a second if pins are still standing.
    ///
    /// A strike leaves the frame with a single knock. Errors from the frame
    /// or the pin source are returned untouched.
    pub fn play<'f>(&mut self, frame: &'f mut Frame) -> Result<&'f mut Frame> {
        let hits = self.pins.next(frame.standing_pins())?;
        let remaining = frame.knock(hits)?;
        debug!(player = %self.name, hits, remaining, "first knock");

        if remaining != 0 {
            let hits = self.pins.next(remaining)?;
            let remaining = frame.knock(hits)?;
            debug!(player = %self.name, hits, remaining, "second knock");
        }

        Ok(frame)
    }
}

impl<S> PartialEq for Player<S> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<S> Eq for Player<S> {}

impl<S> std::hash::Hash for Player<S> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<S> std::fmt::Display for Player<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player[id = {}, name = {}]", self.id, self.name)
    }
}
