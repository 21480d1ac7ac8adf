//! Kata bowling.
//!
//! A single player bowls a fixed number of turns:
//! - Each turn is one frame of up to two knocks
//! - A strike or spare earns one bonus frame, played immediately
//! - Spare bonus: first bonus knock plus the bonus frame
//! - Strike bonus: the bonus frame, counted twice
//!
//! This is not full ten-pin bowling: there is no tenth-frame rule and no
//! carry-over of bonuses between turns.

mod game;
mod tournament;

pub use game::{Game, TurnRecord};
pub use tournament::{Tournament, TournamentSummary};
