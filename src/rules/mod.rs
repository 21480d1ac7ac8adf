//! Bowling rules.
//!
//! `GameRuleEngine` classifies a played frame as a strike, a spare or an
//! open frame. Scoring and the game loop consult it, but never decide
//! those outcomes themselves.

pub mod engine;

pub use engine::{FrameOutcome, GameRuleEngine};
