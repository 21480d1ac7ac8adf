//! Single-player game loop.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::config::DEFAULT_TOTAL_PINS;
use crate::core::error::Result;
use crate::core::player::Player;
use crate::core::rng::{GameRng, PinSource};
use crate::rules::{FrameOutcome, GameRuleEngine};
use crate::scoring::{Scorer, Turn};

/// A played turn and its final score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub turn: Turn,
    pub outcome: FrameOutcome,
    pub score: u32,
}

impl std::fmt::Display for TurnRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.turn, self.score)
    }
}

/// One player and the turns they have played.
#[derive(Debug)]
pub struct Game<S = GameRng> {
    player: Player<S>,
    total_pins: u8,
    turns: Vec<TurnRecord>,
}

impl<S: PinSource> Game<S> {
    /// Create a game with standard ten-pin frames.
    pub fn new(player: Player<S>) -> Self {
        Self::with_total_pins(player, DEFAULT_TOTAL_PINS)
    }

    pub fn with_total_pins(player: Player<S>, total_pins: u8) -> Self {
        Self {
            player,
            total_pins,
            turns: Vec::new(),
        }
    }

    /// Play one turn and record it.
    ///
    /// The player plays the primary frame; a strike or spare earns a bonus
    /// frame which is played straight away. On error the turn is dropped and
    /// history is left as it was.
    pub fn play(&mut self) -> Result<&TurnRecord> {
        let mut turn = Turn::with_total_pins(self.total_pins);
        self.player.play(turn.frame_mut())?;

        let outcome = GameRuleEngine::classify(turn.frame());
        let score = if outcome.earns_bonus() {
            info!(player = %self.player.name(), %outcome, frame = %turn.frame(), "bonus frame earned");
            self.player.play(turn.bonus_frame()?)?;
            Scorer::turn_score(&turn)?
        } else {
            Scorer::score(turn.frame())
        };

        debug!(player = %self.player.name(), %turn, score, "turn scored");
        let index = self.turns.len();
        self.turns.push(TurnRecord { turn, outcome, score });
        Ok(&self.turns[index])
    }

    #[must_use]
    pub fn player(&self) -> &Player<S> {
        &self.player
    }

    /// Recorded turns, oldest first.
    #[must_use]
    pub fn turns(&self) -> &[TurnRecord] {
        &self.turns
    }

    /// Sum of every recorded turn score.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.turns.iter().map(|record| record.score).sum()
    }
}

impl<S> std::fmt::Display for Game<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} --> turns ==> ", self.player.name())?;
        for (i, record) in self.turns.iter().enumerate() {
            if i > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::BowlingError;
    use crate::core::player::PlayerId;
    use crate::core::rng::ScriptedPins;

    fn scripted_game(values: &[u8]) -> Game<ScriptedPins> {
        let player = Player::new(PlayerId::new(0), "kunal", ScriptedPins::new(values.iter().copied()));
        Game::new(player)
    }

    #[test]
    fn test_open_turn() {
        let mut game = scripted_game(&[2, 7]);
        let record = game.play().unwrap();

        assert_eq!(record.score, 9);
        assert_eq!(record.outcome, FrameOutcome::Open);
        assert!(!record.turn.any_bonus_frame());
    }

    #[test]
    fn test_spare_turn_plays_bonus() {
        let mut game = scripted_game(&[3, 7, 1, 4]);
        let record = game.play().unwrap();

        assert_eq!(record.score, 16);
        assert_eq!(record.outcome, FrameOutcome::Spare);
        assert_eq!(record.turn.get_bonus_frame().unwrap().knocks(), &[1, 4]);
    }

    #[test]
    fn test_history_accumulates() {
        let mut game = scripted_game(&[2, 7, 10, 5, 5]);
        game.play().unwrap();
        game.play().unwrap();

        assert_eq!(game.turns().len(), 2);
        assert_eq!(game.total_score(), 9 + 30);
    }

    #[test]
    fn test_failed_turn_not_recorded() {
        let mut game = scripted_game(&[2, 7, 3]);
        game.play().unwrap();

        assert_eq!(game.play().unwrap_err(), BowlingError::PinSourceExhausted);
        assert_eq!(game.turns().len(), 1);
        assert_eq!(game.total_score(), 9);
    }

    #[test]
    fn test_bonus_error_not_recorded() {
        let mut game = scripted_game(&[10, 11]);
        assert!(matches!(game.play(), Err(BowlingError::InvalidHitCount { .. })));
        assert!(game.turns().is_empty());
    }

    #[test]
    fn test_display() {
        let mut game = scripted_game(&[2, 7, 3, 7, 1, 4]);
        assert_eq!(game.to_string(), "kunal --> turns ==> ");

        game.play().unwrap();
        game.play().unwrap();
        assert_eq!(
            game.to_string(),
            "kunal --> turns ==> [Frame<2, 7>] -> 9 | [Frame<3, 7>, Frame<1, 4>] -> 16"
        );
    }

    #[test]
    fn test_custom_pin_count() {
        let player = Player::new(PlayerId::new(0), "kunal", ScriptedPins::new([5, 2, 1]));
        let mut game = Game::with_total_pins(player, 5);
        let record = game.play().unwrap();

        assert_eq!(record.outcome, FrameOutcome::Strike);
        assert_eq!(record.score, 5 + 2 * 3);
    }
}
