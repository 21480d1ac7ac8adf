//! Frame and turn scoring.

use super::frame::Frame;
use super::turn::Turn;
use crate::core::error::{BowlingError, Result};
use crate::rules::{FrameOutcome, GameRuleEngine};

/// Stateless score computation.
pub struct Scorer;

impl Scorer {
    /// Sum of all knocks in a frame.
    #[must_use]
    pub fn score(frame: &Frame) -> u32 {
        frame.knocks().iter().map(|&hits| u32::from(hits)).sum()
    }

    /// Score a whole turn, including the bonus frame.
    ///
    /// - spare: frame + first bonus knock + bonus frame
    /// - strike: frame + 2 * bonus frame
    ///
    /// A bonus frame on an open primary frame is `InternalInconsistency`.
    pub fn turn_score(turn: &Turn) -> Result<u32> {
        let frame_score = Self::score(turn.frame());

        let Some(bonus) = turn.get_bonus_frame() else {
            return Ok(frame_score);
        };

        let bonus_score = Self::score(bonus);
        match GameRuleEngine::classify(turn.frame()) {
            FrameOutcome::Spare => {
                let first = u32::from(bonus.first_knock().unwrap_or(0));
                Ok(frame_score + first + bonus_score)
            }
            FrameOutcome::Strike => Ok(frame_score + 2 * bonus_score),
            FrameOutcome::Open => Err(BowlingError::InternalInconsistency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn turn_with(primary: &[u8], bonus: Option<&[u8]>) -> Turn {
        let mut turn = Turn::new();
        for &hits in primary {
            turn.frame_mut().knock(hits).unwrap();
        }
        if let Some(knocks) = bonus {
            let frame = turn.bonus_frame().unwrap();
            for &hits in knocks {
                frame.knock(hits).unwrap();
            }
        }
        turn
    }

    #[test]
    fn test_frame_score() {
        let mut frame = Frame::new();
        assert_eq!(Scorer::score(&frame), 0);
        frame.knock(2).unwrap();
        frame.knock(3).unwrap();
        assert_eq!(Scorer::score(&frame), 5);
    }

    #[test]
    fn test_open_turn() {
        assert_eq!(Scorer::turn_score(&turn_with(&[2, 7], None)), Ok(9));
    }

    #[test]
    fn test_spare_turn() {
        assert_eq!(Scorer::turn_score(&turn_with(&[3, 7], Some(&[1, 4]))), Ok(16));
        assert_eq!(Scorer::turn_score(&turn_with(&[3, 7], Some(&[10]))), Ok(30));
    }

    #[test]
    fn test_strike_turn() {
        assert_eq!(Scorer::turn_score(&turn_with(&[10], Some(&[7, 1]))), Ok(26));
        assert_eq!(Scorer::turn_score(&turn_with(&[10], Some(&[10]))), Ok(30));
    }

    #[test]
    fn test_unplayed_bonus_frame_counts_zero() {
        assert_eq!(Scorer::turn_score(&turn_with(&[10], Some(&[]))), Ok(10));
        assert_eq!(Scorer::turn_score(&turn_with(&[4, 6], Some(&[]))), Ok(10));
    }

    #[test]
    fn test_bonus_on_open_frame_is_inconsistent() {
        assert_eq!(
            Scorer::turn_score(&turn_with(&[2, 3], Some(&[1, 1]))),
            Err(BowlingError::InternalInconsistency)
        );
    }
}
