//! A player's turn: a primary frame plus an optional bonus frame.

use serde::{Deserialize, Serialize};

use super::frame::Frame;
use crate::core::error::{BowlingError, Result};

/// One at-bat.
///
/// The bonus frame is created at most once, after a spare or strike on the
/// primary frame.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    frame: Frame,
    bonus: Option<Frame>,
}

impl Turn {
    /// Create a turn with a standard ten-pin frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a turn whose frames use `total_pins` pins.
    #[must_use]
    pub fn with_total_pins(total_pins: u8) -> Self {
        Self {
            frame: Frame::with_total_pins(total_pins),
            bonus: None,
        }
    }

    /// The primary frame.
    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// The primary frame, for knocking into.
    pub fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    /// Create the bonus frame and return it for playing.
    ///
    /// Fails with `BonusFrameExists` if one was already created.
    pub fn bonus_frame(&mut self) -> Result<&mut Frame> {
        if self.bonus.is_some() {
            return Err(BowlingError::BonusFrameExists);
        }
        Ok(self
            .bonus
            .insert(Frame::with_total_pins(self.frame.total_pins())))
    }

    /// The bonus frame, if one has been created.
    #[must_use]
    pub fn get_bonus_frame(&self) -> Option<&Frame> {
        self.bonus.as_ref()
    }

    /// The bonus frame for knocking into, if one has been created.
    pub fn bonus_frame_mut(&mut self) -> Option<&mut Frame> {
        self.bonus.as_mut()
    }

    /// Whether a bonus frame has been created.
    #[must_use]
    pub fn any_bonus_frame(&self) -> bool {
        self.bonus.is_some()
    }
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.bonus {
            Some(bonus) => write!(f, "[{}, {}]", self.frame, bonus),
            None => write!(f, "[{}]", self.frame),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_turn() {
        let turn = Turn::new();
        assert_eq!(turn.frame().knock_counter(), 0);
        assert!(!turn.any_bonus_frame());
        assert!(turn.get_bonus_frame().is_none());
    }

    #[test]
    fn test_bonus_frame_created_once() {
        let mut turn = Turn::new();
        turn.bonus_frame().unwrap().knock(4).unwrap();
        assert!(turn.any_bonus_frame());

        assert_eq!(turn.bonus_frame().unwrap_err(), BowlingError::BonusFrameExists);
        // Existing bonus frame is kept
        assert_eq!(turn.get_bonus_frame().unwrap().knocks(), &[4]);
    }

    #[test]
    fn test_bonus_frame_inherits_pin_count() {
        let mut turn = Turn::with_total_pins(6);
        assert_eq!(turn.bonus_frame().unwrap().total_pins(), 6);
    }

    #[test]
    fn test_display() {
        let mut turn = Turn::new();
        turn.frame_mut().knock(3).unwrap();
        turn.frame_mut().knock(7).unwrap();
        assert_eq!(turn.to_string(), "[Frame<3, 7>]");

        let bonus = turn.bonus_frame().unwrap();
        bonus.knock(1).unwrap();
        bonus.knock(4).unwrap();
        assert_eq!(turn.to_string(), "[Frame<3, 7>, Frame<1, 4>]");
    }

    #[test]
    fn test_deserialize_validates_frames() {
        let mut turn = Turn::new();
        turn.frame_mut().knock(10).unwrap();
        turn.bonus_frame().unwrap().knock(6).unwrap();
        let json = serde_json::to_string(&turn).unwrap();
        assert_eq!(serde_json::from_str::<Turn>(&json).unwrap(), turn);

        let corrupt = json.replace("[6]", "[6,6]");
        assert!(serde_json::from_str::<Turn>(&corrupt).is_err());
    }
}
