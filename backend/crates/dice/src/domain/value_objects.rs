//! Domain Value Objects
//!
//! Immutable value types for the dice domain.

use crate::error::{DiceError, DiceResult};

/// A validated roll: how many dice, and how many sides each die has
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollRequest {
    num_dice: u32,
    sides: u32,
}

impl RollRequest {
    /// Validate raw (possibly negative) user input.
    ///
    /// The number of dice is checked before the number of sides, so `0d0`
    /// reports the dice error.
    pub fn new(num_dice: i64, sides: i64) -> DiceResult<Self> {
        if num_dice < 1 {
            return Err(DiceError::InvalidArgument(
                "Must roll at least one die".to_string(),
            ));
        }
        if sides < 1 {
            return Err(DiceError::InvalidArgument(
                "Die must have at least one side".to_string(),
            ));
        }

        let num_dice = u32::try_from(num_dice)
            .map_err(|_| DiceError::InvalidArgument("Too many dice".to_string()))?;
        let sides = u32::try_from(sides)
            .map_err(|_| DiceError::InvalidArgument("Die has too many sides".to_string()))?;

        Ok(Self { num_dice, sides })
    }

    pub fn num_dice(&self) -> u32 {
        self.num_dice
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }
}

impl std::fmt::Display for RollRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.num_dice, self.sides)
    }
}
