//! Application Configuration
//!
//! Configuration for the dice application layer.

/// Dice application configuration
#[derive(Debug, Clone)]
pub struct DiceConfig {
    /// Upper bound on dice in a single roll
    pub max_dice_per_roll: u32,
    /// Dice rolled when a request omits `numDice`
    pub default_num_dice: i64,
    /// Sides used when a request omits `sides`
    pub default_sides: i64,
    /// Dice rolled by a sum roll when the request omits `numDice`
    pub default_sum_dice: i64,
    /// Entries shown by the recent rolls view
    pub recent_history_len: usize,
}

impl Default for DiceConfig {
    fn default() -> Self {
        Self {
            max_dice_per_roll: 1000,
            default_num_dice: 1,
            default_sides: 6,
            default_sum_dice: 2,
            recent_history_len: 10,
        }
    }
}

impl DiceConfig {
    /// Override the per-roll cap
    pub fn with_max_dice_per_roll(self, max_dice_per_roll: u32) -> Self {
        Self {
            max_dice_per_roll,
            ..self
        }
    }
}
