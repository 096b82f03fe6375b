//! Domain Services
//!
//! Randomness source and pure statistics over roll history.

use rand::Rng;

use crate::domain::entities::RollStats;

/// Source of single die outcomes.
///
/// Implementations must return a value in `[1, sides]`. Tests inject
/// scripted implementations instead of relying on a fixed seed.
pub trait DieRoller {
    fn roll_die(&mut self, sides: u32) -> u32;
}

/// Uniform rolls drawn from the process-wide thread-local generator
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngRoller;

impl DieRoller for ThreadRngRoller {
    fn roll_die(&mut self, sides: u32) -> u32 {
        rand::rng().random_range(1..=sides)
    }
}

/// Sum of a roll, widened so that large rolls cannot overflow
pub fn sum_rolls(rolls: &[u32]) -> u64 {
    rolls.iter().map(|&v| u64::from(v)).sum()
}

/// Aggregate statistics over a history; all zero for an empty history
pub fn summarize(history: &[u32]) -> RollStats {
    let (Some(&min), Some(&max)) = (history.iter().min(), history.iter().max()) else {
        return RollStats::empty();
    };

    let count = history.len();
    RollStats {
        average: sum_rolls(history) as f64 / count as f64,
        min,
        max,
        count,
    }
}
