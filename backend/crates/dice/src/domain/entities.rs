//! Domain Entities
//!
//! Core business entities for the dice domain.

use crate::domain::services::{DieRoller, sum_rolls, summarize};
use crate::domain::value_objects::RollRequest;
use crate::error::DiceResult;

/// One identity's accumulated dice-rolling state.
///
/// History is append-only (in generation order) except for
/// [`RollEngine::clear_history`]. Every stored value lies in `[1, sides]`
/// for the `sides` of the roll that produced it.
#[derive(Debug, Clone, Default)]
pub struct RollEngine {
    history: Vec<u32>,
}

impl RollEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll `num_dice` dice with `sides` sides, append them to history and
    /// return them.
    ///
    /// Fails with `InvalidArgument` when `num_dice < 1` or `sides < 1`;
    /// history is left untouched in that case.
    pub fn roll<D>(&mut self, roller: &mut D, num_dice: i64, sides: i64) -> DiceResult<Vec<u32>>
    where
        D: DieRoller + ?Sized,
    {
        let request = RollRequest::new(num_dice, sides)?;
        Ok(self.roll_request(roller, request))
    }

    /// Same as [`RollEngine::roll`], returning the sum of the rolled dice
    pub fn roll_sum<D>(&mut self, roller: &mut D, num_dice: i64, sides: i64) -> DiceResult<u64>
    where
        D: DieRoller + ?Sized,
    {
        let results = self.roll(roller, num_dice, sides)?;
        Ok(sum_rolls(&results))
    }

    /// Roll an already validated request
    pub fn roll_request<D>(&mut self, roller: &mut D, request: RollRequest) -> Vec<u32>
    where
        D: DieRoller + ?Sized,
    {
        let sides = request.sides();
        let results: Vec<u32> = (0..request.num_dice())
            .map(|_| roller.roll_die(sides))
            .collect();

        debug_assert!(results.iter().all(|v| (1..=sides).contains(v)));

        self.history.extend_from_slice(&results);
        results
    }

    /// Copy of the full history, oldest first
    pub fn history(&self) -> Vec<u32> {
        self.history.clone()
    }

    /// Copy of the newest `limit` entries, oldest first
    pub fn recent(&self, limit: usize) -> Vec<u32> {
        let start = self.history.len().saturating_sub(limit);
        self.history[start..].to_vec()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Empty the history. Idempotent.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Statistics over the current history
    pub fn stats(&self) -> RollStats {
        summarize(&self.history)
    }
}

#[cfg(test)]
impl RollEngine {
    /// Build an engine with a known history
    pub(crate) fn with_history(history: Vec<u32>) -> Self {
        Self { history }
    }
}

/// Read-only aggregate view over a history, recomputed on every request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollStats {
    pub average: f64,
    pub min: u32,
    pub max: u32,
    pub count: usize,
}

impl RollStats {
    /// The sentinel returned for an empty history
    pub const fn empty() -> Self {
        Self {
            average: 0.0,
            min: 0,
            max: 0,
            count: 0,
        }
    }
}

impl Default for RollStats {
    fn default() -> Self {
        Self::empty()
    }
}
