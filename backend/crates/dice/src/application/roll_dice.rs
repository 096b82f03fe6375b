//! Roll Dice Use Case
//!
//! Rolls dice for the signed-in identity and records them in its history.

use std::sync::Arc;

use kernel::id::IdentityId;

use crate::application::config::DiceConfig;
use crate::domain::repository::{RollEngineRepository, lock_engine};
use crate::domain::services::{DieRoller, sum_rolls};
use crate::domain::value_objects::RollRequest;
use crate::error::{DiceError, DiceResult};

/// Roll input. Missing fields fall back to the configured defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct RollDiceInput {
    pub num_dice: Option<i64>,
    pub sides: Option<i64>,
}

/// Roll output
#[derive(Debug, Clone, PartialEq)]
pub struct RollDiceOutput {
    pub num_dice: u32,
    pub sides: u32,
    pub results: Vec<u32>,
    pub total: u64,
}

impl RollDiceOutput {
    /// Human readable line, e.g. `Rolled 2d6: [3, 5] (Total: 8)`
    pub fn summary(&self) -> String {
        format!(
            "Rolled {}d{}: {:?} (Total: {})",
            self.num_dice, self.sides, self.results, self.total
        )
    }
}

/// Sum roll output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollSumOutput {
    pub num_dice: u32,
    pub sides: u32,
    pub total: u64,
}

/// Roll dice use case
pub struct RollDiceUseCase<R, D>
where
    R: RollEngineRepository,
    D: DieRoller + Clone,
{
    repo: Arc<R>,
    roller: D,
    config: Arc<DiceConfig>,
}

impl<R, D> RollDiceUseCase<R, D>
where
    R: RollEngineRepository,
    D: DieRoller + Clone,
{
    pub fn new(repo: Arc<R>, roller: D, config: Arc<DiceConfig>) -> Self {
        Self {
            repo,
            roller,
            config,
        }
    }

    /// Roll and return every die
    pub fn execute(&self, identity_id: IdentityId, input: RollDiceInput) -> DiceResult<RollDiceOutput> {
        let request = self.request(
            input.num_dice.unwrap_or(self.config.default_num_dice),
            input.sides.unwrap_or(self.config.default_sides),
        )?;

        let results = self.roll(identity_id, request)?;
        let total = sum_rolls(&results);

        tracing::debug!(
            identity_id = %identity_id,
            roll = %request,
            total = total,
            "Dice rolled"
        );

        Ok(RollDiceOutput {
            num_dice: request.num_dice(),
            sides: request.sides(),
            results,
            total,
        })
    }

    /// Roll and return only the sum
    pub fn execute_sum(&self, identity_id: IdentityId, input: RollDiceInput) -> DiceResult<RollSumOutput> {
        let request = self.request(
            input.num_dice.unwrap_or(self.config.default_sum_dice),
            input.sides.unwrap_or(self.config.default_sides),
        )?;

        let total = sum_rolls(&self.roll(identity_id, request)?);

        tracing::debug!(
            identity_id = %identity_id,
            roll = %request,
            total = total,
            "Dice rolled for sum"
        );

        Ok(RollSumOutput {
            num_dice: request.num_dice(),
            sides: request.sides(),
            total,
        })
    }

    /// Validate parameters and apply the per-roll cap
    fn request(&self, num_dice: i64, sides: i64) -> DiceResult<RollRequest> {
        let request = RollRequest::new(num_dice, sides)?;

        if request.num_dice() > self.config.max_dice_per_roll {
            return Err(DiceError::TooManyDice {
                max: self.config.max_dice_per_roll,
            });
        }

        Ok(request)
    }

    fn roll(&self, identity_id: IdentityId, request: RollRequest) -> DiceResult<Vec<u32>> {
        let engine = self.repo.get_or_create(identity_id)?;
        let mut roller = self.roller.clone();
        let mut engine = lock_engine(&engine)?;
        Ok(engine.roll_request(&mut roller, request))
    }
}
