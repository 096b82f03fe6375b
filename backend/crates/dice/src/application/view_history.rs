//! View History Use Cases
//!
//! Read-only views over an identity's roll history.

use std::sync::Arc;

use kernel::id::IdentityId;

use crate::application::config::DiceConfig;
use crate::domain::entities::RollStats;
use crate::domain::repository::{RollEngineRepository, lock_engine};
use crate::error::DiceResult;

/// History and statistics taken under a single lock
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSnapshot {
    pub stats: RollStats,
    pub history: Vec<u32>,
}

/// History use case
pub struct HistoryUseCase<R>
where
    R: RollEngineRepository,
{
    repo: Arc<R>,
    config: Arc<DiceConfig>,
}

impl<R> HistoryUseCase<R>
where
    R: RollEngineRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<DiceConfig>) -> Self {
        Self { repo, config }
    }

    /// Full history, or the newest `limit` entries
    pub fn execute(&self, identity_id: IdentityId, limit: Option<usize>) -> DiceResult<Vec<u32>> {
        let engine = self.repo.get_or_create(identity_id)?;
        let engine = lock_engine(&engine)?;

        Ok(match limit {
            Some(limit) => engine.recent(limit),
            None => engine.history(),
        })
    }

    /// The dashboard view: last `recent_history_len` rolls
    pub fn recent(&self, identity_id: IdentityId) -> DiceResult<Vec<u32>> {
        self.execute(identity_id, Some(self.config.recent_history_len))
    }
}

/// Stats use case
pub struct StatsUseCase<R>
where
    R: RollEngineRepository,
{
    repo: Arc<R>,
}

impl<R> StatsUseCase<R>
where
    R: RollEngineRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub fn execute(&self, identity_id: IdentityId) -> DiceResult<RollStats> {
        let engine = self.repo.get_or_create(identity_id)?;
        let stats = lock_engine(&engine)?.stats();
        Ok(stats)
    }

    /// Stats together with the history they were computed from
    pub fn snapshot(&self, identity_id: IdentityId) -> DiceResult<StatsSnapshot> {
        let engine = self.repo.get_or_create(identity_id)?;
        let engine = lock_engine(&engine)?;

        Ok(StatsSnapshot {
            stats: engine.stats(),
            history: engine.history(),
        })
    }
}
