//! Clear History Use Case

use std::sync::Arc;

use kernel::id::IdentityId;

use crate::domain::repository::{RollEngineRepository, lock_engine};
use crate::error::DiceResult;

/// Clear history use case
pub struct ClearHistoryUseCase<R>
where
    R: RollEngineRepository,
{
    repo: Arc<R>,
}

impl<R> ClearHistoryUseCase<R>
where
    R: RollEngineRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Empty the identity's history. Clearing an empty history is a no-op.
    pub fn execute(&self, identity_id: IdentityId) -> DiceResult<()> {
        let engine = self.repo.get_or_create(identity_id)?;
        let mut engine = lock_engine(&engine)?;
        let cleared = engine.len();
        engine.clear_history();

        tracing::info!(identity_id = %identity_id, cleared = cleared, "Roll history cleared");
        Ok(())
    }
}
