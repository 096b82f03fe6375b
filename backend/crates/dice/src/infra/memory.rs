//! In-memory roll engine registry

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use kernel::id::IdentityId;
use kernel::session::SignOutListener;

use crate::domain::entities::RollEngine;
use crate::domain::repository::{RollEngineRepository, SharedRollEngine};
use crate::error::{DiceError, DiceResult};

/// Process-local registry. The map lock is only held to look up, insert or
/// remove an entry; rolling happens under the entry's own lock.
#[derive(Debug, Default)]
pub struct InMemoryRollEngineRepository {
    engines: RwLock<HashMap<IdentityId, SharedRollEngine>>,
}

impl InMemoryRollEngineRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> DiceError {
    DiceError::Internal("Roll engine registry lock poisoned".to_string())
}

impl RollEngineRepository for InMemoryRollEngineRepository {
    fn get_or_create(&self, identity_id: IdentityId) -> DiceResult<SharedRollEngine> {
        if let Some(engine) = self.find(identity_id)? {
            return Ok(engine);
        }

        let mut engines = self.engines.write().map_err(|_| poisoned())?;
        let engine = engines.entry(identity_id).or_insert_with(|| {
            tracing::debug!(identity_id = %identity_id, "Roll engine created");
            Arc::new(Mutex::new(RollEngine::new()))
        });
        Ok(Arc::clone(engine))
    }

    fn find(&self, identity_id: IdentityId) -> DiceResult<Option<SharedRollEngine>> {
        let engines = self.engines.read().map_err(|_| poisoned())?;
        Ok(engines.get(&identity_id).cloned())
    }

    fn discard(&self, identity_id: IdentityId) -> DiceResult<bool> {
        let mut engines = self.engines.write().map_err(|_| poisoned())?;
        Ok(engines.remove(&identity_id).is_some())
    }

    fn active_count(&self) -> DiceResult<usize> {
        let engines = self.engines.read().map_err(|_| poisoned())?;
        Ok(engines.len())
    }
}

impl SignOutListener for InMemoryRollEngineRepository {
    fn on_sign_out(&self, identity_id: IdentityId) {
        match self.discard(identity_id) {
            Ok(true) => tracing::debug!(identity_id = %identity_id, "Roll engine discarded"),
            Ok(false) => {}
            Err(e) => tracing::error!(error = %e, identity_id = %identity_id, "Failed to discard roll engine"),
        }
    }
}
