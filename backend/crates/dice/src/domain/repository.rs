//! Repository Traits
//!
//! Interface of the per-identity engine registry. Implementation is in the
//! infrastructure layer.

use std::sync::{Arc, Mutex, MutexGuard};

use kernel::id::IdentityId;

use crate::domain::entities::RollEngine;
use crate::error::{DiceError, DiceResult};

/// An identity's engine. The mutex gives each identity a single writer.
pub type SharedRollEngine = Arc<Mutex<RollEngine>>;

/// Registry of roll engines keyed by identity
pub trait RollEngineRepository: Send + Sync + 'static {
    /// Return the identity's engine, creating an empty one on first access
    fn get_or_create(&self, identity_id: IdentityId) -> DiceResult<SharedRollEngine>;

    /// Return the identity's engine if it has one
    fn find(&self, identity_id: IdentityId) -> DiceResult<Option<SharedRollEngine>>;

    /// Drop the identity's engine. Returns whether one existed.
    fn discard(&self, identity_id: IdentityId) -> DiceResult<bool>;

    /// Number of identities that currently own an engine
    fn active_count(&self) -> DiceResult<usize>;
}

/// Lock an engine for exclusive use
pub fn lock_engine(engine: &SharedRollEngine) -> DiceResult<MutexGuard<'_, RollEngine>> {
    engine
        .lock()
        .map_err(|_| DiceError::Internal("Roll engine lock poisoned".to_string()))
}
