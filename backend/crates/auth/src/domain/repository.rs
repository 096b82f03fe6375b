//! Repository Traits
//!
//! Interfaces for identity and session storage. Implementation is in
//! infrastructure layer.

use kernel::id::IdentityId;
use uuid::Uuid;

use crate::domain::entity::{auth_session::AuthSession, identity::Identity};
use crate::domain::value_object::user_name::UserName;
use crate::error::AuthResult;

/// Identity repository trait
#[trait_variant::make(IdentityRepository: Send)]
pub trait LocalIdentityRepository {
    /// Find identity by user name (exact match)
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<Identity>>;

    /// Find identity by ID
    async fn find_by_id(&self, identity_id: IdentityId) -> AuthResult<Option<Identity>>;
}

/// Auth session repository trait
#[trait_variant::make(AuthSessionRepository: Send)]
pub trait LocalAuthSessionRepository {
    /// Create a new session
    async fn create(&self, session: &AuthSession) -> AuthResult<()>;

    /// Find session by ID
    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>>;

    /// Update session (e.g., last activity)
    async fn update(&self, session: &AuthSession) -> AuthResult<()>;

    /// Delete a session, returning it if it existed
    async fn delete(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>>;

    /// Clean up expired sessions
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
