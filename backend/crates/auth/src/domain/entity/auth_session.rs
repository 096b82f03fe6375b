//! Auth Session Entity
//!
//! Represents an authenticated identity's login session.
//! Held server-side and referenced by a signed cookie token.

use chrono::{DateTime, Duration, Utc};
use kernel::id::IdentityId;
use kernel::session::CurrentIdentity;
use uuid::Uuid;

use crate::domain::entity::identity::Identity;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Auth session entity
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Session ID (UUID v4)
    pub session_id: Uuid,
    pub identity_id: IdentityId,
    pub user_name: UserName,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    pub created_at: DateTime<Utc>,
    pub last_activity_at: DateTime<Utc>,
}

impl AuthSession {
    /// Create a new auth session
    ///
    /// TTL is provided by the application layer (config), not hard-coded here.
    /// Fails when the expiry is not a representable timestamp.
    pub fn new(identity: &Identity, ttl: Duration) -> AuthResult<Self> {
        let now = Utc::now();
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AuthError::Internal("Session expiry out of range".to_string()))?;

        Ok(Self {
            session_id: Uuid::new_v4(),
            identity_id: identity.identity_id,
            user_name: identity.user_name.clone(),
            expires_at_ms: expires_at.timestamp_millis(),
            created_at: now,
            last_activity_at: now,
        })
    }

    /// Check if session has expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp_millis() > self.expires_at_ms
    }

    /// Update last activity timestamp
    pub fn touch(&mut self) {
        self.last_activity_at = Utc::now();
    }

    /// Get remaining time until expiration
    pub fn remaining_ms(&self) -> i64 {
        let now_ms = Utc::now().timestamp_millis();
        (self.expires_at_ms - now_ms).max(0)
    }

    /// The request-scoped view handed to other crates
    pub fn current_identity(&self) -> CurrentIdentity {
        CurrentIdentity {
            identity_id: self.identity_id,
            user_name: self.user_name.to_string(),
        }
    }
}
