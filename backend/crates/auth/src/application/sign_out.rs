//! Sign Out Use Case
//!
//! Invalidates a session and tells listeners the identity has left.

use std::sync::Arc;

use kernel::id::IdentityId;
use kernel::session::SignOutListener;

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::repository::AuthSessionRepository;
use crate::error::AuthResult;

/// Listeners notified after a session has been deleted
pub type SignOutListeners = Arc<[Arc<dyn SignOutListener>]>;

/// Sign out use case
pub struct SignOutUseCase<S>
where
    S: AuthSessionRepository,
{
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
    listeners: SignOutListeners,
}

impl<S> SignOutUseCase<S>
where
    S: AuthSessionRepository,
{
    pub fn new(session_repo: Arc<S>, config: Arc<AuthConfig>, listeners: SignOutListeners) -> Self {
        Self {
            session_repo,
            config,
            listeners,
        }
    }

    /// Sign out from current session.
    ///
    /// Returns the identity whose session ended, or `None` when the token
    /// named no live session. Listeners only hear about real sign-outs.
    pub async fn execute(&self, session_token: &str) -> AuthResult<Option<IdentityId>> {
        let session_id = session_token::verify(&self.config.session_secret, session_token)?;

        let Some(session) = self.session_repo.delete(session_id).await? else {
            return Ok(None);
        };

        for listener in self.listeners.iter() {
            listener.on_sign_out(session.identity_id);
        }

        tracing::info!(
            identity_id = %session.identity_id,
            session_id = %session_id,
            "User signed out"
        );
        Ok(Some(session.identity_id))
    }
}
