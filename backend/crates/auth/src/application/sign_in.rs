//! Sign In Use Case
//!
//! Authenticates an identity and creates a session.

use std::sync::Arc;

use kernel::id::IdentityId;

use crate::application::config::AuthConfig;
use crate::application::session_token;
use crate::domain::entity::{auth_session::AuthSession, identity::Identity};
use crate::domain::repository::{AuthSessionRepository, IdentityRepository};
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub user_name: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    /// Session token for cookie
    pub session_token: String,
    pub identity_id: IdentityId,
    pub user_name: String,
    pub expires_at_ms: i64,
}

/// Sign in use case
pub struct SignInUseCase<I, S>
where
    I: IdentityRepository,
    S: AuthSessionRepository,
{
    identity_repo: Arc<I>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<I, S> SignInUseCase<I, S>
where
    I: IdentityRepository,
    S: AuthSessionRepository,
{
    pub fn new(identity_repo: Arc<I>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            identity_repo,
            session_repo,
            config,
        }
    }

    /// Check a name/password pair against the identity store.
    ///
    /// Unknown names, malformed names and wrong passwords all fail the same
    /// way.
    pub async fn authenticate(&self, user_name: &str, password: &str) -> AuthResult<Identity> {
        let user_name = UserName::new(user_name).map_err(|_| AuthError::InvalidCredentials)?;

        let identity = self
            .identity_repo
            .find_by_user_name(&user_name)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !identity.password.matches(password) {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(identity)
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let identity = self.authenticate(&input.user_name, &input.password).await?;

        let session = AuthSession::new(&identity, self.config.session_ttl_delta()?)?;

        self.session_repo.create(&session).await?;

        let session_token = session_token::issue(&self.config.session_secret, session.session_id);

        tracing::info!(
            identity_id = %identity.identity_id,
            session_id = %session.session_id,
            "User signed in"
        );

        Ok(SignInOutput {
            session_token,
            identity_id: identity.identity_id,
            user_name: identity.user_name.into_inner(),
            expires_at_ms: session.expires_at_ms,
        })
    }
}
