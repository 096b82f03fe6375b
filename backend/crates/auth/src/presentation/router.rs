//! Auth Router

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::application::SignOutListeners;
use crate::application::config::AuthConfig;
use crate::domain::repository::{AuthSessionRepository, IdentityRepository};
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router for any repository implementation
pub fn auth_router<R>(repo: Arc<R>, config: Arc<AuthConfig>, listeners: SignOutListeners) -> Router
where
    R: IdentityRepository + AuthSessionRepository + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo,
        config,
        listeners,
    };

    Router::new()
        .route("/signin", post(handlers::sign_in::<R>))
        .route("/signout", post(handlers::sign_out::<R>))
        .route("/status", get(handlers::session_status::<R>))
        .with_state(state)
}
