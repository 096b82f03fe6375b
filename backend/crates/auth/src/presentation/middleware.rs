//! Auth Middleware
//!
//! Middleware for requiring authentication on protected routes.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::AuthSessionRepository;
use crate::error::AuthError;

/// Middleware state
pub struct AuthMiddlewareState<S>
where
    S: AuthSessionRepository + Send + Sync + 'static,
{
    pub repo: Arc<S>,
    pub config: Arc<AuthConfig>,
}

impl<S> Clone for AuthMiddlewareState<S>
where
    S: AuthSessionRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            config: Arc::clone(&self.config),
        }
    }
}

/// Middleware that requires a valid auth session.
///
/// On success the request carries a [`kernel::session::CurrentIdentity`]
/// extension for downstream handlers. A missing or invalid session is a 401;
/// a failing session store is a 500.
pub async fn require_auth_session<S>(
    State(state): State<AuthMiddlewareState<S>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    S: AuthSessionRepository + Send + Sync + 'static,
{
    let token =
        platform::cookie::extract_cookie(req.headers(), &state.config.session_cookie_name);

    let session = match token {
        Some(token) => {
            let use_case = CheckSessionUseCase::new(state.repo.clone(), state.config.clone());
            match use_case.get_session(&token).await {
                Ok(session) => Some(session),
                Err(AuthError::SessionInvalid) => None,
                Err(e) => return Err(e.into_response()),
            }
        }
        None => None,
    };

    let Some(session) = session else {
        return Err((StatusCode::UNAUTHORIZED, [("X-Auth-Required", "true")]).into_response());
    };

    req.extensions_mut().insert(session.current_identity());

    Ok(next.run(req).await)
}
