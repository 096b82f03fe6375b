//! Dice Roller API
//!
//! Composes the auth and dice crates into one HTTP application.
//!
//! ## Endpoints
//!
//! | Method | Path | Auth | Description |
//! |--------|------|------|-------------|
//! | GET | `/health` | no | Health check |
//! | POST | `/api/auth/signin` | no | Sign in, sets session cookie |
//! | POST | `/api/auth/signout` | no | Sign out, discards roll history |
//! | GET | `/api/auth/status` | no | Current session |
//! | POST | `/api/dice/roll` | yes | Roll dice |
//! | POST | `/api/dice/roll-sum` | yes | Roll dice, return the sum |
//! | GET | `/api/dice/history` | yes | Roll history |
//! | GET | `/api/dice/recent` | yes | Latest rolls |
//! | GET | `/api/dice/stats` | yes | Statistics over the history |
//! | POST | `/api/dice/clear` | yes | Clear the history |

pub mod config;

use std::sync::Arc;

use auth::middleware::{AuthMiddlewareState, require_auth_session};
use auth::{AuthConfig, AuthResult, InMemoryAuthRepository, SignOutListeners, auth_router};
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::{Json, Router};
use dice::domain::repository::RollEngineRepository;
use dice::{DiceConfig, DieRoller, InMemoryRollEngineRepository, ThreadRngRoller};
use kernel::error::app_error::AppError;
use kernel::session::SignOutListener;

/// All process state. Dropping it drops every session and history.
#[derive(Clone)]
pub struct AppState {
    pub auth_repo: Arc<InMemoryAuthRepository>,
    pub dice_repo: Arc<InMemoryRollEngineRepository>,
    pub auth_config: Arc<AuthConfig>,
    pub dice_config: DiceConfig,
}

impl AppState {
    /// State seeded with the built-in identities
    pub fn new(auth_config: AuthConfig, dice_config: DiceConfig) -> AuthResult<Self> {
        Ok(Self::with_auth_repo(
            InMemoryAuthRepository::with_default_identities()?,
            auth_config,
            dice_config,
        ))
    }

    pub fn with_auth_repo(
        auth_repo: InMemoryAuthRepository,
        auth_config: AuthConfig,
        dice_config: DiceConfig,
    ) -> Self {
        Self {
            auth_repo: Arc::new(auth_repo),
            dice_repo: Arc::new(InMemoryRollEngineRepository::new()),
            auth_config: Arc::new(auth_config),
            dice_config,
        }
    }

    pub fn router(&self) -> Router {
        self.router_with_roller(ThreadRngRoller)
    }

    /// Full router with a custom randomness source for dice
    pub fn router_with_roller<D>(&self, roller: D) -> Router
    where
        D: DieRoller + Clone + Send + Sync + 'static,
    {
        let listeners: SignOutListeners =
            Arc::new([self.dice_repo.clone() as Arc<dyn SignOutListener>]);

        let require_session = from_fn_with_state(
            AuthMiddlewareState {
                repo: self.auth_repo.clone(),
                config: self.auth_config.clone(),
            },
            require_auth_session::<InMemoryAuthRepository>,
        );

        let dice = dice::dice_router_with_roller(
            self.dice_repo.clone(),
            roller,
            self.dice_config.clone(),
        )
        .route_layer(require_session);

        Router::new()
            .route("/health", get(health))
            .nest(
                "/api/auth",
                auth_router(self.auth_repo.clone(), self.auth_config.clone(), listeners),
            )
            .nest("/api/dice", dice)
            .fallback(not_found)
    }

    /// Drop expired login sessions. Returns how many were removed.
    pub async fn sweep_expired_sessions(&self) -> AuthResult<u64> {
        use auth::domain::repository::AuthSessionRepository;
        self.auth_repo.cleanup_expired().await
    }

    /// Identities that currently hold a roll engine
    pub fn active_roll_engines(&self) -> usize {
        self.dice_repo.active_count().unwrap_or(0)
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

async fn not_found() -> AppError {
    AppError::not_found("Resource not found")
}
