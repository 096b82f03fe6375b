//! Dice Router

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use crate::application::config::DiceConfig;
use crate::domain::repository::RollEngineRepository;
use crate::domain::services::{DieRoller, ThreadRngRoller};
use crate::presentation::handlers::{self, DiceAppState};

/// Create the dice router backed by the thread-local generator.
///
/// Routes expect a [`kernel::session::CurrentIdentity`] extension, so the
/// caller must layer the auth middleware on top.
pub fn dice_router<R>(repo: Arc<R>, config: DiceConfig) -> Router
where
    R: RollEngineRepository,
{
    dice_router_with_roller(repo, ThreadRngRoller, config)
}

/// Create a dice router with a custom randomness source
pub fn dice_router_with_roller<R, D>(repo: Arc<R>, roller: D, config: DiceConfig) -> Router
where
    R: RollEngineRepository,
    D: DieRoller + Clone + Send + Sync + 'static,
{
    let state = DiceAppState {
        repo,
        roller,
        config: Arc::new(config),
    };

    Router::new()
        .route("/roll", post(handlers::roll::<R, D>))
        .route("/roll-sum", post(handlers::roll_sum::<R, D>))
        .route("/history", get(handlers::history::<R, D>))
        .route("/recent", get(handlers::recent::<R, D>))
        .route("/stats", get(handlers::stats::<R, D>))
        .route("/clear", post(handlers::clear_history::<R, D>))
        .with_state(state)
}
