//! HTTP Handlers
//!
//! Every handler runs behind the auth middleware, which provides the
//! [`CurrentIdentity`] extension.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Extension, Query, State};
use axum::http::StatusCode;
use kernel::session::CurrentIdentity;

use crate::application::clear_history::ClearHistoryUseCase;
use crate::application::config::DiceConfig;
use crate::application::roll_dice::RollDiceUseCase;
use crate::application::view_history::{HistoryUseCase, StatsUseCase};
use crate::domain::repository::RollEngineRepository;
use crate::domain::services::DieRoller;
use crate::error::DiceResult;
use crate::presentation::dto::{
    HistoryQuery, HistoryResponse, RecentResponse, RollRequestBody, RollResponse,
    RollSumResponse, StatsResponse,
};
use crate::presentation::extract::RollJson;

/// Shared state for dice handlers
pub struct DiceAppState<R, D>
where
    R: RollEngineRepository,
    D: DieRoller + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub roller: D,
    pub config: Arc<DiceConfig>,
}

impl<R, D> Clone for DiceAppState<R, D>
where
    R: RollEngineRepository,
    D: DieRoller + Clone + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
            roller: self.roller.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

impl<R, D> DiceAppState<R, D>
where
    R: RollEngineRepository,
    D: DieRoller + Clone + Send + Sync + 'static,
{
    fn roll_use_case(&self) -> RollDiceUseCase<R, D> {
        RollDiceUseCase::new(self.repo.clone(), self.roller.clone(), self.config.clone())
    }
}

/// POST /api/dice/roll
pub async fn roll<R, D>(
    State(state): State<DiceAppState<R, D>>,
    Extension(current): Extension<CurrentIdentity>,
    RollJson(body): RollJson<RollRequestBody>,
) -> DiceResult<Json<RollResponse>>
where
    R: RollEngineRepository,
    D: DieRoller + Clone + Send + Sync + 'static,
{
    let output = state
        .roll_use_case()
        .execute(current.identity_id, body.into())?;

    Ok(Json(output.into()))
}

/// POST /api/dice/roll-sum
pub async fn roll_sum<R, D>(
    State(state): State<DiceAppState<R, D>>,
    Extension(current): Extension<CurrentIdentity>,
    RollJson(body): RollJson<RollRequestBody>,
) -> DiceResult<Json<RollSumResponse>>
where
    R: RollEngineRepository,
    D: DieRoller + Clone + Send + Sync + 'static,
{
    let output = state
        .roll_use_case()
        .execute_sum(current.identity_id, body.into())?;

    Ok(Json(output.into()))
}

/// GET /api/dice/history
pub async fn history<R, D>(
    State(state): State<DiceAppState<R, D>>,
    Extension(current): Extension<CurrentIdentity>,
    Query(query): Query<HistoryQuery>,
) -> DiceResult<Json<HistoryResponse>>
where
    R: RollEngineRepository,
    D: DieRoller + Clone + Send + Sync + 'static,
{
    let use_case = HistoryUseCase::new(state.repo.clone(), state.config.clone());
    let rolls = use_case.execute(current.identity_id, query.limit)?;

    Ok(Json(HistoryResponse { rolls }))
}

/// GET /api/dice/recent
pub async fn recent<R, D>(
    State(state): State<DiceAppState<R, D>>,
    Extension(current): Extension<CurrentIdentity>,
) -> DiceResult<Json<RecentResponse>>
where
    R: RollEngineRepository,
    D: DieRoller + Clone + Send + Sync + 'static,
{
    let use_case = HistoryUseCase::new(state.repo.clone(), state.config.clone());
    let recent_rolls = use_case.recent(current.identity_id)?;

    Ok(Json(RecentResponse {
        user_name: current.user_name,
        recent_rolls,
    }))
}

/// GET /api/dice/stats
pub async fn stats<R, D>(
    State(state): State<DiceAppState<R, D>>,
    Extension(current): Extension<CurrentIdentity>,
) -> DiceResult<Json<StatsResponse>>
where
    R: RollEngineRepository,
    D: DieRoller + Clone + Send + Sync + 'static,
{
    let snapshot = StatsUseCase::new(state.repo.clone()).snapshot(current.identity_id)?;

    Ok(Json(StatsResponse {
        user_name: current.user_name,
        stats: snapshot.stats.into(),
        history: snapshot.history,
    }))
}

/// POST /api/dice/clear
pub async fn clear_history<R, D>(
    State(state): State<DiceAppState<R, D>>,
    Extension(current): Extension<CurrentIdentity>,
) -> DiceResult<StatusCode>
where
    R: RollEngineRepository,
    D: DieRoller + Clone + Send + Sync + 'static,
{
    ClearHistoryUseCase::new(state.repo.clone()).execute(current.identity_id)?;

    Ok(StatusCode::NO_CONTENT)
}
