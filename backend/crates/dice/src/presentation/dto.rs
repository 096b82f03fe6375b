//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::application::roll_dice::{RollDiceInput, RollDiceOutput, RollSumOutput};
use crate::domain::entities::RollStats;

/// Request for POST /api/dice/roll and POST /api/dice/roll-sum
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollRequestBody {
    #[serde(default)]
    pub num_dice: Option<i64>,
    #[serde(default)]
    pub sides: Option<i64>,
}

impl From<RollRequestBody> for RollDiceInput {
    fn from(body: RollRequestBody) -> Self {
        Self {
            num_dice: body.num_dice,
            sides: body.sides,
        }
    }
}

/// Response for POST /api/dice/roll
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollResponse {
    pub num_dice: u32,
    pub sides: u32,
    pub results: Vec<u32>,
    pub total: u64,
    pub message: String,
}

impl From<RollDiceOutput> for RollResponse {
    fn from(output: RollDiceOutput) -> Self {
        let message = output.summary();
        Self {
            num_dice: output.num_dice,
            sides: output.sides,
            results: output.results,
            total: output.total,
            message,
        }
    }
}

/// Response for POST /api/dice/roll-sum
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollSumResponse {
    pub num_dice: u32,
    pub sides: u32,
    pub total: u64,
}

impl From<RollSumOutput> for RollSumResponse {
    fn from(output: RollSumOutput) -> Self {
        Self {
            num_dice: output.num_dice,
            sides: output.sides,
            total: output.total,
        }
    }
}

/// Query for GET /api/dice/history
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Response for GET /api/dice/history
#[derive(Debug, Clone, Serialize)]
pub struct HistoryResponse {
    pub rolls: Vec<u32>,
}

/// Response for GET /api/dice/recent
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentResponse {
    pub user_name: String,
    pub recent_rolls: Vec<u32>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatsBody {
    pub average: f64,
    pub min: u32,
    pub max: u32,
    pub count: usize,
}

impl From<RollStats> for StatsBody {
    fn from(stats: RollStats) -> Self {
        Self {
            average: stats.average,
            min: stats.min,
            max: stats.max,
            count: stats.count,
        }
    }
}

/// Response for GET /api/dice/stats
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub user_name: String,
    pub stats: StatsBody,
    pub history: Vec<u32>,
}
