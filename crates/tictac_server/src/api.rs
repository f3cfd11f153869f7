//! Request and response bodies for the REST API.

use serde::{Deserialize, Serialize};
use tictac_engine::{GameSnapshot, MoveOutcome};

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"Healthy"`.
    pub message: String,
}

impl HealthResponse {
    /// The liveness reply.
    pub fn healthy() -> Self {
        Self {
            message: "Healthy".to_string(),
        }
    }
}

/// Body of `POST /move`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Game identifier.
    pub game_id: String,
    /// Board row (0-2).
    pub row: i64,
    /// Board column (0-2).
    pub col: i64,
}

/// Reply to `POST /move`.
///
/// `error` and `state` are always present on the wire, `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    /// Whether the move was accepted.
    pub valid: bool,
    /// Rejection reason.
    pub error: Option<String>,
    /// Game state after the attempt.
    pub state: Option<GameSnapshot>,
}

impl MoveResponse {
    /// Reply for an unknown game id.
    pub fn not_found() -> Self {
        Self {
            valid: false,
            error: Some("Game not found".to_string()),
            state: None,
        }
    }
}

impl From<MoveOutcome> for MoveResponse {
    fn from(outcome: MoveOutcome) -> Self {
        match outcome {
            MoveOutcome::Accepted(state) => Self {
                valid: true,
                error: None,
                state: Some(state),
            },
            MoveOutcome::Rejected { reason, state } => Self {
                valid: false,
                error: Some(reason.to_string()),
                state: Some(state),
            },
        }
    }
}

/// Body of `GET /games`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamesListResponse {
    /// Every registered game.
    pub games: Vec<GameSnapshot>,
}

/// Body of an error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Human-readable message.
    pub detail: String,
}
