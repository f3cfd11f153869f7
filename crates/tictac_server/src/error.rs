//! HTTP error responses.

use crate::api::ErrorDetail;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error, From};
use tictac_engine::GameNotFound;
use tracing::debug;

/// Errors a handler can return.
#[derive(Debug, Display, Error, From)]
pub enum ApiError {
    /// The referenced game does not exist.
    NotFound(GameNotFound),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(e) => {
                debug!(game_id = e.id(), "Responding 404");
                StatusCode::NOT_FOUND
            }
        };
        let body = ErrorDetail {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
