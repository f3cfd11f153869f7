//! REST routes over the game store.

use crate::api::{GamesListResponse, HealthResponse, MoveRequest, MoveResponse};
use crate::error::ApiError;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::Request;
use axum::routing::{get, post};
use axum::{Json, Router};
use derive_new::new;
use tictac_engine::{GameSnapshot, GameStore};
use tower::ServiceBuilder;
use tracing::{info, instrument, warn};

/// Shared state handed to every handler.
#[derive(Debug, Clone, new)]
pub struct AppState {
    store: GameStore,
}

impl AppState {
    /// The game registry.
    pub fn store(&self) -> &GameStore {
        &self.store
    }
}

/// Builds the router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/game", post(create_game))
        .route("/game/{game_id}", get(get_game_state))
        .route("/games", get(list_games))
        .route("/move", post(submit_move))
        .layer(ServiceBuilder::new().map_request(|req: Request<Body>| {
            info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
            req
        }))
        .with_state(state)
}

/// Liveness probe.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Creates a game and returns its initial state.
#[instrument(skip(state))]
async fn create_game(State(state): State<AppState>) -> Json<GameSnapshot> {
    Json(state.store.create_game().snapshot())
}

/// Submits a move for the current player.
#[instrument(skip(state))]
async fn submit_move(
    State(state): State<AppState>,
    Json(req): Json<MoveRequest>,
) -> Json<MoveResponse> {
    let handle = match state.store.get_game(&req.game_id) {
        Ok(handle) => handle,
        Err(e) => {
            warn!(game_id = e.id(), "Move for unknown game");
            return Json(MoveResponse::not_found());
        }
    };
    Json(handle.make_move(req.row, req.col).into())
}

/// Returns the current state of one game.
#[instrument(skip(state))]
async fn get_game_state(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<GameSnapshot>, ApiError> {
    let handle = state.store.get_game(&game_id)?;
    Ok(Json(handle.snapshot()))
}

/// Lists every game, active and finished.
#[instrument(skip(state))]
async fn list_games(State(state): State<AppState>) -> Json<GamesListResponse> {
    Json(GamesListResponse {
        games: state.store.list_games(),
    })
}
