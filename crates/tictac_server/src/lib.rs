//! Tic-tac-toe game server - REST adapter over [`tictac_engine`].
//!
//! # Routes
//!
//! - `GET /` - liveness probe
//! - `POST /game` - create a game
//! - `POST /move` - submit `{game_id, row, col}`
//! - `GET /game/{id}` - one game's state
//! - `GET /games` - every game's state

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod cli;
mod config;
mod error;
mod routes;

pub use api::{ErrorDetail, GamesListResponse, HealthResponse, MoveRequest, MoveResponse};
pub use cli::Cli;
pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use routes::{AppState, create_router};
