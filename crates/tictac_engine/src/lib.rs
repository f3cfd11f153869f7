//! Tic-tac-toe engine - game rules and an in-memory game registry.
//!
//! # Architecture
//!
//! - **Game**: state machine for one match (board, turn order, win/draw)
//! - **GameStore**: thread-safe registry of games keyed by [`GameId`]
//! - **GameHandle**: lock-protected reference to a registered game
//!
//! # Example
//!
//! ```
//! use tictac_engine::{GameStatus, GameStore, Player};
//!
//! let store = GameStore::new();
//! let game = store.create_game();
//! for (row, col) in [(0, 0), (1, 0), (1, 1), (2, 0), (2, 2)] {
//!     assert!(game.make_move(row, col).is_accepted());
//! }
//! let state = game.snapshot();
//! assert_eq!(state.status(), GameStatus::Win);
//! assert_eq!(state.winner(), Some(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod rules;
mod store;
mod types;

pub use game::{Game, GameSnapshot, MAX_MOVES, MoveOutcome, MoveRejection};
pub use rules::{LINES, check_win};
pub use store::{GameHandle, GameNotFound, GameStore};
pub use types::{BOARD_SIZE, Board, GameId, GameStatus, InvalidSquare, Player, Square};
