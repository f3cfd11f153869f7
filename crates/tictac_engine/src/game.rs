//! Game state machine for a single tic-tac-toe match.

use crate::rules;
use crate::types::{BOARD_SIZE, Board, GameId, GameStatus, Player};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Moves needed to fill the board.
pub const MAX_MOVES: u8 = (BOARD_SIZE * BOARD_SIZE) as u8;

/// Reason a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum MoveRejection {
    /// The game has already been won or drawn.
    #[display("Game is already over.")]
    GameOver,
    /// Row or column outside `0..=2`.
    #[display("Move out of bounds.")]
    OutOfBounds,
    /// The target square is occupied.
    #[display("Cell already taken.")]
    CellTaken,
}

/// Read-only copy of a game's state at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Game identifier.
    id: GameId,
    /// Board contents.
    board: Board,
    /// Player to move (or the last mover once the game is over).
    #[getter(copy)]
    current_player: Player,
    /// Game status.
    #[getter(copy)]
    status: GameStatus,
    /// Winner, set only when `status` is [`GameStatus::Win`].
    #[getter(copy)]
    winner: Option<Player>,
    /// Accepted moves so far.
    #[getter(copy)]
    moves: u8,
}

/// Result of [`Game::make_move`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied.
    Accepted(GameSnapshot),
    /// The move was refused; `state` is the unchanged game.
    Rejected {
        /// Why the move was refused.
        reason: MoveRejection,
        /// Current (unchanged) state.
        state: GameSnapshot,
    },
}

impl MoveOutcome {
    /// Returns `true` if the move was applied.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted(_))
    }

    /// The rejection reason, if any.
    pub fn rejection(&self) -> Option<MoveRejection> {
        match self {
            MoveOutcome::Accepted(_) => None,
            MoveOutcome::Rejected { reason, .. } => Some(*reason),
        }
    }

    /// State after the attempt.
    pub fn state(&self) -> &GameSnapshot {
        match self {
            MoveOutcome::Accepted(state) | MoveOutcome::Rejected { state, .. } => state,
        }
    }
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone)]
pub struct Game {
    id: GameId,
    board: Board,
    current_player: Player,
    status: GameStatus,
    winner: Option<Player>,
    moves: u8,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new(id: GameId) -> Self {
        Self {
            id,
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::Ongoing,
            winner: None,
            moves: 0,
        }
    }

    /// Game identifier.
    pub fn id(&self) -> &GameId {
        &self.id
    }

    /// Board contents.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Winner, if the game was won.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Accepted moves so far.
    pub fn moves(&self) -> u8 {
        self.moves
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Checks, in order: game over, bounds, occupancy. A rejected move
    /// leaves the game untouched.
    #[instrument(skip(self), fields(game_id = %self.id, player = %self.current_player))]
    pub fn make_move(&mut self, row: i64, col: i64) -> MoveOutcome {
        match self.apply_move(row, col) {
            Ok(()) => {
                info!(status = %self.status, moves = self.moves, "Move accepted");
                debug!(board = %self.board.display(), "Board after move");
                MoveOutcome::Accepted(self.snapshot())
            }
            Err(reason) => {
                warn!(%reason, "Move rejected");
                MoveOutcome::Rejected {
                    reason,
                    state: self.snapshot(),
                }
            }
        }
    }

    fn apply_move(&mut self, row: i64, col: i64) -> Result<(), MoveRejection> {
        if self.status != GameStatus::Ongoing {
            return Err(MoveRejection::GameOver);
        }

        let (row, col) = match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) if r < BOARD_SIZE && c < BOARD_SIZE => (r, c),
            _ => return Err(MoveRejection::OutOfBounds),
        };

        if !self.board.is_empty(row, col) {
            return Err(MoveRejection::CellTaken);
        }

        let mover = self.current_player;
        self.board.place(row, col, mover);
        self.moves += 1;

        // Only the mover can have just completed a line. Turn stays put once the game ends.
        if self.check_win(mover) {
            self.status = GameStatus::Win;
            self.winner = Some(mover);
        } else if self.moves == MAX_MOVES {
            self.status = GameStatus::Draw;
            self.winner = None;
        } else {
            self.current_player = mover.opponent();
        }

        Ok(())
    }

    /// Returns `true` if `player` holds a complete line.
    pub fn check_win(&self, player: Player) -> bool {
        rules::check_win(&self.board, player)
    }

    /// Copies the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            id: self.id.clone(),
            board: self.board,
            current_player: self.current_player,
            status: self.status,
            winner: self.winner,
            moves: self.moves,
        }
    }
}
