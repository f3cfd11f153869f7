//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Wire symbol for this player.
    pub fn symbol(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

/// A square on the tic-tac-toe board.
///
/// Serialized as `""`, `"X"` or `"O"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Wire symbol for this square.
    pub fn as_str(self) -> &'static str {
        match self {
            Square::Empty => "",
            Square::Occupied(player) => player.symbol(),
        }
    }
}

impl From<Square> for &'static str {
    fn from(square: Square) -> Self {
        square.as_str()
    }
}

/// A string that is not a valid square symbol.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid square symbol: {:?}", symbol)]
pub struct InvalidSquare {
    /// The rejected input.
    pub symbol: String,
}

impl TryFrom<String> for Square {
    type Error = InvalidSquare;

    fn try_from(symbol: String) -> Result<Self, Self::Error> {
        match symbol.as_str() {
            "" => Ok(Square::Empty),
            "X" => Ok(Square::Occupied(Player::X)),
            "O" => Ok(Square::Occupied(Player::O)),
            _ => Err(InvalidSquare { symbol }),
        }
    }
}

/// 3x3 tic-tac-toe board, indexed by `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    rows: [[Square; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at `(row, col)`, or `None` if off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Checks if the square at `(row, col)` is on the board and empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.get(row, col), Some(Square::Empty))
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.rows.iter().flatten().all(|s| *s != Square::Empty)
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|s| **s != Square::Empty)
            .count()
    }

    /// Marks `(row, col)` for `player`. Coordinates must be in range.
    pub(crate) fn place(&mut self, row: usize, col: usize, player: Player) {
        self.rows[row][col] = Square::Occupied(player);
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|s| match s {
                        Square::Empty => ".",
                        Square::Occupied(p) => p.symbol(),
                    })
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n-+-+-\n")
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameStatus {
    /// Moves are still accepted.
    Ongoing,
    /// A player completed a line.
    Win,
    /// The board filled with no line completed.
    Draw,
}

/// Opaque game identifier (UUIDv4 string).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for GameId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for GameId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
