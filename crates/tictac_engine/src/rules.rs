//! Win detection for tic-tac-toe.
//!
//! Pure functions over a [`Board`], kept apart from the game state
//! machine so they can be checked in isolation.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning lines as `(row, col)` triples.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns `true` if `player` holds every square of some line.
#[instrument(skip(board))]
pub fn check_win(board: &Board, player: Player) -> bool {
    let mark = Some(Square::Occupied(player));
    LINES
        .iter()
        .any(|line| line.iter().all(|&(row, col)| board.get(row, col) == mark))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn board_with(player: Player, cells: &[(usize, usize)]) -> Board {
        let mut board = Board::new();
        for &(row, col) in cells {
            board.place(row, col, player);
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        for player in Player::iter() {
            assert!(!check_win(&board, player));
        }
    }

    #[test]
    fn test_every_line_wins() {
        for player in Player::iter() {
            for line in LINES {
                let board = board_with(player, &line);
                assert!(check_win(&board, player), "{player} should win on {line:?}");
                assert!(!check_win(&board, player.opponent()));
            }
        }
    }

    #[test]
    fn test_incomplete_line() {
        let board = board_with(Player::X, &[(0, 0), (0, 1)]);
        assert!(!check_win(&board, Player::X));
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = board_with(Player::X, &[(0, 0), (1, 1)]);
        board.place(2, 2, Player::O);
        assert!(!check_win(&board, Player::X));
        assert!(!check_win(&board, Player::O));
    }
}
