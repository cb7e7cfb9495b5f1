//! Draw detection for tic-tac-toe.

use super::super::{Board, GameMode, Square};
use super::win::find_winner;
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A draw is a full board with no completed line, under standard rules.
///
/// Ghost games never draw: once a player is at capacity every new piece
/// frees a cell of its own.
#[instrument(skip(board))]
pub fn is_draw(board: &Board, mode: GameMode) -> bool {
    mode == GameMode::Standard && is_full(board) && find_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Player;

    fn fill(board: &mut Board, pattern: &str) {
        for (i, c) in pattern.chars().enumerate() {
            let sq = match c {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
            board.set(i, sq);
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new(3)));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(3);
        board.set(4, Square::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new(3);
        // X O X / O X X / O X O
        fill(&mut board, "XOXOXXOXO");
        assert!(is_full(&board));
        assert!(is_draw(&board, GameMode::Standard));
    }

    #[test]
    fn test_full_board_is_not_a_ghost_draw() {
        let mut board = Board::new(3);
        fill(&mut board, "XOXOXXOXO");
        assert!(!is_draw(&board, GameMode::Ghost));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new(3);
        fill(&mut board, "XXXOOXOXO");
        assert!(is_full(&board));
        assert!(!is_draw(&board, GameMode::Standard));
    }
}
