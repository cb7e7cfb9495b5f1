//! Board shape invariant: the board always has `size²` cells.

use super::super::GameState;
use super::Invariant;

/// Invariant: board side and length match the configuration.
pub struct BoardShapeInvariant;

impl Invariant<GameState> for BoardShapeInvariant {
    fn holds(game: &GameState) -> bool {
        game.board().size() == game.size() && game.board().len() == game.config().cells()
    }

    fn description() -> &'static str {
        "Board has size² cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, GameConfig, reset};

    #[test]
    fn test_fresh_boards_hold() {
        for size in 1..=6 {
            let game = reset(GameConfig::ghost(size).unwrap()).unwrap();
            assert!(BoardShapeInvariant::holds(&game));
        }
    }

    #[test]
    fn test_wrong_board_violates() {
        let mut game = reset(GameConfig::standard(4).unwrap()).unwrap();
        game.board = Board::new(3);
        assert!(!BoardShapeInvariant::holds(&game));
    }
}
