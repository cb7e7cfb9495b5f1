//! Terminal consistency invariant: winner and draw flags match the board.

use super::super::rules::{find_winner, is_full};
use super::super::{GameMode, GameState};
use super::Invariant;

/// Invariant: the recorded winner is exactly the first completed line on
/// the board, and a draw is only ever a full standard board with no line.
pub struct TerminalConsistencyInvariant;

impl Invariant<GameState> for TerminalConsistencyInvariant {
    fn holds(game: &GameState) -> bool {
        if game.winner() != find_winner(game.board()).as_ref() {
            return false;
        }
        if game.is_draw() {
            return game.mode() == GameMode::Standard
                && is_full(game.board())
                && game.winner().is_none();
        }
        true
    }

    fn description() -> &'static str {
        "Winner and draw flags agree with the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameConfig, apply_move, reset};

    #[test]
    fn test_holds_for_won_game() {
        let mut game = reset(GameConfig::default()).unwrap();
        for cell in [0, 1, 4, 2, 8] {
            game = apply_move(&game, cell);
        }
        assert!(game.winner().is_some());
        assert!(TerminalConsistencyInvariant::holds(&game));
    }

    #[test]
    fn test_holds_for_drawn_game() {
        let mut game = reset(GameConfig::default()).unwrap();
        for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            game = apply_move(&game, cell);
        }
        assert!(game.is_draw());
        assert!(TerminalConsistencyInvariant::holds(&game));
    }

    #[test]
    fn test_premature_draw_violates() {
        let mut game = reset(GameConfig::default()).unwrap();
        game.is_draw = true;
        assert!(!TerminalConsistencyInvariant::holds(&game));
    }

    #[test]
    fn test_ghost_draw_violates() {
        let mut game = reset(GameConfig::ghost(1).unwrap()).unwrap();
        game.is_draw = true;
        assert!(!TerminalConsistencyInvariant::holds(&game));
    }
}
