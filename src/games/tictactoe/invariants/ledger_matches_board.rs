//! Ledger consistency invariant: the ledger and the board agree.

use super::super::{GameState, Square};
use super::Invariant;
use std::collections::HashSet;

/// Invariant: in ghost mode every ledger entry names an occupied cell
/// owned by its player, no cell appears twice, and every occupied cell has
/// an entry. Under standard rules the ledger stays empty.
pub struct LedgerMatchesBoardInvariant;

impl Invariant<GameState> for LedgerMatchesBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let ledger = game.ledger();
        if !game.config().is_ghost() {
            return ledger.is_empty();
        }

        let mut seen = HashSet::new();
        for mov in ledger.history() {
            if !seen.insert(mov.cell) {
                return false;
            }
            if game.board().get(mov.cell) != Some(Square::Occupied(mov.player)) {
                return false;
            }
        }

        let occupied = game
            .board()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();

        occupied == ledger.len()
    }

    fn description() -> &'static str {
        "Ledger entries match the occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameConfig, Move, Player, apply_move, reset};

    #[test]
    fn test_empty_game_holds() {
        let game = reset(GameConfig::ghost(3).unwrap()).unwrap();
        assert!(LedgerMatchesBoardInvariant::holds(&game));
    }

    #[test]
    fn test_holds_after_eviction() {
        let mut game = reset(GameConfig::ghost(3).unwrap()).unwrap();
        for cell in [0, 1, 4, 2, 6, 3, 8] {
            game = apply_move(&game, cell);
        }
        assert_eq!(game.ledger().len(), 6);
        assert!(LedgerMatchesBoardInvariant::holds(&game));
    }

    #[test]
    fn test_standard_games_keep_no_ledger() {
        let mut game = reset(GameConfig::standard(3).unwrap()).unwrap();
        game = apply_move(&game, 4);
        assert!(game.ledger().is_empty());
        assert!(LedgerMatchesBoardInvariant::holds(&game));
    }

    #[test]
    fn test_unrecorded_piece_violates() {
        let game = reset(GameConfig::ghost(3).unwrap()).unwrap();
        let mut game = apply_move(&game, 4);
        game.board.set(0, Square::Occupied(Player::O));
        assert!(!LedgerMatchesBoardInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_owner_violates() {
        let game = reset(GameConfig::ghost(3).unwrap()).unwrap();
        let mut game = apply_move(&game, 4);
        game.ledger.clear();
        game.ledger.record(Move::new(Player::O, 4), 3);
        assert!(!LedgerMatchesBoardInvariant::holds(&game));
    }
}
