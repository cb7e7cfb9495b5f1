//! Alternating turn invariant: the turn flips once per accepted move.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: X is to move exactly when an even number of moves has been
/// accepted.
///
/// The flip also happens on the move that ends the game, so this holds in
/// terminal states too.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let expected = if game.moves_played() % 2 == 0 {
            Player::FIRST
        } else {
            Player::FIRST.opponent()
        };
        game.active_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
