//! Ghost capacity invariant: nobody holds more than `size` pieces.

use super::super::{GameState, Player};
use super::Invariant;
use strum::IntoEnumIterator;

/// Invariant: in ghost mode each player occupies at most `size` cells.
///
/// Trivially true under standard rules.
pub struct GhostCapacityInvariant;

impl Invariant<GameState> for GhostCapacityInvariant {
    fn holds(game: &GameState) -> bool {
        if !game.config().is_ghost() {
            return true;
        }
        Player::iter().all(|p| game.board().count(p) <= game.size())
    }

    fn description() -> &'static str {
        "Each player has at most size pieces in ghost mode"
    }
}
