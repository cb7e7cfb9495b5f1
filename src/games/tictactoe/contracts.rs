//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::invariants::{GameInvariants, InvariantSet};
use super::position::Position;
use super::state::GameState;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// Contracts formalize Hoare-style reasoning:
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has neither a winner nor a draw.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] once the game has a winner or is drawn.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), MoveError> {
        if game.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the cell index is on the board.
pub struct CellInBounds;

impl CellInBounds {
    /// Fails with [`MoveError::OutOfBounds`] when `cell` is not below `size²`.
    #[instrument(skip(game))]
    pub fn check(cell: usize, game: &GameState) -> Result<(), MoveError> {
        let cells = game.board().len();
        if cell < cells {
            Ok(())
        } else {
            Err(MoveError::OutOfBounds { cell, cells })
        }
    }
}

/// Precondition: the cell is empty.
///
/// Holds in ghost mode too: an occupied cell is never overwritten, not even
/// by a piece that would evict the occupant.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::CellOccupied`] when a piece sits on `cell`.
    #[instrument(skip(game))]
    pub fn check(cell: usize, game: &GameState) -> Result<(), MoveError> {
        if game.board().is_vacant(cell) {
            Ok(())
        } else {
            let size = game.size();
            Err(MoveError::CellOccupied(Position::new(cell / size, cell % size)))
        }
    }
}

/// Composite precondition: the game is live and the cell is an empty
/// square on the board.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, in order.
    #[instrument(skip(game))]
    pub fn check(cell: usize, game: &GameState) -> Result<(), MoveError> {
        GameNotOver::check(game)?;
        CellInBounds::check(cell, game)?;
        CellIsEmpty::check(cell, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a piece on a cell.
///
/// Preconditions:
/// - Game not over
/// - Cell on the board and empty
///
/// Postconditions:
/// - Exactly one more move has been played
/// - Every [`GameInvariants`] member holds
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    fn pre(game: &GameState, cell: &usize) -> Result<(), MoveError> {
        LegalMove::check(*cell, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if after.moves_played() != before.moves_played() + 1 {
            warn!(
                before = before.moves_played(),
                after = after.moves_played(),
                "Move counter did not advance by one"
            );
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: move counter did not advance by one".to_string(),
            ));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
