//! Row/column positions on an N×N board.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A row/column position on the board.
///
/// Cell indices are row-major, so on a board of side `size` the position
/// `(row, col)` is cell `row * size + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Zero-based row, top to bottom.
    pub row: usize,
    /// Zero-based column, left to right.
    pub col: usize,
}

impl Position {
    /// Creates a position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts a cell index to a position, or `None` when `index` is off a
    /// board of side `size`.
    #[instrument]
    pub fn from_index(index: usize, size: usize) -> Option<Self> {
        if index < size * size {
            Some(Self::new(index / size, index % size))
        } else {
            None
        }
    }

    /// Converts this position to a cell index, or `None` when it lies off a
    /// board of side `size`.
    #[instrument]
    pub fn to_index(self, size: usize) -> Option<usize> {
        if self.row < size && self.col < size {
            Some(self.row * size + self.col)
        } else {
            None
        }
    }

    /// Human-readable label, 1-based ("r1c3").
    pub fn label(&self) -> String {
        format!("r{}c{}", self.row + 1, self.col + 1)
    }

    /// Returns the cell indices of all empty squares, in board order.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<usize> {
        (0..board.len()).filter(|&i| board.is_vacant(i)).collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
