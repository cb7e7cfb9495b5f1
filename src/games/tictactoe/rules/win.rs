//! Win detection for N×N tic-tac-toe.

use super::super::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A completed line and the player who owns it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinInfo {
    /// Owner of every cell in the line.
    pub winner: Player,
    /// Cell indices of the line, in enumeration order.
    pub line: Vec<usize>,
}

/// Enumerates every line of a board of side `size`.
///
/// Order is fixed: rows top to bottom, then columns left to right, then the
/// main diagonal (top-left to bottom-right) and the anti-diagonal
/// (top-right to bottom-left).
pub fn lines(size: usize) -> impl Iterator<Item = Vec<usize>> {
    let rows = (0..size).map(move |r| (0..size).map(|c| r * size + c).collect::<Vec<_>>());
    let cols = (0..size).map(move |c| (0..size).map(|r| r * size + c).collect::<Vec<_>>());
    let diag = std::iter::once((0..size).map(|i| i * size + i).collect::<Vec<_>>());
    let anti = std::iter::once((0..size).map(|i| i * size + (size - 1 - i)).collect::<Vec<_>>());
    rows.chain(cols).chain(diag).chain(anti)
}

/// Finds a completed line, if any.
///
/// Returns the first complete line in [`lines`] order, which makes the
/// result deterministic when a single move completes several lines at once.
#[instrument(skip(board), fields(size = board.size()))]
pub fn find_winner(board: &Board) -> Option<WinInfo> {
    let size = board.size();
    if size == 0 {
        return None;
    }

    for line in lines(size) {
        let first = board.get(line[0]);
        if let Some(Square::Occupied(player)) = first
            && line.iter().all(|&i| board.get(i) == first)
        {
            return Some(WinInfo {
                winner: player,
                line,
            });
        }
    }

    None
}
