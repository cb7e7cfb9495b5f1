//! Ghost-mode move ledger.
//!
//! The ledger keeps the active moves of both players in one chronological
//! sequence. A player's own moves, filtered out of that sequence, are their
//! pieces from oldest to newest. With at most `size` active moves per
//! player the sequence never exceeds `2 * size` entries, so every query is
//! O(size).

use super::action::Move;
use super::types::Player;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Age of a piece among its owner's active pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceLife {
    /// Zero-based age; 0 is the oldest piece, next in line to vanish.
    pub rank: usize,
    /// Number of active pieces the owner has.
    pub total: usize,
}

impl PieceLife {
    /// True for the piece that vanishes next once its owner is at `cap`.
    pub fn is_next_to_vanish(&self, cap: usize) -> bool {
        self.rank == 0 && self.total >= cap
    }
}

/// Chronological record of every active ghost-mode move.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GhostLedger {
    history: Vec<Move>,
}

impl GhostLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// All active moves, oldest first, both players interleaved.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of active moves across both players.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// True when no move is recorded.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// `player`'s active moves, oldest first.
    pub fn active_moves_of(&self, player: Player) -> impl Iterator<Item = &Move> + '_ {
        self.history.iter().filter(move |m| m.player == player)
    }

    /// Number of active moves `player` has.
    pub fn count_of(&self, player: Player) -> usize {
        self.active_moves_of(player).count()
    }

    /// `player`'s oldest active move: the next eviction candidate.
    pub fn oldest_of(&self, player: Player) -> Option<Move> {
        self.active_moves_of(player).next().copied()
    }

    /// Age of `player`'s piece at `cell`, if they have one there.
    #[instrument(skip(self))]
    pub fn piece_life(&self, player: Player, cell: usize) -> Option<PieceLife> {
        let mut total = 0;
        let mut rank = None;
        for (i, m) in self.active_moves_of(player).enumerate() {
            if m.cell == cell {
                rank = Some(i);
            }
            total += 1;
        }
        rank.map(|rank| PieceLife { rank, total })
    }

    /// Records `mv`, first evicting the mover's oldest move when they
    /// already hold `cap` active moves.
    ///
    /// Only the mover's own moves are ever evicted. Returns the evicted
    /// move so the caller can clear its cell.
    #[instrument(skip(self), fields(active = self.history.len()))]
    pub fn record(&mut self, mv: Move, cap: usize) -> Option<Move> {
        let evicted = if self.count_of(mv.player) >= cap {
            self.evict_oldest(mv.player)
        } else {
            None
        };
        self.history.push(mv);
        evicted
    }

    /// Removes `player`'s oldest active move.
    fn evict_oldest(&mut self, player: Player) -> Option<Move> {
        let pos = self.history.iter().position(|m| m.player == player)?;
        let evicted = self.history.remove(pos);
        debug!(player = %player, cell = evicted.cell, "Evicted oldest piece");
        Some(evicted)
    }

    /// Forgets every move.
    pub fn clear(&mut self) {
        self.history.clear();
    }
}
