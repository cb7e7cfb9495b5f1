//! Complete game state and its derived status.

use super::config::{GameConfig, GameMode};
use super::ledger::{GhostLedger, PieceLife};
use super::position::Position;
use super::rules::WinInfo;
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Where a game stands.
///
/// `Won` and `Draw` are terminal: only a reset leaves them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    InProgress,
    /// A player completed a line.
    Won(WinInfo),
    /// Standard game ended with a full board and no line.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Complete game state.
///
/// Created fresh by a reset and replaced wholesale on the next one. Between
/// resets it only changes through an accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) config: GameConfig,
    pub(crate) board: Board,
    pub(crate) active_player: Player,
    pub(crate) ledger: GhostLedger,
    pub(crate) winner: Option<WinInfo>,
    pub(crate) is_draw: bool,
    pub(crate) moves_played: usize,
}

impl GameState {
    /// Creates the initial state for a validated configuration: empty
    /// board, empty ledger, X to move, no winner, no draw.
    #[instrument]
    pub(crate) fn new(config: GameConfig) -> Self {
        info!(size = *config.size(), mode = %config.mode(), "New game");
        Self {
            config,
            board: Board::new(*config.size()),
            active_player: Player::FIRST,
            ledger: GhostLedger::new(),
            winner: None,
            is_draw: false,
            moves_played: 0,
        }
    }

    /// The configuration this game was created with.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Board side.
    pub fn size(&self) -> usize {
        *self.config.size()
    }

    /// Rule variant.
    pub fn mode(&self) -> GameMode {
        *self.config.mode()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn it is.
    ///
    /// Flips once per accepted move, including the move that ends the game.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Ghost-mode ledger; always empty under standard rules.
    pub fn ledger(&self) -> &GhostLedger {
        &self.ledger
    }

    /// Winning line, once a player has completed one.
    pub fn winner(&self) -> Option<&WinInfo> {
        self.winner.as_ref()
    }

    /// True once a standard game fills the board without a line.
    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    /// Number of accepted moves since the last reset.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// True when no further move is accepted.
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }

    /// Where the game stands.
    pub fn status(&self) -> GameStatus {
        match (&self.winner, self.is_draw) {
            (Some(info), _) => GameStatus::Won(info.clone()),
            (None, true) => GameStatus::Draw,
            (None, false) => GameStatus::InProgress,
        }
    }

    /// Empty cells, or nothing once the game is over.
    pub fn valid_moves(&self) -> Vec<usize> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Age of the piece at `cell` among its owner's pieces.
    ///
    /// `None` under standard rules, for an empty cell, or once a player has
    /// won.
    #[instrument(skip(self))]
    pub fn piece_life(&self, cell: usize) -> Option<PieceLife> {
        if !self.config.is_ghost() || self.winner.is_some() {
            return None;
        }
        let owner = self.board.get(cell)?.player()?;
        self.ledger.piece_life(owner, cell)
    }

    /// The active player's piece that vanishes on their next accepted move.
    ///
    /// Only exists in an unfinished ghost game where the active player
    /// already holds `size` pieces.
    pub fn dying_piece(&self) -> Option<usize> {
        if !self.config.is_ghost() || self.is_over() {
            return None;
        }
        if self.ledger.count_of(self.active_player) < self.size() {
            return None;
        }
        self.ledger.oldest_of(self.active_player).map(|m| m.cell)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(info) => write!(f, "Winner: {}", info.winner),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status() {
            GameStatus::InProgress => write!(f, "Next: {}", self.active_player),
            status => write!(f, "{}", status),
        }
    }
}
