//! N×N tic-tac-toe with standard and ghost rules.

mod action;
mod config;
mod contracts;
mod engine;
mod invariants;
mod ledger;
mod position;
pub mod rules;
mod state;
mod types;

pub use action::{Move, MoveError};
pub use config::{ConfigError, ConfigErrorKind, GameConfig, GameMode, MIN_SIZE};
pub use contracts::{CellInBounds, CellIsEmpty, Contract, GameNotOver, LegalMove, MoveContract};
pub use engine::{
    GameEngine, GameError, Placement, apply_move, piece_life, replay, reset, try_apply_move,
};
pub use invariants::{
    AlternatingTurnInvariant, BoardShapeInvariant, GameInvariants, GhostCapacityInvariant,
    Invariant, InvariantSet, InvariantViolation, LedgerMatchesBoardInvariant,
    TerminalConsistencyInvariant,
};
pub use ledger::{GhostLedger, PieceLife};
pub use position::Position;
pub use rules::{WinInfo, find_winner};
pub use state::{GameState, GameStatus};
pub use types::{Board, Player, Square};
