//! Ghost XO - an N×N tic-tac-toe rules engine
//!
//! Two rule variants share one engine:
//!
//! - **Standard**: classic tic-tac-toe on any N×N board. A full row,
//!   column or diagonal wins; a full board without one is a draw.
//! - **Ghost**: each player keeps at most N pieces. Placing one more makes
//!   that player's oldest piece vanish first, so the board never fills and
//!   there is no draw.
//!
//! # Architecture
//!
//! - **Engine**: [`reset`] / [`apply_move`] over an owned [`GameState`], or
//!   the in-place [`GameEngine`]
//! - **Rules**: pure win and draw detection ([`rules`])
//! - **Ledger**: per-player FIFO of active ghost pieces ([`GhostLedger`])
//! - **Contracts**: move preconditions and post-move [`GameInvariants`]
//!
//! Rendering and input are left to the caller, which reads [`GameState`]
//! and calls the two mutating operations.
//!
//! # Example
//!
//! ```
//! use ghost_xo::{GameConfig, Player, apply_move, reset};
//!
//! # fn main() -> Result<(), ghost_xo::ConfigError> {
//! let mut state = reset(GameConfig::standard(3)?)?;
//! for cell in [0, 1, 4, 2, 8] {
//!     state = apply_move(&state, cell);
//! }
//! let win = state.winner().expect("X completed the diagonal");
//! assert_eq!(win.winner, Player::X);
//! assert_eq!(win.line, vec![0, 4, 8]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod games;

// Crate-level exports - rules
pub use games::tictactoe::rules;

// Crate-level exports - configuration
pub use games::tictactoe::{ConfigError, ConfigErrorKind, GameConfig, GameMode, MIN_SIZE};

// Crate-level exports - engine
pub use games::tictactoe::{
    GameEngine, GameError, Placement, apply_move, piece_life, replay, reset, try_apply_move,
};

// Crate-level exports - game types
pub use games::tictactoe::{
    Board, GameState, GameStatus, GhostLedger, Move, MoveError, PieceLife, Player, Position,
    Square, WinInfo, find_winner,
};

// Crate-level exports - contracts and invariants
pub use games::tictactoe::{
    AlternatingTurnInvariant, BoardShapeInvariant, CellInBounds, CellIsEmpty, Contract,
    GameInvariants, GameNotOver, GhostCapacityInvariant, Invariant, InvariantSet,
    InvariantViolation, LedgerMatchesBoardInvariant, LegalMove, MoveContract,
    TerminalConsistencyInvariant,
};
