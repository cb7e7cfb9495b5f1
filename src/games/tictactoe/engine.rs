//! Game engine: configuration, move application, turn order, and
//! terminal-state detection.
//!
//! Two equivalent surfaces are provided:
//! - pure functions ([`reset`], [`apply_move`], [`try_apply_move`]) that
//!   take a state and return a new one, leaving the input untouched;
//! - [`GameEngine`], which owns one state and updates it in place.
//!
//! Either way a move is atomic: a rejected move changes nothing, and an
//! accepted one updates board, ledger, turn and outcome together.

use super::action::{Move, MoveError};
use super::config::{ConfigError, GameConfig};
use super::contracts::{Contract, MoveContract};
use super::ledger::PieceLife;
use super::rules::{find_winner, is_draw};
use super::state::{GameState, GameStatus};
use super::types::Square;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// What an accepted move did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The move that was placed.
    pub mv: Move,
    /// The mover's piece that vanished to make room (ghost mode only).
    pub evicted: Option<Move>,
    /// Status after the move.
    pub status: GameStatus,
}

/// Error from building a game out of a configuration and a move list.
#[derive(Debug, Clone, Display, Error, From)]
pub enum GameError {
    /// The configuration was rejected.
    #[display("{}", _0)]
    Config(ConfigError),
    /// A move in the sequence was rejected.
    #[display("{}", _0)]
    Move(MoveError),
}

/// Creates the initial state for `config`.
///
/// # Errors
///
/// Returns a [`ConfigError`] for an out-of-range board size; no state is
/// built in that case.
#[track_caller]
#[instrument]
pub fn reset(config: GameConfig) -> Result<GameState, ConfigError> {
    config.validate()?;
    Ok(GameState::new(config))
}

/// Applies a move for the active player, returning the new state.
///
/// An illegal move (game over, cell off the board, cell occupied) is a
/// no-op: the returned state equals `state`.
#[instrument(skip(state), fields(player = %state.active_player()))]
pub fn apply_move(state: &GameState, cell: usize) -> GameState {
    match try_apply_move(state, cell) {
        Ok((next, _)) => next,
        Err(_) => state.clone(),
    }
}

/// Applies a move for the active player, reporting why it was rejected.
///
/// # Errors
///
/// Returns the [`MoveError`] naming the violated precondition; `state` is
/// never modified.
#[instrument(skip(state), fields(player = %state.active_player()))]
pub fn try_apply_move(
    state: &GameState,
    cell: usize,
) -> Result<(GameState, Placement), MoveError> {
    MoveContract::pre(state, &cell)?;
    let mut next = state.clone();
    let placement = place(&mut next, cell);

    #[cfg(debug_assertions)]
    MoveContract::post(state, &next)?;

    Ok((next, placement))
}

/// Age of the piece at `cell`; see [`GameState::piece_life`].
pub fn piece_life(state: &GameState, cell: usize) -> Option<PieceLife> {
    state.piece_life(cell)
}

/// Plays `cells` in order from a fresh game.
///
/// # Errors
///
/// Fails on an invalid configuration or on the first rejected move, so a
/// replay never silently skips input.
#[instrument(skip(cells), fields(moves = cells.len()))]
pub fn replay(config: GameConfig, cells: &[usize]) -> Result<GameState, GameError> {
    let mut state = reset(config)?;
    for &cell in cells {
        let (next, _) = try_apply_move(&state, cell)?;
        state = next;
    }
    Ok(state)
}

/// Applies a move that has already passed [`MoveContract::pre`].
fn place(state: &mut GameState, cell: usize) -> Placement {
    let player = state.active_player;
    let mv = Move::new(player, cell);

    let evicted = if state.config.is_ghost() {
        let evicted = state.ledger.record(mv, state.size());
        if let Some(old) = evicted {
            state.board.set(old.cell, Square::Empty);
        }
        evicted
    } else {
        None
    };

    state.board.set(cell, Square::Occupied(player));
    state.moves_played += 1;
    debug!(%mv, evicted = ?evicted.map(|m| m.cell), "Move accepted");

    if let Some(info) = find_winner(&state.board) {
        info!(winner = %info.winner, line = ?info.line, "Game won");
        state.winner = Some(info);
    } else if is_draw(&state.board, state.mode()) {
        info!("Game drawn");
        state.is_draw = true;
    }

    // One flip per accepted move, the final one included.
    state.active_player = player.opponent();

    Placement {
        mv,
        evicted,
        status: state.status(),
    }
}

/// Owns one game and applies moves to it in place.
#[derive(Debug, Clone)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Starts a game with `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for an out-of-range board size.
    #[track_caller]
    #[instrument]
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            state: reset(config)?,
        })
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Discards the current game and starts a new one with `config`.
    ///
    /// On error the current game is kept as is.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn reset(&mut self, config: GameConfig) -> Result<&GameState, ConfigError> {
        self.state = reset(config)?;
        Ok(&self.state)
    }

    /// Starts over with the current configuration.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> &GameState {
        self.state = GameState::new(self.state.config);
        &self.state
    }

    /// Places the active player's piece on `cell`.
    ///
    /// # Errors
    ///
    /// Returns the reason the move was rejected; the game is unchanged.
    #[instrument(skip(self), fields(player = %self.state.active_player()))]
    pub fn make_move(&mut self, cell: usize) -> Result<Placement, MoveError> {
        if let Err(e) = MoveContract::pre(&self.state, &cell) {
            debug!(error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let placement = place(&mut self.state, cell);

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, &self.state) {
            self.state = before;
            return Err(e);
        }

        Ok(placement)
    }

    /// Age of the piece at `cell`; see [`GameState::piece_life`].
    pub fn piece_life(&self, cell: usize) -> Option<PieceLife> {
        self.state.piece_life(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameMode, Player};

    #[test]
    fn test_first_move() {
        let mut engine = GameEngine::new(GameConfig::default()).unwrap();
        let placement = engine.make_move(4).unwrap();
        assert_eq!(placement.mv, Move::new(Player::X, 4));
        assert_eq!(placement.evicted, None);
        assert_eq!(placement.status, GameStatus::InProgress);
        assert_eq!(engine.state().active_player(), Player::O);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut engine = GameEngine::new(GameConfig::default()).unwrap();
        engine.make_move(4).unwrap();
        let before = engine.state().clone();
        assert!(engine.make_move(4).is_err());
        assert!(engine.make_move(9).is_err());
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_ghost_eviction_reported() {
        let mut engine = GameEngine::new(GameConfig::ghost(3).unwrap()).unwrap();
        for cell in [0, 1, 4, 2, 6, 5] {
            engine.make_move(cell).unwrap();
        }
        let placement = engine.make_move(3).unwrap();
        assert_eq!(placement.evicted, Some(Move::new(Player::X, 0)));
        assert!(engine.state().board().is_vacant(0));
    }

    #[test]
    fn test_reset_error_keeps_game() {
        let mut engine = GameEngine::new(GameConfig::default()).unwrap();
        engine.make_move(0).unwrap();
        let bad = GameConfig::unchecked(0, GameMode::Standard);
        assert!(engine.reset(bad).is_err());
        assert_eq!(engine.state().moves_played(), 1);
    }

    #[test]
    fn test_reset_with_new_config() {
        let mut engine = GameEngine::new(GameConfig::default()).unwrap();
        engine.make_move(0).unwrap();
        let state = engine.reset(GameConfig::ghost(5).unwrap()).unwrap();
        assert_eq!(state.mode(), GameMode::Ghost);
        assert_eq!(state.board().len(), 25);
        assert_eq!(state.moves_played(), 0);
    }

    #[test]
    fn test_restart_keeps_config() {
        let mut engine = GameEngine::new(GameConfig::ghost(4).unwrap()).unwrap();
        engine.make_move(0).unwrap();
        let state = engine.restart();
        assert_eq!(state.size(), 4);
        assert!(state.config().is_ghost());
        assert!(state.board().is_vacant(0));
    }

    #[test]
    fn test_replay_reports_config_error() {
        let bad = GameConfig::unchecked(0, GameMode::Ghost);
        assert!(matches!(replay(bad, &[]), Err(GameError::Config(_))));
    }

    #[test]
    fn test_draw_flag_follows_draw_rule() {
        let mut state = reset(GameConfig::default()).unwrap();
        for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            state = apply_move(&state, cell);
            assert_eq!(state.is_draw(), is_draw(state.board(), state.mode()));
        }
        assert!(state.is_draw());
    }

    #[test]
    fn test_replay_stops_at_rejection() {
        let err = replay(GameConfig::default(), &[0, 0]).unwrap_err();
        assert!(matches!(err, GameError::Move(MoveError::CellOccupied(_))));
    }

    #[test]
    fn test_single_cell_board_first_move_wins() {
        let state = apply_move(&reset(GameConfig::standard(1).unwrap()).unwrap(), 0);
        assert_eq!(state.winner().map(|w| w.winner), Some(Player::X));
        assert!(!state.is_draw());
    }
}
