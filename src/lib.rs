//! # ludo-engine
//!
//! A pure state-machine engine for four-player Ludo.
//!
//! ## Design Principles
//!
//! 1. **Pure transitions**: every operation takes a `&GameState` and returns
//!    a new `GameState`. Nothing is mutated in place and nothing is retained
//!    between calls.
//!
//! 2. **No-op on invalid input**: an illegal move or an out-of-phase roll
//!    returns an unchanged copy of the input. Out-of-domain values (a die
//!    showing 7, a fifth player) are rejected when the typed value is built.
//!
//! 3. **Randomness from outside**: the engine consumes die values; it never
//!    rolls. `DieSource` is the seam.
//!
//! ## Flow
//!
//! ```
//! use ludo_engine::core::{create_initial_game_state, DieValue, PieceId, PlayerId, Phase};
//! use ludo_engine::rules::{apply_move, roll};
//!
//! let state = create_initial_game_state();
//! let state = roll(&state, DieValue::SIX);
//! assert_eq!(state.phase(), Phase::Moving);
//!
//! let piece = PieceId::new(PlayerId::new(0), 0);
//! let state = apply_move(&state, piece);
//! assert_eq!(state.piece(piece).position(), 1);
//! assert_eq!(state.current_player(), PlayerId::new(0)); // six rolls again
//! ```
//!
//! ## Modules
//!
//! - `core`: players, pieces, dice, configuration, state
//! - `board`: fixed board data and the rendering layout
//! - `rules`: validator, resolver, turn coordinator, action facade
//! - `game`: `LudoGame`, a stateful driver holding a die source
//! - `error`: `LudoError`

pub mod board;
pub mod core;
pub mod error;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    create_initial_game_state, DiceRng, DieSource, DieValue, GameConfig, GameState, Location,
    Phase, Piece, PieceId, Player, PlayerId, PlayerMap, ScriptedDice,
};

pub use crate::board::{board_layout, BoardCell, CellKind, HomeLane};

pub use crate::rules::{
    apply_action, apply_move, can_roll, eligible_pieces, finish_roll, is_move_legal, is_terminal,
    legal_actions, roll, start_roll, Action,
};

pub use crate::game::LudoGame;

pub use crate::error::{LudoError, LudoResult};
