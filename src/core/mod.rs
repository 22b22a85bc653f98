//! Core engine types: players, pieces, dice, configuration and state.
//!
//! These are the values the rules operate on. Nothing here knows how a move
//! is resolved; see `rules` for that.

pub mod config;
pub mod dice;
pub mod piece;
pub mod player;
pub mod rng;
pub mod state;

pub use config::GameConfig;
pub use dice::{DieSource, DieValue, DIE_FACES};
pub use piece::{Location, Piece, PieceId, PIECES_PER_PLAYER, YARD_POSITION};
pub use player::{Player, PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::{DiceRng, ScriptedDice};
pub use state::{create_initial_game_state, GameState, Phase};
