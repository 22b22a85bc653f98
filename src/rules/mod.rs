//! The Ludo rules as pure functions over `GameState`.
//!
//! - `validator`: which pieces may move with a die value
//! - `resolver`: positioning, capture, win check and turn advancement
//! - `turn`: phase transitions around a roll
//! - `engine`: `Action`-level facade
//!
//! Every transition takes `&GameState` and returns a new `GameState`. An
//! invalid request returns an unchanged copy; compare phase or eligibility
//! before and after to detect it.

pub mod engine;
pub mod resolver;
pub mod turn;
pub mod validator;

pub use engine::{apply_action, is_terminal, legal_actions, Action};
pub use resolver::apply_move;
pub use turn::{can_roll, finish_roll, roll, start_roll};
pub use validator::{eligible_pieces, is_move_legal};
