//! Action-level facade over the rules.
//!
//! Callers that drive the engine generically (simulations, hosts relaying
//! player input) deal in `Action`s:
//! - `legal_actions` lists what the acting player may do now
//! - `apply_action` performs one, drawing a die value when rolling
//! - `is_terminal` reports the winner once there is one

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{DieSource, GameState, Phase, PieceId, PlayerId};

use super::resolver::apply_move;
use super::turn::{can_roll, roll};

/// Something the acting player can do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Roll the die.
    Roll,
    /// Move an eligible piece by the rolled value.
    Move(PieceId),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Roll => f.write_str("roll"),
            Action::Move(id) => write!(f, "move {}", id),
        }
    }
}

/// Actions available in `state`.
///
/// `[Roll]` while waiting, one `Move` per eligible piece while moving,
/// nothing while rolling or once finished. At most four entries.
#[must_use]
pub fn legal_actions(state: &GameState) -> SmallVec<[Action; 4]> {
    match state.phase() {
        Phase::Waiting if can_roll(state) => smallvec::smallvec![Action::Roll],
        Phase::Moving => state.eligible_pieces().iter().copied().map(Action::Move).collect(),
        _ => SmallVec::new(),
    }
}

/// Apply `action` to `state`.
///
/// `Roll` draws exactly one value from `dice`, and only when rolling is
/// allowed. Disallowed actions return an unchanged copy.
#[must_use]
pub fn apply_action<D: DieSource>(state: &GameState, action: &Action, dice: &mut D) -> GameState {
    match *action {
        Action::Roll => {
            if !can_roll(state) {
                return state.clone();
            }
            roll(state, dice.roll_die())
        }
        Action::Move(id) => apply_move(state, id),
    }
}

/// The winner, once the game has ended.
#[must_use]
pub fn is_terminal(state: &GameState) -> Option<PlayerId> {
    match state.phase() {
        Phase::Finished => state.winner(),
        _ => None,
    }
}
