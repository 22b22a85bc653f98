//! Turn coordination around die rolls.
//!
//! ## Phase transitions
//!
//! ```text
//! Waiting --start_roll--> Rolling --finish_roll--> Moving   (some piece can move)
//!                                              \-> Waiting  (nothing can move)
//! Moving  --apply_move--> Waiting | Finished
//! ```
//!
//! When nothing can move, a 6 keeps the turn with the same player; any other
//! value passes it on.

use crate::core::{DieValue, GameState, Phase};

use super::validator::eligible_pieces;

/// May the acting player roll now?
#[must_use]
pub fn can_roll(state: &GameState) -> bool {
    state.phase() == Phase::Waiting && !state.is_rolling() && !state.acting_player().has_won()
}

/// Begin a roll: `Waiting` becomes `Rolling`.
///
/// Returns an unchanged copy when rolling is not allowed.
#[must_use]
pub fn start_roll(state: &GameState) -> GameState {
    let mut next = state.clone();
    if !can_roll(state) {
        return next;
    }

    log::trace!("{} rolls", state.current_player());
    next.set_phase(Phase::Rolling);
    next.set_rolling(true);
    next
}

/// Complete a roll with the die value supplied by the caller.
///
/// Only valid in `Rolling`; otherwise returns an unchanged copy.
#[must_use]
pub fn finish_roll(state: &GameState, die: DieValue) -> GameState {
    let mut next = state.clone();
    if state.phase() != Phase::Rolling {
        return next;
    }

    let acting = state.current_player();
    let eligible = eligible_pieces(state.acting_player(), die);

    next.set_die_value(die);
    next.set_rolling(false);

    if !eligible.is_empty() {
        log::debug!("{} rolled {}: {} piece(s) can move", acting, die, eligible.len());
        next.set_eligible(eligible);
        next.set_phase(Phase::Moving);
        return next;
    }

    next.clear_eligible();
    next.set_phase(Phase::Waiting);
    if die.is_six() {
        log::debug!("{} rolled 6 with no move and rolls again", acting);
    } else {
        log::debug!("{} rolled {} with no move; turn passes", acting, die);
        next.set_current_player(acting.next());
    }
    next
}

/// Roll in one step: `start_roll` followed by `finish_roll`.
///
/// Returns an unchanged copy when rolling is not allowed.
#[must_use]
pub fn roll(state: &GameState, die: DieValue) -> GameState {
    if !can_roll(state) {
        return state.clone();
    }
    finish_roll(&start_roll(state), die)
}
