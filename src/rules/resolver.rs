//! Move resolution.
//!
//! `apply_move` turns a chosen eligible piece into the successor state in
//! four steps, all applied to a private copy:
//!
//! 1. **Positioning**: yard pieces enter on their entry cell; others advance
//!    by the die value into their lane, the goal, or along the track.
//! 2. **Capture**: every other active piece on the new position goes back to
//!    its yard, unless the position is a safe cell.
//! 3. **Win check**: four pieces in the goal ends the game.
//! 4. **Turn advancement**: the turn passes unless the die showed 6.

use crate::board::{entry_cell, is_safe, HomeLane, TRACK_LEN};
use crate::core::{DieValue, GameState, Location, Phase, Piece, PieceId};

use super::validator::is_move_legal;

/// Apply a move of `piece_id` using the state's current die value.
///
/// Returns an unchanged copy of `state` when the move is not allowed: the
/// phase is not `Moving`, the piece is not eligible, or it cannot legally
/// move with the die value.
#[must_use]
pub fn apply_move(state: &GameState, piece_id: PieceId) -> GameState {
    let Some(die) = state.die_value() else {
        return state.clone();
    };
    if state.phase() != Phase::Moving || !state.is_eligible(piece_id) {
        return state.clone();
    }
    let piece = state.piece(piece_id);
    if !is_move_legal(piece, die) {
        return state.clone();
    }
    let Some(destination) = destination(piece, die) else {
        return state.clone();
    };

    let mut next = state.clone();

    // 1. Positioning
    next.piece_mut(piece_id).set_location(destination);
    let landed = next.piece(piece_id).position();
    log::debug!("{} moves {} to {}", state.current_player(), piece_id, landed);

    // 2. Capture
    let captured = capture_at(&mut next, piece_id, landed);
    if captured > 0 {
        log::info!("{} captured {} piece(s) at {}", piece_id, captured, landed);
    }

    // 3. Win check
    let acting = next.current_player();
    if next.player(acting).all_in_goal() {
        log::info!("{} wins", acting);
        next.declare_winner(acting);
        next.clear_eligible();
        return next;
    }

    // 4. Turn advancement
    if !die.is_six() {
        next.set_current_player(acting.next());
    }
    next.set_phase(Phase::Waiting);
    next.clear_eligible();
    next
}

/// Where `piece` ends up after moving `die` cells.
///
/// `None` only when an overshoot runs past the end of the home lane, which
/// `is_move_legal` already rules out.
fn destination(piece: &Piece, die: DieValue) -> Option<Location> {
    let lane = HomeLane::of(piece.owner());

    match piece.location() {
        Location::Yard => Some(Location::Track(entry_cell(piece.owner()))),
        Location::Goal => None,
        Location::Track(cell) | Location::Lane(cell) => {
            let target = cell + die.get();
            if lane.contains(target) {
                Some(lane.locate(target))
            } else if target >= TRACK_LEN {
                lane.cell(target - TRACK_LEN).map(|cell| lane.locate(cell))
            } else {
                Some(Location::Track(target % TRACK_LEN))
            }
        }
    }
}

/// Send home every active piece other than `mover` standing on `position`.
///
/// Nothing is captured on a safe cell. Pieces of the mover's own player are
/// not exempt. Returns the number of pieces captured.
fn capture_at(state: &mut GameState, mover: PieceId, position: i16) -> usize {
    if is_safe(position) {
        return 0;
    }

    let mut captured = 0;
    for player in state.players_mut() {
        for piece in player.pieces_mut() {
            if piece.id() != mover && piece.is_active() && piece.position() == position {
                log::debug!("{} sent home from {}", piece.id(), position);
                piece.set_location(Location::Yard);
                captured += 1;
            }
        }
    }
    captured
}
