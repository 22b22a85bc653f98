//! Move legality.
//!
//! A piece may move when:
//! - It is in the yard and the die shows 6.
//! - It is on the track or in its lane, and `position + die` either lands
//!   inside its home lane (goal included) or stays below the end of the
//!   track.
//!
//! A piece in the goal never moves.

use im::OrdSet;

use crate::board::{HomeLane, TRACK_LEN};
use crate::core::{DieValue, Location, Piece, PieceId, Player};

/// Can `piece` move with `die`?
#[must_use]
pub fn is_move_legal(piece: &Piece, die: DieValue) -> bool {
    match piece.location() {
        Location::Goal => false,
        Location::Yard => die.is_six(),
        Location::Track(cell) | Location::Lane(cell) => {
            let target = cell + die.get();
            if HomeLane::of(piece.owner()).contains(target) {
                return true;
            }
            target < TRACK_LEN
        }
    }
}

/// The player's pieces that can move with `die`.
///
/// Empty when nothing can move.
#[must_use]
pub fn eligible_pieces(player: &Player, die: DieValue) -> OrdSet<PieceId> {
    player
        .pieces()
        .iter()
        .filter(|piece| is_move_legal(piece, die))
        .map(Piece::id)
        .collect()
}
