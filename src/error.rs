//! Error types.
//!
//! Engine transitions never fail: an invalid request returns the input state
//! unchanged. `LudoError` covers the two places where a typed rejection is
//! useful instead:
//! - Constructing domain values from raw input (die values, player indices,
//!   piece identifiers).
//! - The `LudoGame` session, which reports why an action was refused.

use thiserror::Error;

use crate::core::{Location, Phase, PieceId};

/// Errors raised at the boundary of the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LudoError {
    /// Die value outside 1..=6.
    #[error("Invalid die value: {0} (expected 1-6)")]
    InvalidDieValue(u8),

    /// Player index outside 0..=3.
    #[error("Invalid player index: {0} (expected 0-3)")]
    InvalidPlayer(u8),

    /// Piece index outside 0..=3.
    #[error("Invalid piece index: {0} (expected 0-3)")]
    InvalidPieceIndex(u8),

    /// Piece identifier text that is not of the form `<player>-<index>`.
    #[error("Malformed piece id: {0:?}")]
    MalformedPieceId(String),

    /// A track cell past the end of the loop, or a lane cell outside the
    /// piece owner's lane.
    #[error("Piece {piece} cannot stand at {location:?}")]
    InvalidLocation { piece: PieceId, location: Location },

    /// Scripted dice built from an empty list of values.
    #[error("Scripted dice need at least one value")]
    EmptyDiceScript,

    /// A roll was requested outside the waiting phase.
    #[error("Cannot roll during the {0} phase")]
    RollNotAllowed(Phase),

    /// The game already has a winner.
    #[error("Game is finished")]
    GameFinished,

    /// The piece cannot be moved with the current roll.
    #[error("Piece {0} is not eligible to move")]
    PieceNotEligible(PieceId),
}

/// Result type for fallible engine-boundary operations.
pub type LudoResult<T> = Result<T, LudoError>;
