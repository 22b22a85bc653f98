//! Pieces and where they stand.
//!
//! A piece's whereabouts are a single `Location`, so it can never be in the
//! yard, on the board and in the goal at once. The flag-style queries
//! (`is_in_home`, `is_in_goal`, `is_active`) and the raw `position` are all
//! derived from it.
//!
//! ## Position numbering
//!
//! - `-1`: home yard
//! - `0..=51`: shared track cell
//! - `51..=70`: home-lane cells, five per player (see `board::HomeLane`)
//!
//! Player 0's first lane cell and track cell 51 share the number 51. Capture
//! compares raw positions, so the two collide.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::player::PlayerId;
use crate::board::{HomeLane, TRACK_LEN};
use crate::error::LudoError;

/// Pieces owned by each player.
pub const PIECES_PER_PLAYER: usize = 4;

/// Raw position of a piece in the yard.
pub const YARD_POSITION: i16 = -1;

/// Piece identifier: owning player plus index within that player.
///
/// Text form is `"<player>-<index>"`:
///
/// ```
/// use ludo_engine::core::{PieceId, PlayerId};
///
/// let id: PieceId = "2-3".parse().unwrap();
/// assert_eq!(id, PieceId::new(PlayerId::new(2), 3));
/// assert_eq!(id.to_string(), "2-3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PieceId {
    player: PlayerId,
    index: u8,
}

impl PieceId {
    /// Create a piece ID.
    ///
    /// Panics if `index >= 4`. Use `PieceId::try_new` for untrusted input.
    #[must_use]
    pub const fn new(player: PlayerId, index: u8) -> Self {
        assert!((index as usize) < PIECES_PER_PLAYER, "Piece index must be 0-3");
        Self { player, index }
    }

    /// Create a piece ID, rejecting an out-of-range index.
    pub fn try_new(player: PlayerId, index: u8) -> Result<Self, LudoError> {
        if (index as usize) < PIECES_PER_PLAYER {
            Ok(Self { player, index })
        } else {
            Err(LudoError::InvalidPieceIndex(index))
        }
    }

    /// Owning player.
    #[must_use]
    pub const fn player(self) -> PlayerId {
        self.player
    }

    /// Index within the owning player (0-3).
    #[must_use]
    pub const fn index(self) -> u8 {
        self.index
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.player.index(), self.index)
    }
}

impl FromStr for PieceId {
    type Err = LudoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || LudoError::MalformedPieceId(s.to_string());

        let (player, index) = s.split_once('-').ok_or_else(malformed)?;
        let player: u8 = player.parse().map_err(|_| malformed())?;
        let index: u8 = index.parse().map_err(|_| malformed())?;

        Self::try_new(PlayerId::try_from(player)?, index)
    }
}

impl TryFrom<String> for PieceId {
    type Error = LudoError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<PieceId> for String {
    fn from(id: PieceId) -> Self {
        id.to_string()
    }
}

/// Where a piece stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    /// Waiting in the home yard.
    Yard,
    /// On the shared track, cell `0..52`.
    Track(u8),
    /// In the owner's home lane before the goal slot (absolute cell number).
    Lane(u8),
    /// In the goal slot. Retired from play.
    Goal,
}

impl Location {
    /// Can a piece owned by `owner` stand here?
    ///
    /// Track cells must be on the loop; lane cells must be in the owner's
    /// lane and short of the goal slot, which is `Goal`.
    #[must_use]
    pub fn is_valid_for(self, owner: PlayerId) -> bool {
        match self {
            Location::Yard | Location::Goal => true,
            Location::Track(cell) => cell < TRACK_LEN,
            Location::Lane(cell) => {
                let lane = HomeLane::of(owner);
                lane.contains(cell) && cell != lane.goal()
            }
        }
    }
}

/// A single piece.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPiece")]
pub struct Piece {
    id: PieceId,
    location: Location,
}

/// Unchecked wire form of `Piece`.
#[derive(Deserialize)]
struct RawPiece {
    id: PieceId,
    location: Location,
}

impl TryFrom<RawPiece> for Piece {
    type Error = LudoError;

    fn try_from(raw: RawPiece) -> Result<Self, Self::Error> {
        let mut piece = Piece::new(raw.id);
        piece.try_set_location(raw.location)?;
        Ok(piece)
    }
}

impl Piece {
    /// Create a piece in its yard.
    #[must_use]
    pub fn new(id: PieceId) -> Self {
        Self {
            id,
            location: Location::Yard,
        }
    }

    #[must_use]
    pub fn id(&self) -> PieceId {
        self.id
    }

    /// Owning player.
    #[must_use]
    pub fn owner(&self) -> PlayerId {
        self.id.player()
    }

    #[must_use]
    pub fn location(&self) -> Location {
        self.location
    }

    /// Raw position number: `-1` in the yard, otherwise the track or lane cell.
    #[must_use]
    pub fn position(&self) -> i16 {
        match self.location {
            Location::Yard => YARD_POSITION,
            Location::Track(cell) | Location::Lane(cell) => i16::from(cell),
            Location::Goal => i16::from(HomeLane::of(self.owner()).goal()),
        }
    }

    #[must_use]
    pub fn is_in_home(&self) -> bool {
        self.location == Location::Yard
    }

    #[must_use]
    pub fn is_in_goal(&self) -> bool {
        self.location == Location::Goal
    }

    /// On the board and capturable: neither in the yard nor in the goal.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.location, Location::Track(_) | Location::Lane(_))
    }

    pub(crate) fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    /// `set_location`, rejecting a location this piece's owner cannot use.
    pub(crate) fn try_set_location(&mut self, location: Location) -> Result<(), LudoError> {
        if !location.is_valid_for(self.owner()) {
            return Err(LudoError::InvalidLocation {
                piece: self.id,
                location,
            });
        }
        self.location = location;
        Ok(())
    }
}
