//! Player identification, per-player storage and the player record.
//!
//! ## PlayerId
//!
//! Type-safe seat index in `0..4`. Ludo is always played with four seats.
//!
//! ## PlayerMap
//!
//! Fixed-size per-player storage backed by an array, indexed by `PlayerId`.
//!
//! ## Player
//!
//! One seat's public record: display data, its four pieces and turn flags.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::piece::{Piece, PieceId, PIECES_PER_PLAYER};
use crate::error::LudoError;

/// Number of seats at the board.
pub const PLAYER_COUNT: usize = 4;

/// Player identifier in `0..4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(u8);

impl PlayerId {
    /// Create a player ID.
    ///
    /// Panics if `id >= 4`. Use `PlayerId::try_from` for untrusted input.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < PLAYER_COUNT, "Player index must be 0-3");
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The player who acts after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % PLAYER_COUNT as u8)
    }

    /// Iterate over all four player IDs in seat order.
    ///
    /// ```
    /// use ludo_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = LudoError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        if (id as usize) < PLAYER_COUNT {
            Ok(Self(id))
        } else {
            Err(LudoError::InvalidPlayer(id))
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use ludo_engine::core::{PlayerId, PlayerMap};
///
/// let mut scores: PlayerMap<u32> = PlayerMap::with_value(0);
/// scores[PlayerId::new(1)] = 3;
/// assert_eq!(scores[PlayerId::new(1)], 3);
/// assert_eq!(scores[PlayerId::new(0)], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; PLAYER_COUNT],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(PlayerId(i as u8))),
        }
    }

    /// Create a map with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate over mutable values in seat order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A seat at the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    color: String,
    pieces: [Piece; PIECES_PER_PLAYER],
    is_active: bool,
    has_won: bool,
}

impl Player {
    /// Create a player with all four pieces in the yard.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            pieces: std::array::from_fn(|i| Piece::new(PieceId::new(id, i as u8))),
            is_active: false,
            has_won: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display color (CSS-style string, opaque to the engine).
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn pieces(&self) -> &[Piece; PIECES_PER_PLAYER] {
        &self.pieces
    }

    /// Get one of this player's pieces by its index within the player.
    #[must_use]
    pub fn piece(&self, index: u8) -> &Piece {
        &self.pieces[index as usize]
    }

    /// Is this the acting player?
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    #[must_use]
    pub fn has_won(&self) -> bool {
        self.has_won
    }

    /// Number of pieces already in the goal slot.
    #[must_use]
    pub fn pieces_in_goal(&self) -> usize {
        self.pieces.iter().filter(|p| p.is_in_goal()).count()
    }

    /// True once every piece has reached the goal slot.
    #[must_use]
    pub fn all_in_goal(&self) -> bool {
        self.pieces.iter().all(Piece::is_in_goal)
    }

    pub(crate) fn piece_mut(&mut self, index: u8) -> &mut Piece {
        &mut self.pieces[index as usize]
    }

    pub(crate) fn pieces_mut(&mut self) -> impl Iterator<Item = &mut Piece> {
        self.pieces.iter_mut()
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    pub(crate) fn mark_won(&mut self) {
        self.has_won = true;
    }
}
