//! The game-state snapshot.
//!
//! ## GameState
//!
//! Everything a caller needs to render and drive a game:
//! - The four players and their pieces
//! - The acting player
//! - The last die value and the roll-in-progress flag
//! - The phase, the winner and the pieces eligible to move
//!
//! A `GameState` is a value. Engine operations take `&GameState` and return
//! a new one; fields are private so a caller cannot edit a snapshot in place.
//! The eligible set uses `im::OrdSet` so snapshots share structure.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::dice::DieValue;
use super::piece::{Location, Piece, PieceId};
use super::player::{Player, PlayerId, PlayerMap};
use crate::error::LudoResult;

/// Game phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// The acting player may roll.
    #[default]
    Waiting,
    /// A roll is in progress; the die value is not known yet.
    Rolling,
    /// The die is known and at least one piece can move.
    Moving,
    /// A player has won. Terminal.
    Finished,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Waiting => "waiting",
            Phase::Rolling => "rolling",
            Phase::Moving => "moving",
            Phase::Finished => "finished",
        };
        f.write_str(name)
    }
}

/// Complete game snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    players: PlayerMap<Player>,
    current_player: PlayerId,
    die_value: Option<DieValue>,
    is_rolling: bool,
    phase: Phase,
    winner: Option<PlayerId>,
    eligible: OrdSet<PieceId>,
}

impl GameState {
    /// Create the canonical starting snapshot.
    ///
    /// ## Defaults
    ///
    /// - All 16 pieces in their yards
    /// - Player 0 acting
    /// - Phase `Waiting`, no die value, no winner
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let mut players = PlayerMap::new(|id| {
            Player::new(id, config.player_name(id), config.player_color(id))
        });
        let first = PlayerId::new(0);
        players[first].set_active(true);

        Self {
            players,
            current_player: first,
            die_value: None,
            is_rolling: false,
            phase: Phase::Waiting,
            winner: None,
            eligible: OrdSet::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// The acting player's record.
    #[must_use]
    pub fn acting_player(&self) -> &Player {
        &self.players[self.current_player]
    }

    /// The last die value rolled, `None` before the first roll.
    #[must_use]
    pub fn die_value(&self) -> Option<DieValue> {
        self.die_value
    }

    /// The last die value as a raw number, `0` before the first roll.
    #[must_use]
    pub fn die_value_raw(&self) -> u8 {
        self.die_value.map_or(0, DieValue::get)
    }

    #[must_use]
    pub fn is_rolling(&self) -> bool {
        self.is_rolling
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The winner, set only in `Phase::Finished`.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Pieces that may move with the current die value.
    ///
    /// Non-empty only in `Phase::Moving`.
    #[must_use]
    pub fn eligible_pieces(&self) -> &OrdSet<PieceId> {
        &self.eligible
    }

    #[must_use]
    pub fn is_eligible(&self, id: PieceId) -> bool {
        self.eligible.contains(&id)
    }

    #[must_use]
    pub fn piece(&self, id: PieceId) -> &Piece {
        self.players[id.player()].piece(id.index())
    }

    /// Iterate over all 16 pieces in seat order.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.players.values().flat_map(|p| p.pieces().iter())
    }

    // === Scenario constructors ===

    /// A copy of this state with one piece relocated.
    ///
    /// Capture, goal and win bookkeeping are not applied; this places a
    /// piece, it does not move it.
    ///
    /// Panics if the piece's owner cannot stand at `location` (see
    /// `Location::is_valid_for`). Use `try_with_piece_location` for
    /// untrusted input.
    #[must_use]
    pub fn with_piece_location(&self, id: PieceId, location: Location) -> Self {
        assert!(
            location.is_valid_for(id.player()),
            "Location is not valid for this piece"
        );
        let mut next = self.clone();
        next.piece_mut(id).set_location(location);
        next
    }

    /// A copy of this state with one piece relocated, rejecting a track
    /// cell off the loop or a lane cell outside the owner's lane.
    pub fn try_with_piece_location(&self, id: PieceId, location: Location) -> LudoResult<Self> {
        let mut next = self.clone();
        next.piece_mut(id).try_set_location(location)?;
        Ok(next)
    }

    /// A copy of this state with a different acting player.
    ///
    /// Ignored once the game is finished.
    #[must_use]
    pub fn with_current_player(&self, player: PlayerId) -> Self {
        let mut next = self.clone();
        if next.phase != Phase::Finished {
            next.set_current_player(player);
        }
        next
    }

    // === Crate-internal mutation on owned copies ===

    pub(crate) fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        self.players[id.player()].piece_mut(id.index())
    }

    pub(crate) fn players_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.values_mut()
    }

    /// Make `player` the acting player and update every acting flag.
    pub(crate) fn set_current_player(&mut self, player: PlayerId) {
        self.current_player = player;
        for (id, p) in self.players.iter_mut() {
            p.set_active(id == player);
        }
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn set_rolling(&mut self, rolling: bool) {
        self.is_rolling = rolling;
    }

    pub(crate) fn set_die_value(&mut self, value: DieValue) {
        self.die_value = Some(value);
    }

    pub(crate) fn set_eligible(&mut self, eligible: OrdSet<PieceId>) {
        self.eligible = eligible;
    }

    pub(crate) fn clear_eligible(&mut self) {
        self.eligible = OrdSet::new();
    }

    pub(crate) fn declare_winner(&mut self, player: PlayerId) {
        self.players[player].mark_won();
        self.winner = Some(player);
        self.phase = Phase::Finished;
    }
}

/// Create the canonical starting snapshot with default names and colors.
#[must_use]
pub fn create_initial_game_state() -> GameState {
    GameState::new(&GameConfig::default())
}
