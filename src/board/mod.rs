//! Fixed board data.
//!
//! The board never changes: 52 shared track cells in a loop, eight safe
//! cells, one entry cell per player and a five-cell home lane per player
//! whose last cell is the goal slot. Everything here is indexed by
//! `PlayerId` through fixed arrays.
//!
//! | Player | Entry cell | Home lane | Goal |
//! |--------|-----------:|-----------|-----:|
//! | 0      | 1          | 51-55     | 55   |
//! | 1      | 14         | 56-60     | 60   |
//! | 2      | 27         | 61-65     | 65   |
//! | 3      | 40         | 66-70     | 70   |

mod layout;

pub use layout::{board_layout, BoardCell, CellKind, Point};

use serde::{Deserialize, Serialize};

use crate::core::piece::Location;
use crate::core::player::{PlayerId, PLAYER_COUNT};

/// Cells on the shared loop.
pub const TRACK_LEN: u8 = 52;

/// Cells in each home lane, including the goal slot.
pub const LANE_LEN: u8 = 5;

/// Track cells on which a resident piece cannot be captured.
pub const SAFE_CELLS: [u8; 8] = [1, 9, 14, 22, 27, 35, 40, 48];

/// The track cell each player's pieces enter on.
pub const ENTRY_CELLS: [u8; PLAYER_COUNT] = [1, 14, 27, 40];

/// First home-lane cell of each player.
pub const LANE_STARTS: [u8; PLAYER_COUNT] = [51, 56, 61, 66];

/// Is this raw position a safe cell?
///
/// Takes the raw position so lane cells and the yard (`-1`) answer `false`.
#[must_use]
pub fn is_safe(position: i16) -> bool {
    SAFE_CELLS.iter().any(|&cell| i16::from(cell) == position)
}

/// The entry cell for a player's pieces.
#[must_use]
pub fn entry_cell(player: PlayerId) -> u8 {
    ENTRY_CELLS[player.index()]
}

/// A player's home lane: five consecutive cell numbers ending in the goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HomeLane {
    start: u8,
}

impl HomeLane {
    /// The home lane belonging to `player`.
    #[must_use]
    pub fn of(player: PlayerId) -> Self {
        Self {
            start: LANE_STARTS[player.index()],
        }
    }

    /// First lane cell.
    #[must_use]
    pub fn start(self) -> u8 {
        self.start
    }

    /// The goal slot, the lane's last cell.
    #[must_use]
    pub fn goal(self) -> u8 {
        self.start + LANE_LEN - 1
    }

    /// Does `cell` fall inside this lane (goal included)?
    #[must_use]
    pub fn contains(self, cell: u8) -> bool {
        (self.start..=self.goal()).contains(&cell)
    }

    /// The lane cell at `offset` from the start, if the lane is that long.
    #[must_use]
    pub fn cell(self, offset: u8) -> Option<u8> {
        (offset < LANE_LEN).then(|| self.start + offset)
    }

    /// Location of a piece standing on `cell` of this lane.
    ///
    /// The goal slot maps to `Location::Goal`.
    #[must_use]
    pub fn locate(self, cell: u8) -> Location {
        if cell == self.goal() {
            Location::Goal
        } else {
            Location::Lane(cell)
        }
    }

    /// Iterate over the lane's cell numbers in order.
    pub fn cells(self) -> impl Iterator<Item = u8> {
        self.start..=self.goal()
    }
}
