//! Board layout for renderers.
//!
//! Coordinates are cosmetic: a 600x600 canvas with the track on a circle
//! and each home lane as a spoke toward its owner's side. The engine never
//! reads them.

use serde::{Deserialize, Serialize};

use super::{entry_cell, is_safe, HomeLane, TRACK_LEN};
use crate::core::player::PlayerId;

const CENTER: f32 = 300.0;
const TRACK_RADIUS: f32 = 180.0;
const LANE_INNER_RADIUS: f32 = 80.0;
const LANE_STEP: f32 = 15.0;

/// What a board cell is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Normal,
    Safe,
    /// A player's entry cell. Entry cells are also safe.
    Start,
    /// Home-lane cell before the goal.
    Home,
    Goal,
}

/// A point on the rendering canvas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    fn polar(radius: f32, degrees: f32) -> Self {
        let radians = degrees.to_radians();
        Self {
            x: radians.cos() * radius + CENTER,
            y: radians.sin() * radius + CENTER,
        }
    }
}

/// One cell of the layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardCell {
    /// Position number, as reported by `Piece::position`.
    pub id: u8,
    pub kind: CellKind,
    /// Owning player of entry and lane cells.
    pub owner: Option<PlayerId>,
    pub coordinates: Point,
}

/// The full layout: 52 track cells followed by each player's five lane cells.
#[must_use]
pub fn board_layout() -> Vec<BoardCell> {
    let mut cells = Vec::with_capacity(usize::from(TRACK_LEN) + 20);

    for id in 0..TRACK_LEN {
        let owner = PlayerId::all().find(|&p| entry_cell(p) == id);
        let kind = if owner.is_some() {
            CellKind::Start
        } else if is_safe(i16::from(id)) {
            CellKind::Safe
        } else {
            CellKind::Normal
        };
        let angle = f32::from(id) * 360.0 / f32::from(TRACK_LEN) - 90.0;

        cells.push(BoardCell {
            id,
            kind,
            owner,
            coordinates: Point::polar(TRACK_RADIUS, angle),
        });
    }

    for player in PlayerId::all() {
        let lane = HomeLane::of(player);
        let angle = player.index() as f32 * 90.0 - 90.0;

        for (step, id) in lane.cells().enumerate() {
            let kind = if id == lane.goal() {
                CellKind::Goal
            } else {
                CellKind::Home
            };

            cells.push(BoardCell {
                id,
                kind,
                owner: Some(player),
                coordinates: Point::polar(LANE_INNER_RADIUS + step as f32 * LANE_STEP, angle),
            });
        }
    }

    cells
}
