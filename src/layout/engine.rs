//! Layout computation engine
//!
//! Pure functions over the current room set:
//!
//! - [`group_and_offset`]: group rooms by floor, rank floors highest-first and
//!   compute each room's display `y` in the stacked multi-floor view
//! - [`check_collision`] / [`find_collision`]: decide whether a proposed move or
//!   resize keeps the room inside its floor's canvas without overlapping a
//!   peer on the same floor
//!
//! Nothing here is cached; every call recomputes from the rooms it is given.

use std::collections::BTreeMap;
use std::fmt;

use super::config::CanvasConfig;
use super::types::*;

/// A candidate placement for a room, in floor-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proposal {
    pub x: f64,
    pub y: f64,
    /// New width; the room's current width when `None`
    pub width: Option<f64>,
    /// New height; the room's current height when `None`
    pub height: Option<f64>,
}

impl Proposal {
    /// Move to `(x, y)` keeping the current size
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            width: None,
            height: None,
        }
    }

    /// Keep the room's position and change its size
    pub fn resize(room: &Room, width: f64, height: f64) -> Self {
        Self::at(room.x, room.y).with_size(width, height)
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Bounding box the room would occupy if the proposal were applied
    pub fn bounds_for(&self, room: &Room) -> BoundingBox {
        BoundingBox::new(
            self.x,
            self.y,
            self.width.unwrap_or(room.width),
            self.height.unwrap_or(room.height),
        )
    }
}

/// Why a proposal was rejected
#[derive(Debug, Clone, PartialEq)]
pub enum Collision {
    /// The proposed box leaves the floor's canvas
    OutOfBounds { bounds: BoundingBox },
    /// The proposed box overlaps a peer on the same floor
    Overlap { with: RoomId },
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collision::OutOfBounds { bounds } => write!(
                f,
                "out of bounds at ({}, {}) size {}x{}",
                bounds.x, bounds.y, bounds.width, bounds.height
            ),
            Collision::Overlap { with } => write!(f, "overlaps room {}", with),
        }
    }
}

/// Group rooms by floor, preserving input order within each floor
pub fn group_by_floor(rooms: &[Room]) -> BTreeMap<i32, Vec<&Room>> {
    let mut groups: BTreeMap<i32, Vec<&Room>> = BTreeMap::new();
    for room in rooms {
        groups.entry(room.floor).or_default().push(room);
    }
    groups
}

/// Distinct floors in ascending order, for a floor picker
pub fn available_floors(rooms: &[Room]) -> Vec<i32> {
    group_by_floor(rooms).into_keys().collect()
}

/// Compute the render-ready floor plan for a view mode.
///
/// In [`ViewMode::All`] floors are stacked highest-first; the floor at rank
/// `r` occupies `[r * band, (r + 1) * band)` and its rooms are shifted down by
/// `r * band + header`. In [`ViewMode::Floor`] only that floor's rooms are
/// returned, in local coordinates.
pub fn group_and_offset(rooms: &[Room], view: ViewMode, config: &CanvasConfig) -> FloorPlan {
    let groups = group_by_floor(rooms);

    let floors: Vec<i32> = match view {
        ViewMode::All => groups.keys().rev().copied().collect(),
        ViewMode::Floor(floor) if groups.contains_key(&floor) => vec![floor],
        ViewMode::Floor(_) => vec![],
    };

    let bands: Vec<FloorBand> = floors
        .iter()
        .enumerate()
        .map(|(rank, &floor)| match view {
            ViewMode::All => FloorBand {
                floor,
                rank,
                top: rank as f64 * config.floor_band_height,
                header_height: config.header_height,
            },
            ViewMode::Floor(_) => FloorBand {
                floor,
                rank,
                top: 0.0,
                header_height: 0.0,
            },
        })
        .collect();

    let mut placed = Vec::new();
    for band in &bands {
        let offset = band.content_top();
        for room in groups.get(&band.floor).into_iter().flatten() {
            placed.push(DisplayRoom {
                room: (*room).clone(),
                display_y: room.y + offset,
            });
        }
    }

    let total_height = match view {
        ViewMode::All => floors.len() as f64 * config.floor_band_height,
        ViewMode::Floor(_) => config.floor_height,
    };

    FloorPlan {
        view,
        floors,
        bands,
        rooms: placed,
        total_height,
    }
}

/// Find the first reason a proposal is illegal.
///
/// `rooms` is the live room set; the subject itself and rooms on other floors
/// are skipped. Bounds are checked before peers.
pub fn find_collision(
    room: &Room,
    rooms: &[Room],
    proposal: &Proposal,
    config: &CanvasConfig,
) -> Option<Collision> {
    let bounds = proposal.bounds_for(room);

    if !bounds.fits_within(config.canvas_width, config.floor_height) {
        return Some(Collision::OutOfBounds { bounds });
    }

    rooms
        .iter()
        .filter(|other| room.is_peer_of(other))
        .find(|peer| bounds.intersects(&peer.bounds()))
        .map(|peer| Collision::Overlap {
            with: peer.id.clone(),
        })
}

/// Check whether a proposal must be rejected.
///
/// Returns `true` when the proposed box leaves the canvas or overlaps another
/// room on the same floor. Touching edges are allowed.
pub fn check_collision(
    room: &Room,
    rooms: &[Room],
    proposal: &Proposal,
    config: &CanvasConfig,
) -> bool {
    find_collision(room, rooms, proposal, config).is_some()
}
