//! Pointer gesture state for a single room card
//!
//! ```text
//! Idle -> Pressed -> Dragging -> Idle
//!            \-----------------> Idle   (release below threshold: click)
//! Idle -> Resizing -> Idle              (corner handle, edit mode only)
//! ```
//!
//! The state carries everything a release needs (press origin, start size),
//! so the final candidate is computed from the release event itself rather
//! than from whatever preview was last rendered.

use crate::layout::{Point, Proposal, Room};

/// Lifecycle state of one room's pointer gesture
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    /// Pointer is down but has not travelled past the activation distance
    Pressed { origin: Point, current: Point },
    /// Pointer travelled past the activation distance in edit mode
    Dragging { origin: Point, current: Point },
    /// Corner handle is held
    Resizing {
        origin: Point,
        current: Point,
        start_width: f64,
        start_height: f64,
    },
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    /// Same state with the latest pointer position recorded
    pub(crate) fn with_current(self, position: Point) -> Self {
        match self {
            GestureState::Idle => GestureState::Idle,
            GestureState::Pressed { origin, .. } => GestureState::Pressed {
                origin,
                current: position,
            },
            GestureState::Dragging { origin, .. } => GestureState::Dragging {
                origin,
                current: position,
            },
            GestureState::Resizing {
                origin,
                start_width,
                start_height,
                ..
            } => GestureState::Resizing {
                origin,
                current: position,
                start_width,
                start_height,
            },
        }
    }
}

/// True once the pointer has moved more than `threshold` away from `origin`
pub fn crossed_threshold(origin: Point, position: Point, threshold: f64) -> bool {
    origin.distance_to(position) > threshold
}

/// Candidate position for a drag: committed position plus cumulative delta
pub fn drag_candidate(room: &Room, origin: Point, position: Point) -> Proposal {
    let delta = position.offset_from(origin);
    Proposal::at(room.x + delta.x, room.y + delta.y)
}

/// Candidate size for a resize: start size plus delta, clamped to `min_size`
pub fn resize_candidate(
    start_size: (f64, f64),
    origin: Point,
    position: Point,
    min_size: (f64, f64),
) -> (f64, f64) {
    let delta = position.offset_from(origin);
    (
        (start_size.0 + delta.x).max(min_size.0),
        (start_size.1 + delta.y).max(min_size.1),
    )
}
