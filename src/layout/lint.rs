//! Lint engine for detecting placement defects in a stored room set.
//!
//! Gestures can only commit legal placements, but rooms written by older
//! versions, by hand, or through `update` directly can still break the
//! canvas invariants. These checks report such rooms without changing them.

use std::fmt;

use super::config::CanvasConfig;
use super::engine::group_by_floor;
use super::types::Room;

/// A lint warning about a placement defect
#[derive(Debug)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
}

/// Category of lint defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    Bounds,
    Overlap,
    Size,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::Bounds => write!(f, "bounds"),
            LintCategory::Overlap => write!(f, "overlap"),
            LintCategory::Size => write!(f, "size"),
        }
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.message)
    }
}

/// Run all lint checks on a room set.
pub fn check(rooms: &[Room], config: &CanvasConfig) -> Vec<LintWarning> {
    let mut warnings = Vec::new();
    check_sizes(rooms, config, &mut warnings);
    check_bounds(rooms, config, &mut warnings);
    check_overlaps(rooms, &mut warnings);
    warnings
}

fn display_name(room: &Room) -> String {
    format!("\"{}\"", room.number)
}

// ── Size ──────────────────────────────────────────────────────────

fn check_sizes(rooms: &[Room], config: &CanvasConfig, warnings: &mut Vec<LintWarning>) {
    let (min_w, min_h) = config.min_room_size;
    for room in rooms {
        if room.width < min_w || room.height < min_h {
            warnings.push(LintWarning {
                category: LintCategory::Size,
                message: format!(
                    "room {} is {:.0}x{:.0}px, below the {:.0}x{:.0}px minimum",
                    display_name(room),
                    room.width,
                    room.height,
                    min_w,
                    min_h
                ),
            });
        }
    }
}

// ── Bounds ────────────────────────────────────────────────────────

fn check_bounds(rooms: &[Room], config: &CanvasConfig, warnings: &mut Vec<LintWarning>) {
    for room in rooms {
        if !room
            .bounds()
            .fits_within(config.canvas_width, config.floor_height)
        {
            warnings.push(LintWarning {
                category: LintCategory::Bounds,
                message: format!(
                    "room {} at ({:.0}, {:.0}) size {:.0}x{:.0}px leaves the {:.0}x{:.0}px floor canvas",
                    display_name(room),
                    room.x,
                    room.y,
                    room.width,
                    room.height,
                    config.canvas_width,
                    config.floor_height
                ),
            });
        }
    }
}

// ── Overlap ───────────────────────────────────────────────────────

fn check_overlaps(rooms: &[Room], warnings: &mut Vec<LintWarning>) {
    for (floor, peers) in group_by_floor(rooms) {
        for i in 0..peers.len() {
            for j in (i + 1)..peers.len() {
                let a = peers[i];
                let b = peers[j];
                if let Some((w, h)) = a.bounds().overlap(&b.bounds()) {
                    warnings.push(LintWarning {
                        category: LintCategory::Overlap,
                        message: format!(
                            "rooms {} and {} overlap by {:.0}x{:.0}px on floor {}",
                            display_name(a),
                            display_name(b),
                            w,
                            h,
                            floor
                        ),
                    });
                }
            }
        }
    }
}
