//! Layout engine for the floor-plan canvas
//!
//! This module groups rooms by floor, computes their display positions in
//! the stacked multi-floor view, and validates proposed moves and resizes.

pub mod config;
pub mod engine;
pub mod error;
pub mod lint;
pub mod types;

pub use config::CanvasConfig;
pub use engine::{
    available_floors, check_collision, find_collision, group_and_offset, group_by_floor,
    Collision, Proposal,
};
pub use error::LayoutError;
pub use types::*;

/// Resolve a room by id or by room number.
///
/// Ids take precedence over numbers. Unknown references carry up to three
/// near matches among the known numbers.
pub fn find_room<'a>(rooms: &'a [Room], reference: &str) -> Result<&'a Room, LayoutError> {
    if let Some(room) = rooms.iter().find(|r| r.id.as_str() == reference) {
        return Ok(room);
    }
    if let Some(room) = rooms.iter().find(|r| r.number == reference) {
        return Ok(room);
    }
    let numbers: Vec<&str> = rooms.iter().map(|r| r.number.as_str()).collect();
    Err(LayoutError::unknown_room(
        reference,
        find_similar(&numbers, reference, 2),
    ))
}

/// Compute Levenshtein edit distance between two strings
fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] {
                0
            } else {
                1
            };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Find similar room numbers within a maximum edit distance
fn find_similar(known: &[&str], target: &str, max_distance: usize) -> Vec<String> {
    let mut candidates: Vec<(&str, usize)> = known
        .iter()
        .filter_map(|name| {
            let dist = levenshtein_distance(name, target);
            if dist <= max_distance && dist > 0 {
                Some((*name, dist))
            } else {
                None
            }
        })
        .collect();

    candidates.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
    candidates.dedup_by(|a, b| a.0 == b.0);
    candidates
        .into_iter()
        .map(|(name, _)| name.to_string())
        .take(3)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: &str, number: &str) -> Room {
        Room {
            id: RoomId::new(id),
            owner_id: "owner".to_string(),
            number: number.to_string(),
            floor: 2,
            room_type: RoomType::Window,
            status: RoomStatus::Vacant,
            base_price: 0,
            x: 0.0,
            y: 0.0,
            width: 200.0,
            height: 120.0,
        }
    }

    #[test]
    fn test_levenshtein_same() {
        assert_eq!(levenshtein_distance("201", "201"), 0);
    }

    #[test]
    fn test_levenshtein_one_off() {
        assert_eq!(levenshtein_distance("201", "21"), 1);
        assert_eq!(levenshtein_distance("201", "202"), 1);
    }

    #[test]
    fn test_levenshtein_different() {
        assert_eq!(levenshtein_distance("cat", "dog"), 3);
    }

    #[test]
    fn test_find_room_by_id_or_number() {
        let rooms = vec![room("room-1", "201"), room("room-2", "202")];
        assert_eq!(find_room(&rooms, "room-2").map(|r| r.number.as_str()).ok(), Some("202"));
        assert_eq!(find_room(&rooms, "201").map(|r| r.id.as_str()).ok(), Some("room-1"));
    }

    #[test]
    fn test_find_room_suggests_close_numbers() {
        let rooms = vec![room("room-1", "201"), room("room-2", "202"), room("room-3", "315")];
        let err = find_room(&rooms, "203").unwrap_err();
        assert_eq!(
            err.suggestions(),
            Some(&["201".to_string(), "202".to_string()][..])
        );
    }
}
