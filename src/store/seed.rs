//! Demo data for a fresh store

use crate::error::StoreError;
use crate::layout::{NewRoom, Room, RoomStatus, RoomType};

use super::RoomRepository;

/// Owner id the demo rooms belong to
pub const DEMO_OWNER_ID: &str = "demo-user-id";

const DEMO_ROOM_COUNT: usize = 15;
const DEMO_COLUMNS: usize = 5;

/// Fifteen second-floor rooms laid out five per row
pub fn demo_rooms(owner_id: &str) -> Vec<NewRoom> {
    (0..DEMO_ROOM_COUNT)
        .map(|i| {
            let status = match i {
                0 => RoomStatus::Occupied,
                1 => RoomStatus::LeavingSoon,
                _ => RoomStatus::Vacant,
            };
            let room_type = if i % 3 == 0 {
                RoomType::EnSuite
            } else {
                RoomType::Window
            };
            let x = (i % DEMO_COLUMNS) as f64 * 220.0 + 20.0;
            let y = (i / DEMO_COLUMNS) as f64 * 140.0 + 20.0;
            NewRoom::new(owner_id, format!("{}", 201 + i), 2)
                .with_status(status)
                .with_type(room_type)
                .with_base_price(350_000 + 10_000 * i as u64)
                .with_position(x, y)
        })
        .collect()
}

/// Insert the demo rooms if the owner has none yet.
///
/// Returns the created rooms; empty when the owner already had rooms.
pub fn seed_demo<R: RoomRepository>(
    store: &mut R,
    owner_id: &str,
) -> Result<Vec<Room>, StoreError> {
    if !store.get_all_for_owner(owner_id)?.is_empty() {
        tracing::debug!("Owner {} already has rooms, skipping seed", owner_id);
        return Ok(Vec::new());
    }
    let created = demo_rooms(owner_id)
        .into_iter()
        .map(|room| store.create(room))
        .collect::<Result<Vec<_>, _>>()?;
    tracing::info!("Seeded {} demo rooms for {}", created.len(), owner_id);
    Ok(created)
}
