//! Room persistence
//!
//! The layout engine never touches storage; hosts hand it plain [`Room`]
//! records read through a [`RoomRepository`] and write accepted commits back
//! through the same trait.

pub mod json;
pub mod memory;
pub mod seed;

pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use seed::{demo_rooms, seed_demo, DEMO_OWNER_ID};

use crate::error::StoreError;
use crate::layout::{CanvasConfig, NewRoom, Room, RoomId};

/// Storage contract for room records.
///
/// `update` is an upsert: a room with an unknown id is inserted.
pub trait RoomRepository {
    /// All rooms belonging to an owner, in storage order
    fn get_all_for_owner(&self, owner_id: &str) -> Result<Vec<Room>, StoreError>;

    /// A single room by id
    fn get(&self, id: &RoomId) -> Result<Option<Room>, StoreError>;

    /// Insert a new room and return it with its assigned id
    fn create(&mut self, new_room: NewRoom) -> Result<Room, StoreError>;

    /// Replace the room with the same id, or insert it if absent
    fn update(&mut self, room: &Room) -> Result<(), StoreError>;

    /// Upsert several rooms in one write
    fn batch_update(&mut self, rooms: &[Room]) -> Result<(), StoreError>;

    /// Remove a room; returns whether it existed
    fn delete(&mut self, id: &RoomId) -> Result<bool, StoreError>;
}

const ID_PREFIX: &str = "room-";

/// Next free `room-<n>` id, one past the highest numeric suffix in use
pub(crate) fn next_room_id(existing: &[Room]) -> RoomId {
    let highest = existing
        .iter()
        .filter_map(|r| r.id.as_str().strip_prefix(ID_PREFIX))
        .filter_map(|n| n.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    RoomId::new(format!("{}{}", ID_PREFIX, highest + 1))
}

/// Build a stored room from a creation payload, filling in default placement
pub(crate) fn materialize(id: RoomId, new_room: NewRoom, config: &CanvasConfig) -> Room {
    let (x, y) = new_room.position.unwrap_or(config.default_room_position);
    let (width, height) = new_room.size.unwrap_or(config.default_room_size);
    Room {
        id,
        owner_id: new_room.owner_id,
        number: new_room.number,
        floor: new_room.floor,
        room_type: new_room.room_type,
        status: new_room.status,
        base_price: new_room.base_price,
        x,
        y,
        width,
        height,
    }
}

/// Upsert `room` into `rooms` in place
pub(crate) fn upsert(rooms: &mut Vec<Room>, room: &Room) {
    match rooms.iter_mut().find(|r| r.id == room.id) {
        Some(slot) => *slot = room.clone(),
        None => rooms.push(room.clone()),
    }
}
