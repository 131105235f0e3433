//! In-memory room repository

use crate::error::StoreError;
use crate::layout::{CanvasConfig, NewRoom, Room, RoomId};

use super::{materialize, next_room_id, upsert, RoomRepository};

/// Room repository backed by a `Vec`
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    rooms: Vec<Room>,
    config: CanvasConfig,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `rooms`
    pub fn with_rooms(rooms: Vec<Room>) -> Self {
        Self {
            rooms,
            config: CanvasConfig::default(),
        }
    }

    /// Use `config` for the default placement of created rooms
    pub fn with_config(mut self, config: CanvasConfig) -> Self {
        self.config = config;
        self
    }

    /// Every stored room regardless of owner
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }
}

impl RoomRepository for MemoryStore {
    fn get_all_for_owner(&self, owner_id: &str) -> Result<Vec<Room>, StoreError> {
        Ok(self
            .rooms
            .iter()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect())
    }

    fn get(&self, id: &RoomId) -> Result<Option<Room>, StoreError> {
        Ok(self.rooms.iter().find(|r| &r.id == id).cloned())
    }

    fn create(&mut self, new_room: NewRoom) -> Result<Room, StoreError> {
        let room = materialize(next_room_id(&self.rooms), new_room, &self.config);
        self.rooms.push(room.clone());
        Ok(room)
    }

    fn update(&mut self, room: &Room) -> Result<(), StoreError> {
        upsert(&mut self.rooms, room);
        Ok(())
    }

    fn batch_update(&mut self, rooms: &[Room]) -> Result<(), StoreError> {
        for room in rooms {
            upsert(&mut self.rooms, room);
        }
        Ok(())
    }

    fn delete(&mut self, id: &RoomId) -> Result<bool, StoreError> {
        let before = self.rooms.len();
        self.rooms.retain(|r| &r.id != id);
        Ok(self.rooms.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assigns_sequential_ids() {
        let mut store = MemoryStore::new();
        let a = store.create(NewRoom::new("owner", "201", 2)).unwrap();
        let b = store.create(NewRoom::new("owner", "202", 2)).unwrap();
        assert_eq!(a.id, RoomId::new("room-1"));
        assert_eq!(b.id, RoomId::new("room-2"));
    }

    #[test]
    fn test_get_all_filters_by_owner() {
        let mut store = MemoryStore::new();
        store.create(NewRoom::new("alice", "201", 2)).unwrap();
        store.create(NewRoom::new("bob", "202", 2)).unwrap();
        let rooms = store.get_all_for_owner("alice").unwrap();
        assert_eq!(rooms.len(), 1);
        assert_eq!(rooms[0].number, "201");
    }

    #[test]
    fn test_update_is_upsert() {
        let mut store = MemoryStore::new();
        let mut room = store.create(NewRoom::new("owner", "201", 2)).unwrap();
        room.x = 640.0;
        store.update(&room).unwrap();
        assert_eq!(store.get(&room.id).unwrap().map(|r| r.x), Some(640.0));

        let mut stranger = room.clone();
        stranger.id = RoomId::new("imported-1");
        store.update(&stranger).unwrap();
        assert_eq!(store.rooms().len(), 2);
    }

    #[test]
    fn test_delete_reports_existence() {
        let mut store = MemoryStore::new();
        let room = store.create(NewRoom::new("owner", "201", 2)).unwrap();
        assert!(store.delete(&room.id).unwrap());
        assert!(!store.delete(&room.id).unwrap());
        assert!(store.get(&room.id).unwrap().is_none());
    }

    #[test]
    fn test_created_room_uses_configured_defaults() {
        let config = CanvasConfig::new().with_default_room_size(150.0, 90.0);
        let mut store = MemoryStore::new().with_config(config);
        let room = store.create(NewRoom::new("owner", "201", 2)).unwrap();
        assert_eq!((room.width, room.height), (150.0, 90.0));
    }
}
