//! JSON file room repository
//!
//! The whole room list lives in one JSON array. Every operation reads the
//! file, applies its change and writes the full array back, so writes are
//! immediately visible to the next read and nothing is buffered.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::layout::{CanvasConfig, NewRoom, Room, RoomId};

use super::{materialize, next_room_id, upsert, RoomRepository};

/// Room repository persisted to a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    config: CanvasConfig,
}

impl JsonFileStore {
    /// Store at `path`; the file is created on first write
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: CanvasConfig::default(),
        }
    }

    /// Use `config` for the default placement of created rooms
    pub fn with_config(mut self, config: CanvasConfig) -> Self {
        self.config = config;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every stored room; a missing file is an empty store
    pub fn load_all(&self) -> Result<Vec<Room>, StoreError> {
        if !self.path.exists() {
            tracing::debug!("No room store at {:?}, starting empty", self.path);
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn save_all(&self, rooms: &[Room]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(rooms)?;
        fs::write(&self.path, json)?;
        tracing::debug!("Saved {} rooms to {:?}", rooms.len(), self.path);
        Ok(())
    }
}

impl RoomRepository for JsonFileStore {
    fn get_all_for_owner(&self, owner_id: &str) -> Result<Vec<Room>, StoreError> {
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|r| r.owner_id == owner_id)
            .collect())
    }

    fn get(&self, id: &RoomId) -> Result<Option<Room>, StoreError> {
        Ok(self.load_all()?.into_iter().find(|r| &r.id == id))
    }

    fn create(&mut self, new_room: NewRoom) -> Result<Room, StoreError> {
        let mut rooms = self.load_all()?;
        let room = materialize(next_room_id(&rooms), new_room, &self.config);
        rooms.push(room.clone());
        self.save_all(&rooms)?;
        tracing::info!("Created room {} ({})", room.number, room.id);
        Ok(room)
    }

    fn update(&mut self, room: &Room) -> Result<(), StoreError> {
        let mut rooms = self.load_all()?;
        upsert(&mut rooms, room);
        self.save_all(&rooms)
    }

    fn batch_update(&mut self, updated: &[Room]) -> Result<(), StoreError> {
        let mut rooms = self.load_all()?;
        for room in updated {
            upsert(&mut rooms, room);
        }
        self.save_all(&rooms)
    }

    fn delete(&mut self, id: &RoomId) -> Result<bool, StoreError> {
        let mut rooms = self.load_all()?;
        let before = rooms.len();
        rooms.retain(|r| &r.id != id);
        if rooms.len() == before {
            return Ok(false);
        }
        self.save_all(&rooms)?;
        tracing::info!("Deleted room {}", id);
        Ok(true)
    }
}
