//! Drag/resize controller for the floor-plan canvas
//!
//! Owns the live room list for one owner, a gesture state per room and the
//! repository accepted placements are written to. Pointer handlers return
//! [`Action`]s for the host to render; nothing is persisted until a gesture
//! is released and its final candidate passes the collision check.

use std::collections::HashMap;

use crate::error::StoreError;
use crate::layout::{
    find_collision, group_and_offset, CanvasConfig, Collision, FloorPlan, NewRoom, Point,
    Proposal, Room, RoomId, ViewMode,
};
use crate::store::RoomRepository;

use super::gesture::{crossed_threshold, drag_candidate, resize_candidate, GestureState};

/// Host-facing effect of a pointer event
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A click outside edit mode: open the room's detail view
    Select(RoomId),
    /// A press turned into a drag
    DragStarted(RoomId),
    /// Visual-only translation of a dragged card
    DragPreview { id: RoomId, offset: Point },
    /// Visual-only size of a card being resized
    ResizePreview { id: RoomId, width: f64, height: f64 },
    /// A drag was committed
    Moved { id: RoomId, x: f64, y: f64 },
    /// A resize was committed
    Resized { id: RoomId, width: f64, height: f64 },
    /// The final candidate was rejected; the card snaps back
    Rejected { id: RoomId, collision: Collision },
}

/// Result of a commit request
#[derive(Debug, Clone, PartialEq)]
pub enum CommitOutcome {
    /// The room was persisted with its new placement
    Committed(Room),
    /// The placement is illegal; nothing changed
    Rejected(Collision),
    /// No room with that id is loaded; nothing changed
    Ignored,
}

/// Canvas controller for one owner's rooms
#[derive(Debug)]
pub struct CanvasController<R: RoomRepository> {
    store: R,
    owner_id: String,
    config: CanvasConfig,
    rooms: Vec<Room>,
    edit_mode: bool,
    gestures: HashMap<RoomId, GestureState>,
}

impl<R: RoomRepository> CanvasController<R> {
    /// Load `owner_id`'s rooms from `store`
    pub fn load(store: R, owner_id: impl Into<String>, config: CanvasConfig) -> Result<Self, StoreError> {
        let owner_id = owner_id.into();
        let rooms = store.get_all_for_owner(&owner_id)?;
        tracing::debug!("Loaded {} rooms for {}", rooms.len(), owner_id);
        Ok(Self {
            store,
            owner_id,
            config,
            rooms,
            edit_mode: false,
            gestures: HashMap::new(),
        })
    }

    /// Re-read the room list; gestures on rooms that disappeared are dropped
    pub fn reload(&mut self) -> Result<(), StoreError> {
        self.rooms = self.store.get_all_for_owner(&self.owner_id)?;
        let rooms = &self.rooms;
        self.gestures
            .retain(|id, _| rooms.iter().any(|r| &r.id == id));
        Ok(())
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| &r.id == id)
    }

    pub fn owner_id(&self) -> &str {
        &self.owner_id
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn store(&self) -> &R {
        &self.store
    }

    pub fn into_store(self) -> R {
        self.store
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Toggle layout edit mode. Gestures in flight are dropped uncommitted.
    pub fn set_edit_mode(&mut self, edit_mode: bool) {
        if self.edit_mode != edit_mode {
            self.gestures.clear();
        }
        self.edit_mode = edit_mode;
    }

    /// Render-ready floor plan for the current room list
    pub fn plan(&self, view: ViewMode) -> FloorPlan {
        group_and_offset(&self.rooms, view, &self.config)
    }

    /// Current gesture state of a room
    pub fn gesture(&self, id: &RoomId) -> GestureState {
        self.gestures.get(id).copied().unwrap_or_default()
    }

    /// Pointer pressed on a room card
    pub fn pointer_down(&mut self, id: &RoomId, position: Point) -> Vec<Action> {
        if self.room(id).is_none() || !self.gesture(id).is_idle() {
            return Vec::new();
        }
        self.gestures.insert(
            id.clone(),
            GestureState::Pressed {
                origin: position,
                current: position,
            },
        );
        Vec::new()
    }

    /// Pointer pressed on a room's corner resize handle
    pub fn resize_start(&mut self, id: &RoomId, position: Point) -> Vec<Action> {
        if !self.edit_mode || !self.gesture(id).is_idle() {
            return Vec::new();
        }
        let Some(room) = self.room(id) else {
            return Vec::new();
        };
        let state = GestureState::Resizing {
            origin: position,
            current: position,
            start_width: room.width,
            start_height: room.height,
        };
        self.gestures.insert(id.clone(), state);
        Vec::new()
    }

    /// Pointer moved while a gesture on `id` is active
    pub fn pointer_move(&mut self, id: &RoomId, position: Point) -> Vec<Action> {
        let state = self.gesture(id);
        let mut actions = Vec::new();
        let next = match state {
            GestureState::Idle => return actions,
            GestureState::Pressed { origin, .. }
                if self.edit_mode
                    && crossed_threshold(origin, position, self.config.drag_activation_distance) =>
            {
                tracing::debug!("Drag started on room {}", id);
                actions.push(Action::DragStarted(id.clone()));
                actions.push(Action::DragPreview {
                    id: id.clone(),
                    offset: position.offset_from(origin),
                });
                GestureState::Dragging {
                    origin,
                    current: position,
                }
            }
            GestureState::Pressed { .. } => state.with_current(position),
            GestureState::Dragging { origin, .. } => {
                actions.push(Action::DragPreview {
                    id: id.clone(),
                    offset: position.offset_from(origin),
                });
                state.with_current(position)
            }
            GestureState::Resizing {
                origin,
                start_width,
                start_height,
                ..
            } => {
                let (width, height) = resize_candidate(
                    (start_width, start_height),
                    origin,
                    position,
                    self.config.min_room_size,
                );
                actions.push(Action::ResizePreview {
                    id: id.clone(),
                    width,
                    height,
                });
                state.with_current(position)
            }
        };
        self.gestures.insert(id.clone(), next);
        actions
    }

    /// Pointer released; ends the gesture on `id`.
    ///
    /// A drag or resize is committed if its final candidate passes the
    /// collision check and discarded otherwise. A press that never became a
    /// drag is a click, which selects the room outside edit mode.
    pub fn pointer_up(&mut self, id: &RoomId, position: Point) -> Result<Vec<Action>, StoreError> {
        let state = self.gestures.remove(id).unwrap_or_default();
        let outcome = match state {
            GestureState::Idle => return Ok(Vec::new()),
            GestureState::Pressed { .. } => {
                if self.edit_mode {
                    return Ok(Vec::new());
                }
                return Ok(vec![Action::Select(id.clone())]);
            }
            GestureState::Dragging { origin, .. } => {
                let Some(room) = self.room(id) else {
                    return Ok(Vec::new());
                };
                let proposal = drag_candidate(room, origin, position);
                self.commit(id, proposal)?
            }
            GestureState::Resizing {
                origin,
                start_width,
                start_height,
                ..
            } => {
                let Some(room) = self.room(id) else {
                    return Ok(Vec::new());
                };
                let (width, height) = resize_candidate(
                    (start_width, start_height),
                    origin,
                    position,
                    self.config.min_room_size,
                );
                let proposal = Proposal::resize(room, width, height);
                self.commit(id, proposal)?
            }
        };

        let action = match (outcome, state) {
            (CommitOutcome::Committed(room), GestureState::Resizing { .. }) => Action::Resized {
                id: room.id,
                width: room.width,
                height: room.height,
            },
            (CommitOutcome::Committed(room), _) => Action::Moved {
                id: room.id,
                x: room.x,
                y: room.y,
            },
            (CommitOutcome::Rejected(collision), _) => Action::Rejected {
                id: id.clone(),
                collision,
            },
            (CommitOutcome::Ignored, _) => return Ok(Vec::new()),
        };
        Ok(vec![action])
    }

    /// Move a room to local `(x, y)` if the placement is legal
    pub fn commit_move(&mut self, id: &RoomId, x: f64, y: f64) -> Result<CommitOutcome, StoreError> {
        self.commit(id, Proposal::at(x, y))
    }

    /// Resize a room in place if the new size is legal.
    ///
    /// Sizes below the configured minimum are raised to it first.
    pub fn commit_resize(
        &mut self,
        id: &RoomId,
        width: f64,
        height: f64,
    ) -> Result<CommitOutcome, StoreError> {
        let Some(room) = self.room(id) else {
            return Ok(CommitOutcome::Ignored);
        };
        let (min_w, min_h) = self.config.min_room_size;
        let proposal = Proposal::resize(room, width.max(min_w), height.max(min_h));
        self.commit(id, proposal)
    }

    fn commit(&mut self, id: &RoomId, proposal: Proposal) -> Result<CommitOutcome, StoreError> {
        let Some(index) = self.rooms.iter().position(|r| &r.id == id) else {
            return Ok(CommitOutcome::Ignored);
        };
        let room = &self.rooms[index];
        if let Some(collision) = find_collision(room, &self.rooms, &proposal, &self.config) {
            tracing::debug!("Rejected placement of room {}: {}", room.number, collision);
            return Ok(CommitOutcome::Rejected(collision));
        }

        let bounds = proposal.bounds_for(room);
        let updated = Room {
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: bounds.height,
            ..room.clone()
        };
        // Persist before touching the live list so a failed write changes nothing.
        self.store.update(&updated)?;
        tracing::info!(
            "Committed room {} at ({}, {}) size {}x{}",
            updated.number,
            updated.x,
            updated.y,
            updated.width,
            updated.height
        );
        self.rooms[index] = updated.clone();
        Ok(CommitOutcome::Committed(updated))
    }

    /// Create a room at the default position and size on `floor`
    pub fn add_room(&mut self, number: impl Into<String>, floor: i32) -> Result<Room, StoreError> {
        self.create_room(NewRoom::new(self.owner_id.clone(), number, floor))
    }

    /// Create a room from a full payload and refresh the room list
    pub fn create_room(&mut self, new_room: NewRoom) -> Result<Room, StoreError> {
        let room = self.store.create(new_room)?;
        self.reload()?;
        Ok(room)
    }

    /// Delete a room and refresh the room list
    pub fn remove_room(&mut self, id: &RoomId) -> Result<bool, StoreError> {
        let removed = self.store.delete(id)?;
        self.reload()?;
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn controller() -> (CanvasController<MemoryStore>, RoomId, RoomId) {
        let mut store = MemoryStore::new();
        let a = store
            .create(NewRoom::new("owner", "201", 2).with_position(0.0, 0.0))
            .unwrap();
        let b = store
            .create(NewRoom::new("owner", "202", 2).with_position(600.0, 0.0))
            .unwrap();
        let ctl = CanvasController::load(store, "owner", CanvasConfig::default()).unwrap();
        (ctl, a.id, b.id)
    }

    #[test]
    fn test_click_outside_edit_mode_selects() {
        let (mut ctl, a, _) = controller();
        ctl.pointer_down(&a, Point::new(50.0, 50.0));
        let actions = ctl.pointer_up(&a, Point::new(51.0, 50.0)).unwrap();
        assert_eq!(actions, vec![Action::Select(a.clone())]);
        assert!(ctl.gesture(&a).is_idle());
    }

    #[test]
    fn test_no_drag_outside_edit_mode() {
        let (mut ctl, a, _) = controller();
        ctl.pointer_down(&a, Point::new(50.0, 50.0));
        assert!(ctl.pointer_move(&a, Point::new(300.0, 300.0)).is_empty());
        assert!(matches!(ctl.gesture(&a), GestureState::Pressed { .. }));
        let actions = ctl.pointer_up(&a, Point::new(300.0, 300.0)).unwrap();
        assert_eq!(actions, vec![Action::Select(a.clone())]);
        assert_eq!(ctl.room(&a).map(|r| (r.x, r.y)), Some((0.0, 0.0)));
    }

    #[test]
    fn test_click_in_edit_mode_does_nothing() {
        let (mut ctl, a, _) = controller();
        ctl.set_edit_mode(true);
        ctl.pointer_down(&a, Point::new(50.0, 50.0));
        ctl.pointer_move(&a, Point::new(53.0, 52.0));
        assert!(matches!(ctl.gesture(&a), GestureState::Pressed { .. }));
        assert!(ctl.pointer_up(&a, Point::new(53.0, 52.0)).unwrap().is_empty());
    }

    #[test]
    fn test_move_of_exactly_activation_distance_is_a_click() {
        let (mut ctl, a, _) = controller();
        ctl.set_edit_mode(true);
        ctl.pointer_down(&a, Point::new(50.0, 50.0));
        assert!(ctl.pointer_move(&a, Point::new(53.0, 54.0)).is_empty());
        assert!(matches!(ctl.gesture(&a), GestureState::Pressed { .. }));
        assert!(ctl.pointer_up(&a, Point::new(53.0, 54.0)).unwrap().is_empty());
        assert_eq!(ctl.room(&a).map(|r| (r.x, r.y)), Some((0.0, 0.0)));
    }

    #[test]
    fn test_resize_requires_edit_mode() {
        let (mut ctl, a, _) = controller();
        ctl.resize_start(&a, Point::new(200.0, 120.0));
        assert!(ctl.gesture(&a).is_idle());
    }

    #[test]
    fn test_leaving_edit_mode_drops_gesture() {
        let (mut ctl, a, _) = controller();
        ctl.set_edit_mode(true);
        ctl.pointer_down(&a, Point::new(50.0, 50.0));
        ctl.pointer_move(&a, Point::new(150.0, 50.0));
        ctl.set_edit_mode(false);
        assert!(ctl.gesture(&a).is_idle());
        assert!(ctl.pointer_up(&a, Point::new(150.0, 50.0)).unwrap().is_empty());
        assert_eq!(ctl.room(&a).map(|r| r.x), Some(0.0));
    }

    #[test]
    fn test_commit_unknown_room_is_ignored() {
        let (mut ctl, _, _) = controller();
        let outcome = ctl.commit_move(&RoomId::new("nope"), 10.0, 10.0).unwrap();
        assert_eq!(outcome, CommitOutcome::Ignored);
    }

    #[test]
    fn test_commit_resize_raises_to_minimum() {
        let (mut ctl, a, _) = controller();
        let outcome = ctl.commit_resize(&a, 10.0, 10.0).unwrap();
        match outcome {
            CommitOutcome::Committed(room) => assert_eq!((room.width, room.height), (100.0, 60.0)),
            other => panic!("expected commit, got {:?}", other),
        }
    }

    #[test]
    fn test_add_room_uses_default_placement() {
        let (mut ctl, _, _) = controller();
        let room = ctl.add_room("301", 3).unwrap();
        assert_eq!((room.x, room.y, room.width, room.height), (20.0, 20.0, 200.0, 120.0));
        assert_eq!(ctl.rooms().len(), 3);
        assert!(ctl.remove_room(&room.id).unwrap());
        assert_eq!(ctl.rooms().len(), 2);
    }
}
