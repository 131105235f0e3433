//! Layout engine scenarios: collision checks and stacked floor offsets

use pretty_assertions::assert_eq;

use roomplan::layout::{
    available_floors, check_collision, find_collision, group_and_offset, CanvasConfig, Collision,
    NewRoom, Proposal, Room, RoomId, ViewMode,
};
use roomplan::store::{MemoryStore, RoomRepository};

fn create(store: &mut MemoryStore, number: &str, floor: i32, x: f64, y: f64) -> Room {
    store
        .create(NewRoom::new("owner", number, floor).with_position(x, y))
        .expect("memory store never fails")
}

#[test]
fn test_overlapping_move_collides() {
    let config = CanvasConfig::default();
    let mut store = MemoryStore::new();
    let a = create(&mut store, "201", 2, 0.0, 0.0);
    let b = create(&mut store, "202", 2, 600.0, 0.0);
    let rooms = store.get_all_for_owner("owner").unwrap();

    let proposal = Proposal::at(150.0, 50.0);
    assert!(check_collision(&b, &rooms, &proposal, &config));
    assert_eq!(
        find_collision(&b, &rooms, &proposal, &config),
        Some(Collision::Overlap { with: a.id })
    );
}

#[test]
fn test_edge_touching_move_is_allowed() {
    let config = CanvasConfig::default();
    let mut store = MemoryStore::new();
    create(&mut store, "201", 2, 0.0, 0.0);
    let b = create(&mut store, "202", 2, 600.0, 0.0);
    let rooms = store.get_all_for_owner("owner").unwrap();

    assert!(!check_collision(&b, &rooms, &Proposal::at(200.0, 0.0), &config));
    assert!(!check_collision(&b, &rooms, &Proposal::at(0.0, 120.0), &config));
}

#[test]
fn test_resize_past_canvas_edge_collides() {
    let config = CanvasConfig::default();
    let mut store = MemoryStore::new();
    let room = store
        .create(
            NewRoom::new("owner", "301", 3)
                .with_position(1900.0, 700.0)
                .with_size(100.0, 100.0),
        )
        .unwrap();
    let rooms = vec![room.clone()];

    assert!(!check_collision(&room, &rooms, &Proposal::resize(&room, 100.0, 100.0), &config));
    let proposal = Proposal::resize(&room, 200.0, 100.0);
    assert!(check_collision(&room, &rooms, &proposal, &config));
    assert!(matches!(
        find_collision(&room, &rooms, &proposal, &config),
        Some(Collision::OutOfBounds { .. })
    ));
}

#[test]
fn test_rooms_on_other_floors_never_collide() {
    let config = CanvasConfig::default();
    let mut store = MemoryStore::new();
    create(&mut store, "101", 1, 0.0, 0.0);
    let upstairs = create(&mut store, "201", 2, 600.0, 0.0);
    let rooms = store.get_all_for_owner("owner").unwrap();

    assert!(!check_collision(&upstairs, &rooms, &Proposal::at(0.0, 0.0), &config));
}

#[test]
fn test_stacked_offsets_for_two_floors() {
    let config = CanvasConfig::default();
    let mut store = MemoryStore::new();
    let first = create(&mut store, "101", 1, 20.0, 20.0);
    let second = create(&mut store, "201", 2, 20.0, 20.0);
    let rooms = store.get_all_for_owner("owner").unwrap();

    let plan = group_and_offset(&rooms, ViewMode::All, &config);

    assert_eq!(plan.floors, vec![2, 1]);
    assert_eq!(plan.get(&second.id).map(|r| r.display_y), Some(120.0));
    assert_eq!(plan.get(&first.id).map(|r| r.display_y), Some(1020.0));
    assert_eq!(plan.total_height, 1800.0);
    // local coordinates are untouched
    assert_eq!(plan.get(&first.id).map(|r| r.room.y), Some(20.0));
}

#[test]
fn test_highest_floor_is_topmost() {
    let config = CanvasConfig::default();
    let mut store = MemoryStore::new();
    for floor in [2, 1, 3] {
        create(&mut store, &format!("{}01", floor), floor, 20.0, 20.0);
    }
    let rooms = store.get_all_for_owner("owner").unwrap();

    let plan = group_and_offset(&rooms, ViewMode::All, &config);
    let tops: Vec<(i32, usize, f64)> = plan.bands.iter().map(|b| (b.floor, b.rank, b.top)).collect();

    assert_eq!(tops, vec![(3, 0, 0.0), (2, 1, 900.0), (1, 2, 1800.0)]);
    assert_eq!(available_floors(&rooms), vec![1, 2, 3]);
}

#[test]
fn test_single_floor_view_uses_local_coordinates() {
    let config = CanvasConfig::default();
    let mut store = MemoryStore::new();
    create(&mut store, "101", 1, 20.0, 20.0);
    let upstairs = create(&mut store, "201", 2, 40.0, 60.0);
    let rooms = store.get_all_for_owner("owner").unwrap();

    let plan = group_and_offset(&rooms, ViewMode::Floor(2), &config);

    assert_eq!(plan.floors, vec![2]);
    assert_eq!(plan.rooms.len(), 1);
    assert_eq!(plan.get(&upstairs.id).map(|r| r.display_y), Some(60.0));
    assert_eq!(plan.total_height, 800.0);
}

#[test]
fn test_missing_floor_gives_empty_plan() {
    let config = CanvasConfig::default();
    let mut store = MemoryStore::new();
    create(&mut store, "101", 1, 20.0, 20.0);
    let rooms = store.get_all_for_owner("owner").unwrap();

    let plan = group_and_offset(&rooms, ViewMode::Floor(7), &config);

    assert!(plan.floors.is_empty());
    assert!(plan.rooms.is_empty());
    assert_eq!(plan.total_height, 800.0);
    assert_eq!(plan.get(&RoomId::new("room-1")), None);
}

#[test]
fn test_custom_band_geometry() {
    let config = CanvasConfig::default()
        .with_canvas_size(1000.0, 400.0)
        .with_floor_band(500.0, 50.0);
    let mut store = MemoryStore::new();
    create(&mut store, "101", 1, 0.0, 10.0);
    let top = create(&mut store, "201", 2, 0.0, 10.0);
    let rooms = store.get_all_for_owner("owner").unwrap();

    let plan = group_and_offset(&rooms, ViewMode::All, &config);

    assert_eq!(plan.get(&top.id).map(|r| r.display_y), Some(60.0));
    assert_eq!(plan.total_height, 1000.0);
    assert!(check_collision(&top, &rooms, &Proposal::at(900.0, 0.0), &config));
}
