//! Integration tests for the render pipeline

use roomplan::layout::NewRoom;
use roomplan::store::{demo_rooms, MemoryStore, RoomRepository, DEMO_OWNER_ID};
use roomplan::{
    render, render_with_config, CanvasConfig, PlanError, RenderConfig, Stylesheet, SvgConfig,
    ViewMode,
};

fn demo() -> Vec<roomplan::Room> {
    let mut store = MemoryStore::new();
    for room in demo_rooms(DEMO_OWNER_ID) {
        store.create(room).unwrap();
    }
    store
        .create(NewRoom::new(DEMO_OWNER_ID, "301", 3).with_position(20.0, 20.0))
        .unwrap();
    store.get_all_for_owner(DEMO_OWNER_ID).unwrap()
}

#[test]
fn test_render_demo_floors() {
    let svg = render(&demo(), ViewMode::All).expect("Should render");

    assert!(svg.contains("<svg"));
    assert!(svg.contains(r#"viewBox="0 0 2000 1800""#));
    // floor 3 band comes first
    let floor3 = svg.find(">Floor 3</text>").expect("floor 3 header");
    let floor2 = svg.find(">Floor 2</text>").expect("floor 2 header");
    assert!(floor3 < floor2);
    assert!(svg.contains(">15 rooms</text>"));
    assert!(svg.contains(">1 room</text>"));
    for number in 201..=215 {
        assert!(svg.contains(&format!(">{}</text>", number)), "missing room {}", number);
    }
    // room 201 sits in the second band: 20 + 900 + 100
    assert!(svg.contains(r#"x="20" y="1020" width="200" height="120""#));
}

#[test]
fn test_render_status_classes() {
    let svg = render(&demo(), ViewMode::Floor(2)).expect("Should render");

    assert!(svg.contains("rp-status-occupied"));
    assert!(svg.contains("rp-status-leaving-soon"));
    assert!(svg.contains("rp-status-vacant"));
    assert!(!svg.contains("rp-status-maintenance"));
    assert!(svg.contains(">Leaving soon</text>"));
    assert!(!svg.contains(">301</text>"));
    assert!(!svg.contains("rp-floor-header"));
}

#[test]
fn test_render_with_custom_stylesheet() {
    let stylesheet = Stylesheet::from_str(
        r##"
[metadata]
name = "High contrast"

[colors]
status-occupied = "#000000"
text-1 = "#ffffff"
"##,
    )
    .unwrap();
    let config = RenderConfig::new().with_stylesheet(stylesheet);
    let svg = render_with_config(&demo(), ViewMode::All, &config).unwrap();

    assert!(svg.contains("--status-occupied: #000000;"));
    assert!(svg.contains("--text-1: #ffffff;"));
    assert!(svg.contains("--status-leaving-soon: #fffbeb;"));
}

#[test]
fn test_render_without_badges_or_prefix() {
    let config = RenderConfig::new().with_svg(
        SvgConfig::new()
            .with_status_badges(false)
            .without_class_prefix(),
    );
    let svg = render_with_config(&demo(), ViewMode::Floor(3), &config).unwrap();

    assert!(svg.contains(r#"class="room status-vacant""#));
    assert!(!svg.contains(">Vacant</text>"));
    assert!(svg.contains(">301</text>"));
}

#[test]
fn test_render_rejects_invalid_canvas() {
    let config = RenderConfig::new().with_canvas(CanvasConfig::default().with_floor_band(500.0, 100.0));
    let result = render_with_config(&demo(), ViewMode::All, &config);

    match result {
        Err(PlanError::Layout(e)) => assert!(e.to_string().contains("floor_band_height")),
        other => panic!("expected layout error, got {:?}", other),
    }
}
