//! Core types for the layout engine

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::config::DEFAULT_ROOM_SIZE;

/// A 2D point in the coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Component-wise offset from `origin` to this point
    pub fn offset_from(&self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if this bounding box intersects another.
    ///
    /// Boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Size of the overlapping region (width, height), if any
    pub fn overlap(&self, other: &BoundingBox) -> Option<(f64, f64)> {
        if !self.intersects(other) {
            return None;
        }
        let w = self.right().min(other.right()) - self.x.max(other.x);
        let h = self.bottom().min(other.bottom()) - self.y.max(other.y);
        Some((w, h))
    }

    /// Check if this box lies inside `[0, width] x [0, height]`
    pub fn fits_within(&self, width: f64, height: f64) -> bool {
        self.x >= 0.0 && self.y >= 0.0 && self.right() <= width && self.bottom() <= height
    }
}

/// Opaque room identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub String);

impl RoomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RoomId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Occupancy status of a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomStatus {
    Vacant,
    Occupied,
    LeavingSoon,
    Reserved,
    Maintenance,
}

impl RoomStatus {
    pub const ALL: [RoomStatus; 5] = [
        RoomStatus::Vacant,
        RoomStatus::Occupied,
        RoomStatus::LeavingSoon,
        RoomStatus::Reserved,
        RoomStatus::Maintenance,
    ];

    /// Human-readable badge text
    pub fn label(self) -> &'static str {
        match self {
            RoomStatus::Vacant => "Vacant",
            RoomStatus::Occupied => "Occupied",
            RoomStatus::LeavingSoon => "Leaving soon",
            RoomStatus::Reserved => "Reserved",
            RoomStatus::Maintenance => "Maintenance",
        }
    }

    /// Stylesheet token used for this status's card color
    pub fn color_token(self) -> &'static str {
        match self {
            RoomStatus::Vacant => "status-vacant",
            RoomStatus::Occupied => "status-occupied",
            RoomStatus::LeavingSoon => "status-leaving-soon",
            RoomStatus::Reserved => "status-reserved",
            RoomStatus::Maintenance => "status-maintenance",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RoomStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "vacant" => Ok(RoomStatus::Vacant),
            "occupied" => Ok(RoomStatus::Occupied),
            "leaving_soon" => Ok(RoomStatus::LeavingSoon),
            "reserved" => Ok(RoomStatus::Reserved),
            "maintenance" => Ok(RoomStatus::Maintenance),
            other => Err(format!("unknown room status '{}'", other)),
        }
    }
}

/// Physical kind of room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    Window,
    NoWindow,
    EnSuite,
    Duplex,
}

impl RoomType {
    pub fn label(self) -> &'static str {
        match self {
            RoomType::Window => "Window",
            RoomType::NoWindow => "No window",
            RoomType::EnSuite => "En suite",
            RoomType::Duplex => "Duplex",
        }
    }
}

impl FromStr for RoomType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "window" => Ok(RoomType::Window),
            "no_window" => Ok(RoomType::NoWindow),
            "en_suite" => Ok(RoomType::EnSuite),
            "duplex" => Ok(RoomType::Duplex),
            other => Err(format!("unknown room type '{}'", other)),
        }
    }
}

fn default_width() -> f64 {
    DEFAULT_ROOM_SIZE.0
}

fn default_height() -> f64 {
    DEFAULT_ROOM_SIZE.1
}

/// A room placed on its floor's canvas
///
/// `x` and `y` are local to the room's floor; the stacked multi-floor view
/// never writes its display offset back here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    pub owner_id: String,
    pub number: String,
    pub floor: i32,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub status: RoomStatus,
    pub base_price: u64,
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,
}

impl Room {
    /// Bounding box in floor-local coordinates
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.x, self.y, self.width, self.height)
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// True if `other` is a different room on the same floor
    pub fn is_peer_of(&self, other: &Room) -> bool {
        self.floor == other.floor && self.id != other.id
    }
}

/// Payload for creating a room; the repository assigns the id
#[derive(Debug, Clone, PartialEq)]
pub struct NewRoom {
    pub owner_id: String,
    pub number: String,
    pub floor: i32,
    pub room_type: RoomType,
    pub status: RoomStatus,
    pub base_price: u64,
    /// Position (x, y); the default position when omitted
    pub position: Option<(f64, f64)>,
    /// Size (width, height); the default size when omitted
    pub size: Option<(f64, f64)>,
}

impl NewRoom {
    /// A vacant window room with no explicit placement
    pub fn new(owner_id: impl Into<String>, number: impl Into<String>, floor: i32) -> Self {
        Self {
            owner_id: owner_id.into(),
            number: number.into(),
            floor,
            room_type: RoomType::Window,
            status: RoomStatus::Vacant,
            base_price: 350_000,
            position: None,
            size: None,
        }
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Some((x, y));
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.size = Some((width, height));
        self
    }

    pub fn with_status(mut self, status: RoomStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_type(mut self, room_type: RoomType) -> Self {
        self.room_type = room_type;
        self
    }

    pub fn with_base_price(mut self, base_price: u64) -> Self {
        self.base_price = base_price;
        self
    }
}

/// Which floors the canvas shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Every floor stacked in one scroll view, highest floor on top
    #[default]
    All,
    /// A single floor in its own coordinates
    Floor(i32),
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::All => f.write_str("all"),
            ViewMode::Floor(n) => write!(f, "{}", n),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(ViewMode::All);
        }
        s.parse::<i32>()
            .map(ViewMode::Floor)
            .map_err(|_| format!("expected 'all' or a floor number, got '{}'", s))
    }
}

/// A room projected into display coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRoom {
    pub room: Room,
    /// Local `y` plus the floor band offset in the stacked view
    pub display_y: f64,
}

impl DisplayRoom {
    /// Bounding box in display coordinates
    pub fn display_bounds(&self) -> BoundingBox {
        BoundingBox::new(self.room.x, self.display_y, self.room.width, self.room.height)
    }
}

/// Placement of one floor's band in the stacked view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorBand {
    pub floor: i32,
    /// 0-based position in the descending floor order
    pub rank: usize,
    /// Display y of the band's top edge (header included)
    pub top: f64,
    /// Height of the header strip at the top of the band
    pub header_height: f64,
}

impl FloorBand {
    /// Display y where the floor's local origin lands
    pub fn content_top(&self) -> f64 {
        self.top + self.header_height
    }
}

/// Render-ready result of grouping rooms by floor
#[derive(Debug, Clone, PartialEq)]
pub struct FloorPlan {
    pub view: ViewMode,
    /// Floors shown, highest first
    pub floors: Vec<i32>,
    /// One band per shown floor, in `floors` order
    pub bands: Vec<FloorBand>,
    /// Rooms grouped by floor, in `floors` order, each in input order
    pub rooms: Vec<DisplayRoom>,
    /// Height of the scroll container
    pub total_height: f64,
}

impl FloorPlan {
    /// Rooms on one floor
    pub fn rooms_on(&self, floor: i32) -> impl Iterator<Item = &DisplayRoom> {
        self.rooms.iter().filter(move |r| r.room.floor == floor)
    }

    /// Look up a room's display projection by id
    pub fn get(&self, id: &RoomId) -> Option<&DisplayRoom> {
        self.rooms.iter().find(|r| &r.room.id == id)
    }

    /// Band for a floor, if it is shown
    pub fn band(&self, floor: i32) -> Option<&FloorBand> {
        self.bands.iter().find(|b| b.floor == floor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(id: &str, floor: i32) -> Room {
        Room {
            id: RoomId::new(id),
            owner_id: "owner".to_string(),
            number: id.to_string(),
            floor,
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
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        assert_eq!(a.distance_to(Point::new(3.0, 4.0)), 5.0);
        assert_eq!(Point::new(7.0, 2.0).offset_from(Point::new(2.0, 5.0)), Point::new(5.0, -3.0));
    }

    #[test]
    fn test_bounding_box_edges() {
        let bb = BoundingBox::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(bb.right(), 110.0);
        assert_eq!(bb.bottom(), 70.0);
    }

    #[test]
    fn test_bounding_box_intersects() {
        let a = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
        let b = BoundingBox::new(50.0, 50.0, 100.0, 100.0);
        let c = BoundingBox::new(200.0, 200.0, 50.0, 50.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(!c.intersects(&a));
    }

    #[test]
    fn test_bounding_box_touching_edges_do_not_intersect() {
        let a = BoundingBox::new(0.0, 0.0, 200.0, 120.0);
        let right = BoundingBox::new(200.0, 0.0, 200.0, 120.0);
        let below = BoundingBox::new(0.0, 120.0, 200.0, 120.0);
        let corner = BoundingBox::new(200.0, 120.0, 10.0, 10.0);

        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
        assert!(!a.intersects(&corner));
    }

    #[test]
    fn test_bounding_box_overlap_extent() {
        let a = BoundingBox::new(0.0, 0.0, 200.0, 120.0);
        let b = BoundingBox::new(150.0, 50.0, 200.0, 120.0);
        assert_eq!(a.overlap(&b), Some((50.0, 70.0)));
        assert_eq!(a.overlap(&BoundingBox::new(200.0, 0.0, 5.0, 5.0)), None);
    }

    #[test]
    fn test_bounding_box_fits_within() {
        assert!(BoundingBox::new(0.0, 0.0, 2000.0, 800.0).fits_within(2000.0, 800.0));
        assert!(!BoundingBox::new(1900.0, 700.0, 200.0, 100.0).fits_within(2000.0, 800.0));
        assert!(!BoundingBox::new(-1.0, 0.0, 10.0, 10.0).fits_within(2000.0, 800.0));
    }

    #[test]
    fn test_room_peer() {
        let a = room("a", 2);
        assert!(!a.is_peer_of(&a));
        assert!(a.is_peer_of(&room("b", 2)));
        assert!(!a.is_peer_of(&room("c", 3)));
    }

    #[test]
    fn test_room_json_uses_camel_case_and_default_size() {
        let json = r#"{
            "id": "r1", "ownerId": "demo", "number": "201", "floor": 2,
            "type": "EN_SUITE", "status": "LEAVING_SOON", "basePrice": 350000,
            "x": 20, "y": 20
        }"#;
        let parsed: Room = serde_json::from_str(json).expect("Should parse");
        assert_eq!(parsed.room_type, RoomType::EnSuite);
        assert_eq!(parsed.status, RoomStatus::LeavingSoon);
        assert_eq!((parsed.width, parsed.height), (200.0, 120.0));

        let out = serde_json::to_string(&parsed).expect("Should serialize");
        assert!(out.contains("\"ownerId\":\"demo\""));
        assert!(out.contains("\"type\":\"EN_SUITE\""));
    }

    #[test]
    fn test_view_mode_from_str() {
        assert_eq!("all".parse::<ViewMode>(), Ok(ViewMode::All));
        assert_eq!("ALL".parse::<ViewMode>(), Ok(ViewMode::All));
        assert_eq!("3".parse::<ViewMode>(), Ok(ViewMode::Floor(3)));
        assert!("roof".parse::<ViewMode>().is_err());
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("leaving-soon".parse::<RoomStatus>(), Ok(RoomStatus::LeavingSoon));
        assert_eq!("MAINTENANCE".parse::<RoomStatus>(), Ok(RoomStatus::Maintenance));
        assert!("gone".parse::<RoomStatus>().is_err());
    }
}
