//! Configuration for the layout engine

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

use super::error::LayoutError;
use super::types::BoundingBox;

/// Width of every floor's canvas
pub const CANVAS_WIDTH: f64 = 2000.0;

/// Height of a single floor's canvas (local coordinates)
pub const SINGLE_FLOOR_HEIGHT: f64 = 800.0;

/// Vertical slice allotted to one floor when all floors are stacked
pub const FLOOR_BAND_HEIGHT: f64 = 900.0;

/// Header strip at the top of each floor band
pub const HEADER_HEIGHT: f64 = 100.0;

/// Pointer travel needed before a press becomes a drag
pub const DRAG_ACTIVATION_DISTANCE: f64 = 5.0;

pub const MIN_ROOM_WIDTH: f64 = 100.0;
pub const MIN_ROOM_HEIGHT: f64 = 60.0;

pub const DEFAULT_ROOM_SIZE: (f64, f64) = (200.0, 120.0);
pub const DEFAULT_ROOM_POSITION: (f64, f64) = (20.0, 20.0);

/// Configuration options for the floor-plan canvas
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Width of a floor's canvas
    pub canvas_width: f64,

    /// Height of a floor's canvas
    pub floor_height: f64,

    /// Height of one floor band in the stacked view (header included)
    pub floor_band_height: f64,

    /// Height of the header strip inside a floor band
    pub header_height: f64,

    /// Distance the pointer must travel before a press turns into a drag
    pub drag_activation_distance: f64,

    /// Minimum room size (width, height)
    pub min_room_size: (f64, f64),

    /// Size given to rooms that do not specify one (width, height)
    pub default_room_size: (f64, f64),

    /// Position given to newly created rooms (x, y)
    pub default_room_position: (f64, f64),
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            floor_height: SINGLE_FLOOR_HEIGHT,
            floor_band_height: FLOOR_BAND_HEIGHT,
            header_height: HEADER_HEIGHT,
            drag_activation_distance: DRAG_ACTIVATION_DISTANCE,
            min_room_size: (MIN_ROOM_WIDTH, MIN_ROOM_HEIGHT),
            default_room_size: DEFAULT_ROOM_SIZE,
            default_room_position: DEFAULT_ROOM_POSITION,
        }
    }
}

/// TOML file layout: settings live under a `[canvas]` table
#[derive(Deserialize)]
struct TomlConfig {
    #[serde(default)]
    canvas: CanvasConfig,
}

impl CanvasConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load configuration from a TOML string and validate it
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        parsed.canvas.validate()?;
        Ok(parsed.canvas)
    }

    /// Set the canvas dimensions of a single floor
    pub fn with_canvas_size(mut self, width: f64, height: f64) -> Self {
        self.canvas_width = width;
        self.floor_height = height;
        self
    }

    /// Set the floor band and header heights used by the stacked view
    pub fn with_floor_band(mut self, band_height: f64, header_height: f64) -> Self {
        self.floor_band_height = band_height;
        self.header_height = header_height;
        self
    }

    /// Set the drag activation distance
    pub fn with_drag_activation_distance(mut self, distance: f64) -> Self {
        self.drag_activation_distance = distance;
        self
    }

    /// Set the minimum room size
    pub fn with_min_room_size(mut self, width: f64, height: f64) -> Self {
        self.min_room_size = (width, height);
        self
    }

    /// Set the default room size
    pub fn with_default_room_size(mut self, width: f64, height: f64) -> Self {
        self.default_room_size = (width, height);
        self
    }

    /// Check that the settings describe a usable canvas
    pub fn validate(&self) -> Result<(), LayoutError> {
        let positive = [
            ("canvas_width", self.canvas_width),
            ("floor_height", self.floor_height),
            ("floor_band_height", self.floor_band_height),
            ("min_room_size.width", self.min_room_size.0),
            ("min_room_size.height", self.min_room_size.1),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(LayoutError::invalid_config(field, "must be positive"));
            }
        }
        let non_negative = [
            ("header_height", self.header_height),
            ("drag_activation_distance", self.drag_activation_distance),
        ];
        for (field, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(LayoutError::invalid_config(field, "must not be negative"));
            }
        }
        if self.floor_band_height < self.floor_height + self.header_height {
            return Err(LayoutError::invalid_config(
                "floor_band_height",
                format!(
                    "{} cannot hold a {} floor below a {} header",
                    self.floor_band_height, self.floor_height, self.header_height
                ),
            ));
        }
        let (w, h) = self.default_room_size;
        if w < self.min_room_size.0 || h < self.min_room_size.1 {
            return Err(LayoutError::invalid_config(
                "default_room_size",
                "is smaller than min_room_size",
            ));
        }
        let (x, y) = self.default_room_position;
        if !BoundingBox::new(x, y, w, h).fits_within(self.canvas_width, self.floor_height) {
            return Err(LayoutError::invalid_config(
                "default_room_position",
                format!(
                    "a {}x{} room at ({}, {}) does not fit on the canvas",
                    w, h, x, y
                ),
            ));
        }
        Ok(())
    }
}
