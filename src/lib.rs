//! roomplan - Floor-plan layout engine for a room-rental dashboard
//!
//! This library groups rooms into stacked floor bands, validates drags and
//! resizes against canvas bounds and same-floor peers, persists accepted
//! placements through a repository, and renders the plan as SVG.
//!
//! # Example
//!
//! ```rust
//! use roomplan::layout::{NewRoom, ViewMode};
//! use roomplan::store::{MemoryStore, RoomRepository};
//!
//! let mut store = MemoryStore::new();
//! store.create(NewRoom::new("owner", "201", 2)).unwrap();
//!
//! let rooms = store.get_all_for_owner("owner").unwrap();
//! let svg = roomplan::render(&rooms, ViewMode::All).unwrap();
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("201"));
//! ```

pub mod error;
pub mod interaction;
pub mod layout;
pub mod renderer;
pub mod store;
pub mod stylesheet;

pub use error::{ConfigError, StoreError};
pub use interaction::{Action, CanvasController, CommitOutcome, GestureState};
pub use layout::{
    group_and_offset, CanvasConfig, FloorPlan, LayoutError, NewRoom, Room, RoomId, ViewMode,
};
pub use renderer::{render_svg, render_svg_with_stylesheet, SvgConfig};
pub use store::{JsonFileStore, MemoryStore, RoomRepository};

use thiserror::Error;

// Re-export Stylesheet for public API
pub use stylesheet::{Stylesheet, StylesheetError};

/// Any error the floor-plan pipeline can surface
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("stylesheet error: {0}")]
    Stylesheet(#[from] StylesheetError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Canvas geometry
    pub canvas: CanvasConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Stylesheet for status colors
    pub stylesheet: Stylesheet,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas configuration
    pub fn with_canvas(mut self, config: CanvasConfig) -> Self {
        self.canvas = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the stylesheet for status colors
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }
}

/// Render rooms to SVG with default configuration
pub fn render(rooms: &[Room], view: ViewMode) -> Result<String, PlanError> {
    render_with_config(rooms, view, &RenderConfig::default())
}

/// Render rooms to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use roomplan::{render_with_config, CanvasConfig, RenderConfig, SvgConfig, ViewMode};
///
/// let config = RenderConfig::new()
///     .with_canvas(CanvasConfig::default().with_canvas_size(1200.0, 600.0))
///     .with_svg(SvgConfig::default().with_pretty_print(false));
///
/// let svg = render_with_config(&[], ViewMode::Floor(1), &config).unwrap();
/// assert!(svg.contains(r#"viewBox="0 0 1200 600""#));
/// ```
pub fn render_with_config(
    rooms: &[Room],
    view: ViewMode,
    config: &RenderConfig,
) -> Result<String, PlanError> {
    config.canvas.validate()?;
    let plan = group_and_offset(rooms, view, &config.canvas);
    tracing::debug!(
        "Rendering {} rooms on {} floors ({})",
        plan.rooms.len(),
        plan.floors.len(),
        view
    );
    Ok(render_svg_with_stylesheet(
        &plan,
        &config.canvas,
        &config.svg,
        &config.stylesheet,
    ))
}
