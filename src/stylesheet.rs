//! Stylesheet system for room status colors
//!
//! Room cards are colored by status through symbolic tokens
//! (`status-occupied`, `status-occupied-border`, `badge-occupied`, ...) that a
//! TOML stylesheet maps to concrete colors. Tokens missing from a custom
//! stylesheet fall back to the built-in palette.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::layout::RoomStatus;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A stylesheet mapping symbolic colors to concrete values
#[derive(Debug, Clone)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: token name -> hex color
    pub colors: HashMap<String, String>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

/// Default palette - slate canvas, pastel cards tinted by status
const DEFAULT_PALETTE: &str = r##"
[colors]
# Canvas
background-1 = "#f8fafc"
background-header = "#f1f5f9"
grid = "#e2e8f0"

# Text
text-1 = "#1e293b"
text-2 = "#64748b"

# Card fill per status
status-vacant = "#ffffff"
status-occupied = "#f0fdf4"
status-leaving-soon = "#fffbeb"
status-reserved = "#fff7ed"
status-maintenance = "#fef2f2"

# Card border per status
status-vacant-border = "#e2e8f0"
status-occupied-border = "#bbf7d0"
status-leaving-soon-border = "#fde68a"
status-reserved-border = "#fed7aa"
status-maintenance-border = "#fecaca"

# Badge per status
badge-vacant = "#64748b"
badge-occupied = "#16a34a"
badge-leaving-soon = "#f59e0b"
badge-reserved = "#ea580c"
badge-maintenance = "#dc2626"
"##;

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
        })
    }

    /// Resolve a symbolic color token to a concrete value
    ///
    /// Returns None if the token is not defined in this stylesheet.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a symbolic color token with fallback to default palette
    ///
    /// Fallback order:
    /// 1. Check this stylesheet for exact token
    /// 2. Check default palette for exact token
    /// 3. Use category default (status border → #e2e8f0, etc.)
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }

        let default = Self::default();
        if let Some(color) = default.resolve(token) {
            return color.to_string();
        }

        if token.starts_with("status") && token.ends_with("-border") {
            return "#e2e8f0".to_string();
        }
        if token.starts_with("status") || token.starts_with("background") {
            return "#ffffff".to_string();
        }
        if token.starts_with("badge") {
            return "#64748b".to_string();
        }
        if token.starts_with("text") {
            return "#1e293b".to_string();
        }

        "#333333".to_string()
    }

    /// Card fill for a room status
    pub fn status_fill(&self, status: RoomStatus) -> String {
        self.resolve_or_default(status.color_token())
    }

    /// Card border for a room status
    pub fn status_border(&self, status: RoomStatus) -> String {
        self.resolve_or_default(&format!("{}-border", status.color_token()))
    }

    /// Badge color for a room status
    pub fn status_badge(&self, status: RoomStatus) -> String {
        let suffix = status
            .color_token()
            .strip_prefix("status-")
            .unwrap_or_default();
        self.resolve_or_default(&format!("badge-{}", suffix))
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}
