//! Error types for the layout engine

use thiserror::Error;

/// Errors that can occur while resolving rooms or validating the canvas
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Reference to a room that is not in the current room set
    #[error("unknown room '{reference}'")]
    UnknownRoom {
        reference: String,
        suggestions: Vec<String>,
    },

    /// Canvas configuration that cannot produce a usable layout
    #[error("invalid canvas setting '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },
}

impl LayoutError {
    /// Create an unknown room error with suggestions
    pub fn unknown_room(reference: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self::UnknownRoom {
            reference: reference.into(),
            suggestions,
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Get suggestions if available
    pub fn suggestions(&self) -> Option<&[String]> {
        match self {
            Self::UnknownRoom { suggestions, .. } => Some(suggestions),
            Self::InvalidConfig { .. } => None,
        }
    }
}
