//! Pointer interaction for room cards: click, drag and corner resize

pub mod controller;
pub mod gesture;

pub use controller::{Action, CanvasController, CommitOutcome};
pub use gesture::GestureState;
