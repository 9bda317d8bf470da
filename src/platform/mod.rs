//! Platform abstraction layer
//!
//! The host owns the window and raw input; the game polls it once per frame:
//! - Window size (drives layout)
//! - Pointer button level (edges are detected in the simulation)

pub mod headless;

use glam::Vec2;

pub use crate::sim::ButtonState;
pub use headless::{RecordingRenderer, ScriptedPlatform};

/// Window and input queries answered by the host
pub trait Platform {
    /// Window size in pixels
    fn window_dims(&self) -> Vec2;

    /// Current primary pointer button level
    fn pointer_button(&self) -> ButtonState;
}
