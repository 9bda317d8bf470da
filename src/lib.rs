//! Flappy - a side-scrolling avoidance game as a host-loaded module
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, phases)
//! - `renderer`: Sprite batch composition and the texture table
//! - `platform`: Host window/input abstraction (plus a headless host)
//! - `session`: One loaded game session tying the above together
//! - `ffi`: C ABI entry points exported by the `cdylib`

pub mod config;
pub mod error;
pub mod ffi;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod sim;

pub use config::GameConfig;
pub use error::GameError;
pub use session::Session;

/// Reference art dimensions. Everything on screen is scaled from these by
/// `window / REFERENCE_WINDOW`.
pub mod consts {
    use glam::{Vec2, Vec4};

    /// Window size the art was drawn for
    pub const REFERENCE_WINDOW: Vec2 = Vec2::new(288.0, 512.0);

    pub const PLAYER_SIZE: Vec2 = Vec2::new(34.0, 24.0);
    pub const GROUND_SIZE: Vec2 = Vec2::new(288.0, 112.0);
    /// Only the width is used; barriers always span the window height
    pub const OBSTACLE_WIDTH: f32 = 52.0;

    pub const DIGIT_SIZE: Vec2 = Vec2::new(24.0, 36.0);
    pub const GAME_OVER_SIZE: Vec2 = Vec2::new(192.0, 42.0);
    pub const GET_READY_SIZE: Vec2 = Vec2::new(184.0, 50.0);
    pub const TAP_HINT_SIZE: Vec2 = Vec2::new(114.0, 98.0);

    /// Player sprite sheet and its four flap frames (x, y, w, h in texels)
    pub const PLAYER_SHEET_SIZE: Vec2 = Vec2::new(141.0, 26.0);
    pub const FLAP_FRAMES: [Vec4; 4] = [
        Vec4::new(1.0, 1.0, 34.0, 24.0),
        Vec4::new(36.0, 1.0, 34.0, 24.0),
        Vec4::new(71.0, 1.0, 34.0, 24.0),
        Vec4::new(106.0, 1.0, 34.0, 24.0),
    ];

    /// Depth layers handed to the host with each sprite
    pub const Z_BACKGROUND: f32 = 0.1;
    pub const Z_OBSTACLE: f32 = 0.15;
    pub const Z_GROUND: f32 = 0.2;
    pub const Z_PLAYER: f32 = 0.3;
    pub const Z_HUD: f32 = 0.4;
}
