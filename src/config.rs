//! Gameplay tuning
//!
//! Loaded once per session. Any field missing from a JSON document keeps its
//! default, so hosts only need to list what they override.

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Physics ===
    /// Fixed simulation step in seconds
    pub fixed_step: f32,
    /// Spring constant of the idle float during setup
    pub harmonic_stiffness: f32,
    /// Downward acceleration during play (px/s², +y is down)
    pub gravity: f32,
    /// Velocity forced on a flap (negative is up)
    pub flap_impulse: f32,
    /// How far above its origin the player spawns
    pub spawn_offset: f32,

    // === World ===
    /// Horizontal scroll speed of ground and obstacles (px/s)
    pub drift_speed: f32,
    /// Number of obstacles kept in the stream
    pub obstacle_count: usize,
    /// Vertical gap between the barriers of one obstacle (reference px)
    pub obstacle_gap: f32,
    /// Fraction of the playfield height kept free of gap centers, top and bottom
    pub gap_margin_fraction: f32,
    /// Scroll obstacles while waiting in setup
    pub scroll_obstacles_in_setup: bool,

    // === Presentation ===
    /// Frames presented after an impact before the game-over phase
    pub impact_grace_frames: u32,
    /// Flap animation speed (frames per second)
    pub flap_frame_rate: f32,
    /// Maximum sprites composed per frame
    pub batch_capacity: usize,

    /// Fixed RNG seed; `None` seeds from entropy at load
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_step: 1.0 / 60.0,
            harmonic_stiffness: 50.0,
            gravity: 1000.0,
            flap_impulse: -300.0,
            spawn_offset: 10.0,

            drift_speed: 80.0,
            obstacle_count: 4,
            obstacle_gap: 150.0,
            gap_margin_fraction: 0.25,
            scroll_obstacles_in_setup: false,

            impact_grace_frames: 3,
            flap_frame_rate: 10.0,
            batch_capacity: 64,

            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Same config with a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if !(self.fixed_step > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "fixed_step must be positive, got {}",
                self.fixed_step
            )));
        }
        if self.obstacle_count == 0 {
            return Err(GameError::InvalidConfig("obstacle_count must be at least 1".into()));
        }
        if self.batch_capacity == 0 {
            return Err(GameError::InvalidConfig("batch_capacity must be at least 1".into()));
        }
        if !(self.drift_speed >= 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "drift_speed must not be negative, got {}",
                self.drift_speed
            )));
        }
        if !(0.0..0.5).contains(&self.gap_margin_fraction) {
            return Err(GameError::InvalidConfig(format!(
                "gap_margin_fraction must be in [0, 0.5), got {}",
                self.gap_margin_fraction
            )));
        }
        Ok(())
    }
}
