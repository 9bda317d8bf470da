//! Window-derived geometry
//!
//! Recomputed every frame from the host's window size, so a resize rescales
//! the playfield without touching simulation state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::obstacles::{GapBand, ObstacleGeometry};
use crate::config::GameConfig;
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub window: Vec2,
    /// `window / REFERENCE_WINDOW`
    pub scale: Vec2,
    pub ground_size: Vec2,
    /// Screen y of the ground strip's top edge
    pub ground_top: f32,
    pub player_size: Vec2,
    /// Rest position of the player's top-left corner
    pub player_origin: Vec2,
    pub obstacle: ObstacleGeometry,
    /// Horizontal distance between consecutive obstacles
    pub spacing: f32,
    /// Where new obstacles appear when the stream is (re)filled
    pub spawn_x: f32,
    pub gap_band: GapBand,
}

impl Layout {
    pub fn new(window: Vec2, config: &GameConfig) -> Self {
        // A minimized window reports 0x0; keep the math finite
        let window = window.max(Vec2::ONE);
        let scale = window / REFERENCE_WINDOW;

        let ground_size = GROUND_SIZE * scale;
        let ground_top = window.y - ground_size.y;

        let player_size = PLAYER_SIZE * scale;
        let player_origin = Vec2::new(
            window.x / 3.0 - player_size.x / 2.0,
            window.y / 2.0 - player_size.y / 2.0,
        );

        let obstacle = ObstacleGeometry {
            width: OBSTACLE_WIDTH * scale.x,
            gap: config.obstacle_gap * scale.y,
            height: window.y,
        };

        Self {
            window,
            scale,
            ground_size,
            ground_top,
            player_size,
            player_origin,
            obstacle,
            spacing: window.x / 2.0,
            spawn_x: window.x,
            gap_band: GapBand::from_playfield(ground_top, config.gap_margin_fraction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_window() {
        let layout = Layout::new(REFERENCE_WINDOW, &GameConfig::default());
        assert_eq!(layout.scale, Vec2::ONE);
        assert_eq!(layout.ground_top, 400.0);
        assert_eq!(layout.player_origin, Vec2::new(79.0, 244.0));
        assert_eq!(layout.obstacle.width, 52.0);
        assert_eq!(layout.obstacle.gap, 150.0);
        assert_eq!(layout.spacing, 144.0);
        assert_eq!(layout.gap_band, GapBand { lo: 100.0, hi: 300.0 });
    }

    #[test]
    fn test_scales_with_window() {
        let layout = Layout::new(REFERENCE_WINDOW * 2.0, &GameConfig::default());
        assert_eq!(layout.player_size, PLAYER_SIZE * 2.0);
        assert_eq!(layout.ground_top, 800.0);
        assert_eq!(layout.obstacle.height, 1024.0);
    }

    #[test]
    fn test_zero_window_stays_finite() {
        let layout = Layout::new(Vec2::ZERO, &GameConfig::default());
        assert!(layout.scale.is_finite());
        assert!(layout.gap_band.lo.is_finite());
    }
}
