//! Two-tile rolling ground strip

use serde::{Deserialize, Serialize};

/// Left edges of the two ground tiles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollingGround {
    tiles: [f32; 2],
}

impl RollingGround {
    /// First tile flush with the left screen edge, second right behind it
    pub fn new(tile_width: f32) -> Self {
        Self {
            tiles: [0.0, tile_width],
        }
    }

    pub fn tiles(&self) -> [f32; 2] {
        self.tiles
    }

    /// Scroll both tiles left; a tile that has fully left the screen is
    /// placed right behind its partner.
    pub fn advance(&mut self, drift: f32, tile_width: f32) {
        for x in &mut self.tiles {
            *x -= drift;
        }
        for i in 0..2 {
            if self.tiles[i] + tile_width <= 0.0 {
                self.tiles[i] = self.tiles[1 - i] + tile_width;
            }
        }
    }
}
