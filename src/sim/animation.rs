//! Flap animation frame cycler

use glam::Vec4;
use serde::{Deserialize, Serialize};

use crate::consts::FLAP_FRAMES;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlapAnimation {
    frame: usize,
    elapsed: f32,
    frame_time: f32,
}

impl FlapAnimation {
    pub fn new(frame_rate: f32) -> Self {
        Self {
            frame: 0,
            elapsed: 0.0,
            frame_time: 1.0 / frame_rate.max(f32::EPSILON),
        }
    }

    #[inline]
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Sheet texel rect (x, y, w, h) of the current frame
    pub fn view(&self) -> Vec4 {
        FLAP_FRAMES[self.frame]
    }

    /// Move to the next frame once a full frame time has passed; the
    /// frame switch itself consumes the update.
    pub fn advance(&mut self, dt: f32) {
        if self.elapsed > self.frame_time {
            self.frame = (self.frame + 1) % FLAP_FRAMES.len();
            self.elapsed = 0.0;
        } else if dt > 0.0 {
            self.elapsed += dt;
        }
    }
}
