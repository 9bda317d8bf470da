//! Fixed-step accumulator
//!
//! Frame deltas go in, at most one fixed step comes out per frame. Any
//! surplus stays in the accumulator and is paid out on later frames.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedStep {
    step: f32,
    elapsed: f32,
}

impl FixedStep {
    pub fn new(step: f32) -> Self {
        Self { step, elapsed: 0.0 }
    }

    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Accumulate `dt`. Returns true when a step is due, after draining
    /// exactly one step from the accumulator.
    pub fn advance(&mut self, dt: f32) -> bool {
        // Negative or NaN deltas would rewind the clock
        if dt > 0.0 {
            self.elapsed += dt;
        }
        if self.elapsed > self.step {
            self.elapsed -= self.step;
            true
        } else {
            false
        }
    }
}
