//! Vertical kinematics of the player
//!
//! Velocity Verlet on a single axis, stepped at a fixed rate regardless of
//! the host's frame time.

use serde::{Deserialize, Serialize};

use super::clock::FixedStep;

/// Acceleration law driving the player (+y is down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AccelerationLaw {
    /// Spring back toward the rest height: `a = -k (y - y0)`
    Harmonic { k: f32 },
    /// Constant pull: `a = g`
    Gravity { g: f32 },
}

impl AccelerationLaw {
    #[inline]
    pub fn eval(&self, y: f32, y0: f32) -> f32 {
        match *self {
            AccelerationLaw::Harmonic { k } => -k * (y - y0),
            AccelerationLaw::Gravity { g } => g,
        }
    }
}

/// Position and velocity on the vertical axis
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Body {
    pub y: f32,
    pub vy: f32,
}

impl Body {
    pub fn at_rest(y: f32) -> Self {
        Self { y, vy: 0.0 }
    }
}

/// One Velocity Verlet step of length `h`
pub fn verlet_step(body: &mut Body, y0: f32, h: f32, law: AccelerationLaw) {
    let a_n = law.eval(body.y, y0);
    body.y += body.vy * h + 0.5 * a_n * h * h;
    let a_np1 = law.eval(body.y, y0);
    body.vy += 0.5 * (a_n + a_np1) * h;
}

/// Fixed-step integrator owning its own time accumulator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Integrator {
    clock: FixedStep,
}

impl Integrator {
    pub fn new(fixed_step: f32) -> Self {
        Self {
            clock: FixedStep::new(fixed_step),
        }
    }

    /// Advance `body` by frame time `dt` around rest height `y0`.
    ///
    /// An `impulse` replaces the velocity immediately, whether or not a step
    /// is due this frame. Returns true when a physics step was taken.
    pub fn integrate(
        &mut self,
        body: &mut Body,
        y0: f32,
        dt: f32,
        impulse: Option<f32>,
        law: AccelerationLaw,
    ) -> bool {
        if let Some(vy) = impulse {
            body.vy = vy;
        }

        if self.clock.advance(dt) {
            verlet_step(body, y0, self.clock.step(), law);
            true
        } else {
            false
        }
    }
}
