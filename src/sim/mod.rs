//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod animation;
pub mod clock;
pub mod collision;
pub mod ground;
pub mod kinematics;
pub mod layout;
pub mod obstacles;
pub mod phase;
pub mod score;
pub mod state;
pub mod tick;

pub use animation::FlapAnimation;
pub use clock::FixedStep;
pub use collision::{CollisionKind, Rect, rects_overlap};
pub use ground::RollingGround;
pub use kinematics::{AccelerationLaw, Body, Integrator};
pub use layout::Layout;
pub use obstacles::{GapBand, GapSampler, Obstacle, ObstacleGeometry, ObstacleStream};
pub use phase::{GamePhase, PhaseSlots};
pub use score::ScoreTracker;
pub use state::{ButtonEdge, ButtonState, GameState, Impact, Player};
pub use tick::{GameEvent, TickInput, tick};
