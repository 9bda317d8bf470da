//! Game state and core simulation types
//!
//! Everything one loaded session mutates lives in [`GameState`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::animation::FlapAnimation;
use super::clock::FixedStep;
use super::collision::{CollisionKind, Rect};
use super::ground::RollingGround;
use super::kinematics::{Body, Integrator};
use super::layout::Layout;
use super::obstacles::{GapSampler, ObstacleStream};
use super::phase::{GamePhase, PhaseSlots};
use super::score::ScoreTracker;
use crate::config::GameConfig;

/// Pointer button level as polled from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ButtonState {
    #[default]
    Released,
    Pressed,
}

impl ButtonState {
    #[inline]
    pub fn is_pressed(self) -> bool {
        self == ButtonState::Pressed
    }
}

/// Rising-edge detector over polled button levels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonEdge {
    previous: ButtonState,
}

impl ButtonEdge {
    /// True when released last poll and pressed now
    pub fn rising(&mut self, now: ButtonState) -> bool {
        let edge = now.is_pressed() && !self.previous.is_pressed();
        self.previous = now;
        edge
    }
}

/// The bird
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Fixed horizontal position (left edge)
    pub x: f32,
    pub body: Body,
    pub integrator: Integrator,
    pub animation: FlapAnimation,
}

impl Player {
    pub fn new(layout: &Layout, config: &GameConfig) -> Self {
        Self {
            x: layout.player_origin.x,
            body: Body::at_rest(layout.player_origin.y - config.spawn_offset),
            integrator: Integrator::new(config.fixed_step),
            animation: FlapAnimation::new(config.flap_frame_rate),
        }
    }

    pub fn rect(&self, size: Vec2) -> Rect {
        Rect::new(Vec2::new(self.x, self.body.y), size)
    }
}

/// Collision latched during play, counting presented frames
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Impact {
    pub kind: CollisionKind,
    /// Frames presented since the impact
    pub frames: u32,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    /// Seed the obstacle layout was drawn from
    pub seed: u64,
    pub layout: Layout,
    pub phases: PhaseSlots,
    pub player: Player,
    pub obstacles: ObstacleStream,
    pub sampler: GapSampler,
    pub ground: RollingGround,
    /// Paces ground and obstacle drift
    pub scroll: FixedStep,
    pub score: u32,
    pub score_tracker: ScoreTracker,
    pub button: ButtonEdge,
    pub impact: Option<Impact>,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// New session for a window of size `window`. The machine is forced
    /// straight into setup.
    pub fn new(config: GameConfig, window: Vec2, seed: u64) -> Self {
        let layout = Layout::new(window, &config);
        let mut sampler = GapSampler::new(seed);
        let obstacles = ObstacleStream::filled(
            config.obstacle_count,
            layout.spawn_x,
            layout.spacing,
            layout.gap_band,
            &mut sampler,
        );

        let mut phases = PhaseSlots::new();
        phases.request(GamePhase::Setup);
        phases.commit();

        Self {
            seed,
            player: Player::new(&layout, &config),
            ground: RollingGround::new(layout.ground_size.x),
            scroll: FixedStep::new(config.fixed_step),
            obstacles,
            sampler,
            layout,
            phases,
            score: 0,
            score_tracker: ScoreTracker::new(),
            button: ButtonEdge::default(),
            impact: None,
            time_ticks: 0,
            config,
        }
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phases.current()
    }

    pub fn player_rect(&self) -> Rect {
        self.player.rect(self.layout.player_size)
    }

    /// Pick up a new window size
    pub fn relayout(&mut self, window: Vec2) {
        if window.max(Vec2::ONE) != self.layout.window {
            self.layout = Layout::new(window, &self.config);
            self.player.x = self.layout.player_origin.x;
            self.obstacles.set_spawn_x(self.layout.spawn_x);
            // Last frame's distance was measured from the old player column
            self.score_tracker.clear();
            log::info!("window resized to {}x{}", self.layout.window.x, self.layout.window.y);
        }
    }

    /// Whether obstacles scroll, collide and get drawn in the current phase
    pub fn obstacles_live(&self) -> bool {
        match self.phase() {
            GamePhase::Setup => self.config.scroll_obstacles_in_setup,
            GamePhase::Active | GamePhase::GameOver => true,
            GamePhase::Empty => false,
        }
    }
}
