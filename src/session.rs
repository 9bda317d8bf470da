//! One loaded game session
//!
//! Owns the simulation state, the resolved texture table and the sprite
//! batch, and runs the per-frame order: tick, then compose, then draw.

use crate::config::GameConfig;
use crate::error::GameError;
use crate::platform::Platform;
use crate::renderer::{Renderer, SpriteBatch, TextureTable, compose, sprite_budget};
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

#[derive(Debug)]
pub struct Session {
    state: GameState,
    textures: TextureTable,
    batch: SpriteBatch,
}

impl Session {
    /// Allocate the batch, resolve textures and start in setup. Fails before
    /// any game state exists when the batch cannot be allocated.
    ///
    /// The batch never holds fewer sprites than a frame with every obstacle
    /// on screen needs, whatever `batch_capacity` says.
    pub fn load(
        config: GameConfig,
        platform: &impl Platform,
        renderer: &mut impl Renderer,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let capacity = config.batch_capacity.max(sprite_budget(config.obstacle_count));
        let mut batch = SpriteBatch::with_capacity(capacity)?;
        let textures = TextureTable::load(renderer);

        let seed = config.seed.unwrap_or_else(rand::random);
        log::info!("session loaded with seed {}, {} sprite slots", seed, batch.capacity());

        let state = GameState::new(config, platform.window_dims(), seed);
        compose(&state, &textures, &mut batch);

        Ok(Self {
            state,
            textures,
            batch,
        })
    }

    /// One host frame. `dt` is in seconds.
    pub fn update(&mut self, platform: &impl Platform, dt: f64) -> Vec<GameEvent> {
        let input = TickInput {
            window: platform.window_dims(),
            button: platform.pointer_button(),
        };
        let events = tick(&mut self.state, &input, dt as f32);
        for event in &events {
            match event {
                GameEvent::PhaseChanged { from, to } => log::info!("phase {} -> {}", from, to),
                GameEvent::GameOverRequested { score } => log::info!("game over, score {}", score),
                _ => {}
            }
        }
        compose(&self.state, &self.textures, &mut self.batch);
        events
    }

    /// Hand the last composed batch to the host
    pub fn draw(&self, renderer: &mut impl Renderer) {
        renderer.submit_all(self.batch.sprites());
    }

    /// Release every texture handle this session resolved
    pub fn unload(self, renderer: &mut impl Renderer) {
        for handle in self.textures.handles() {
            renderer.release(handle);
        }
        log::info!(
            "session unloaded after {} ticks, score {}",
            self.state.time_ticks,
            self.state.score
        );
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn textures(&self) -> &TextureTable {
        &self.textures
    }

    pub fn batch(&self) -> &SpriteBatch {
        &self.batch
    }
}
