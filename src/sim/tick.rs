//! Per-frame simulation tick
//!
//! Commits any pending phase, then runs the phase's update. Composing the
//! frame's sprites happens afterwards, in the renderer.

use glam::Vec2;

use super::collision::{self, CollisionKind};
use super::kinematics::AccelerationLaw;
use super::phase::GamePhase;
use super::state::{ButtonState, GameState, Impact};

/// Host input polled for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Window size in pixels
    pub window: Vec2,
    /// Pointer button level
    pub button: ButtonState,
}

/// Things that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    PhaseChanged { from: GamePhase, to: GamePhase },
    StartRequested,
    Flap,
    ObstacleEvicted,
    ObstaclesSpawned { count: usize },
    Scored { score: u32 },
    Collision { kind: CollisionKind },
    GameOverRequested { score: u32 },
}

/// Advance the game by one host frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if let Some((from, to)) = state.phases.commit() {
        events.push(GameEvent::PhaseChanged { from, to });
    }

    state.relayout(input.window);
    state.time_ticks += 1;

    match state.phase() {
        GamePhase::Setup => tick_setup(state, input, dt, &mut events),
        GamePhase::Active => tick_active(state, input, dt, &mut events),
        // Frozen: the last pose stays on screen
        GamePhase::GameOver | GamePhase::Empty => {}
    }

    events
}

fn tick_setup(state: &mut GameState, input: &TickInput, dt: f32, events: &mut Vec<GameEvent>) {
    let drift = scroll_drift(state, dt);
    state.ground.advance(drift, state.layout.ground_size.x);
    if state.config.scroll_obstacles_in_setup {
        advance_obstacles(state, drift, events);
    }

    state.player.animation.advance(dt);
    let law = AccelerationLaw::Harmonic {
        k: state.config.harmonic_stiffness,
    };
    let rest_y = state.layout.player_origin.y;
    state
        .player
        .integrator
        .integrate(&mut state.player.body, rest_y, dt, None, law);

    if input.button.is_pressed()
        && state.phases.pending() != GamePhase::Active
        && state.phases.request(GamePhase::Active)
    {
        events.push(GameEvent::StartRequested);
    }
}

fn tick_active(state: &mut GameState, input: &TickInput, dt: f32, events: &mut Vec<GameEvent>) {
    // After an impact the world holds still while the grace frames play out
    if state.impact.is_none() {
        let drift = scroll_drift(state, dt);
        state.ground.advance(drift, state.layout.ground_size.x);
        advance_obstacles(state, drift, events);

        let flap = state.button.rising(input.button);
        if flap {
            events.push(GameEvent::Flap);
        }
        let impulse = flap.then_some(state.config.flap_impulse);
        let law = AccelerationLaw::Gravity {
            g: state.config.gravity,
        };
        let rest_y = state.layout.player_origin.y;
        state
            .player
            .integrator
            .integrate(&mut state.player.body, rest_y, dt, impulse, law);
        state.player.animation.advance(dt);

        let player = state.player_rect();
        match collision::detect(
            &player,
            state.layout.ground_top,
            state.obstacles.iter(),
            &state.layout.obstacle,
        ) {
            Some(kind) => {
                log::debug!("collision with {:?} at y={:.1}", kind, player.pos.y);
                state.impact = Some(Impact { kind, frames: 0 });
                events.push(GameEvent::Collision { kind });
            }
            None => {
                if let Some(front) = state.obstacles.front() {
                    let right_edge = front.right_edge(&state.layout.obstacle);
                    if state
                        .score_tracker
                        .update(right_edge, state.player.x, &mut state.score)
                    {
                        events.push(GameEvent::Scored { score: state.score });
                    }
                }
            }
        }
    }

    let grace = state.config.impact_grace_frames;
    if let Some(impact) = state.impact.as_mut() {
        if impact.frames < grace {
            impact.frames += 1;
        } else if state.phases.pending() != GamePhase::GameOver
            && state.phases.request(GamePhase::GameOver)
        {
            events.push(GameEvent::GameOverRequested { score: state.score });
        }
    }
}

/// Horizontal scroll for this frame: one fixed step's worth when the scroll
/// clock ticks, nothing otherwise
fn scroll_drift(state: &mut GameState, dt: f32) -> f32 {
    if state.scroll.advance(dt) {
        state.config.drift_speed * state.layout.scale.x * state.scroll.step()
    } else {
        0.0
    }
}

fn advance_obstacles(state: &mut GameState, drift: f32, events: &mut Vec<GameEvent>) {
    let geom = state.layout.obstacle;
    if state.obstacles.advance(drift, &geom).is_some() {
        events.push(GameEvent::ObstacleEvicted);
    }
    let count = state
        .obstacles
        .replenish(state.layout.spacing, state.layout.gap_band, &mut state.sampler);
    if count > 0 {
        events.push(GameEvent::ObstaclesSpawned { count });
    }
}
