//! Flappy headless runner
//!
//! Plays one session against the scripted host with a simple autopilot and
//! logs the result. Usage: `flappy-headless [seed] [frames]`.

use flappy_module::platform::{RecordingRenderer, ScriptedPlatform};
use flappy_module::sim::{GameEvent, GamePhase, GameState};
use flappy_module::{GameConfig, GameError, Session};

const FRAME_DT: f64 = 1.0 / 60.0;

/// Flap when the bird sinks below the middle of the next opening
fn wants_flap(state: &GameState) -> bool {
    let player = state.player_rect();
    let geom = &state.layout.obstacle;
    let target = state
        .obstacles
        .iter()
        .find(|o| o.right_edge(geom) > player.pos.x)
        .map_or(state.layout.player_origin.y, |o| o.gap_center);
    let center = player.pos.y + player.size.y / 2.0;
    center > target + geom.gap * 0.15 && state.player.body.vy >= 0.0
}

fn run(seed: Option<u64>, frames: u32) -> Result<(), GameError> {
    let config = GameConfig {
        seed,
        ..GameConfig::default()
    };
    let mut platform = ScriptedPlatform::default();
    let mut renderer = RecordingRenderer::new();
    let mut session = Session::load(config, &platform, &mut renderer)?;

    let mut flaps = 0u32;
    for frame in 0..frames {
        // Flaps need a fresh press, so never hold the button two frames
        if platform.button.is_pressed() {
            platform.release();
        } else if session.phase() == GamePhase::Setup || wants_flap(session.state()) {
            platform.press();
        }

        let events = session.update(&platform, FRAME_DT);
        session.draw(&mut renderer);
        flaps += events.iter().filter(|e| matches!(e, GameEvent::Flap)).count() as u32;

        if session.phase() == GamePhase::GameOver {
            log::info!("game over on frame {}", frame);
            break;
        }
    }

    log::info!(
        "final score {} after {} flaps ({} frames drawn)",
        session.score(),
        flaps,
        renderer.frames_drawn
    );
    session.unload(&mut renderer);
    Ok(())
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok());
    let frames = args.next().and_then(|s| s.parse().ok()).unwrap_or(60 * 60);

    if let Err(e) = run(seed, frames) {
        log::error!("{}", e);
        std::process::exit(e.status());
    }
}
