//! Scene composition: game state -> sprite batch

use glam::Vec2;

use super::batch::SpriteBatch;
use super::sprite::{SpriteInstance, place, place_flipped};
use super::textures::{TextureKey, TextureTable};
use crate::consts::*;
use crate::sim::{GamePhase, GameState, Layout};

/// Sprites one frame can need with `obstacle_count` obstacles: two barriers
/// each, plus background, two ground tiles, the player, a full-width score
/// and the game-over banner.
pub fn sprite_budget(obstacle_count: usize) -> usize {
    const FIXED: usize = 1 + 2 + 1 + MAX_SCORE_DIGITS + 1;
    obstacle_count.saturating_mul(2).saturating_add(FIXED)
}

/// Digits in `u32::MAX`
const MAX_SCORE_DIGITS: usize = 10;

/// Rebuild `batch` from `state`. Draw order is back to front; the host also
/// gets a z per sprite.
pub fn compose(state: &GameState, textures: &TextureTable, batch: &mut SpriteBatch) {
    batch.reset();
    let layout = &state.layout;

    batch.push(SpriteInstance::new(
        textures.get(TextureKey::Background),
        place(Vec2::ZERO, layout.window, Z_BACKGROUND),
        1.0,
    ));

    if state.phase().is_empty() {
        return;
    }

    if state.obstacles_live() {
        let obstacle = textures.get(TextureKey::Obstacle);
        let geom = &layout.obstacle;
        for o in state.obstacles.iter() {
            let bottom = o.bottom_barrier(geom);
            let top = o.top_barrier(geom);
            batch.push(SpriteInstance::new(obstacle, place(bottom.pos, bottom.size, Z_OBSTACLE), 1.0));
            batch.push(SpriteInstance::new(obstacle, place_flipped(top.pos, top.size, Z_OBSTACLE), 1.0));
        }
    }

    let ground = textures.get(TextureKey::Ground);
    for x in state.ground.tiles() {
        batch.push(SpriteInstance::new(
            ground,
            place(Vec2::new(x, layout.ground_top), layout.ground_size, Z_GROUND),
            1.0,
        ));
    }

    let player = state.player_rect();
    batch.push(
        SpriteInstance::new(
            textures.get(TextureKey::PlayerSheet),
            place(player.pos, player.size, Z_PLAYER),
            1.0,
        )
        .with_view(state.player.animation.view(), PLAYER_SHEET_SIZE),
    );

    match state.phase() {
        GamePhase::Setup => push_instructions(layout, textures, batch),
        GamePhase::Active => push_score(state.score, layout, textures, batch),
        GamePhase::GameOver => {
            push_score(state.score, layout, textures, batch);
            let size = GAME_OVER_SIZE * layout.scale;
            let pos = Vec2::new((layout.window.x - size.x) / 2.0, layout.window.y / 3.0 - size.y / 2.0);
            batch.push(SpriteInstance::new(
                textures.get(TextureKey::GameOver),
                place(pos, size, Z_HUD),
                1.0,
            ));
        }
        GamePhase::Empty => {}
    }
}

fn push_instructions(layout: &Layout, textures: &TextureTable, batch: &mut SpriteBatch) {
    let banner = GET_READY_SIZE * layout.scale;
    let banner_pos = Vec2::new((layout.window.x - banner.x) / 2.0, layout.window.y / 5.0);
    batch.push(SpriteInstance::new(
        textures.get(TextureKey::Instructions1),
        place(banner_pos, banner, Z_HUD),
        1.0,
    ));

    let hint = TAP_HINT_SIZE * layout.scale;
    let hint_pos = Vec2::new(
        (layout.window.x - hint.x) / 2.0,
        layout.player_origin.y + layout.player_size.y,
    );
    batch.push(SpriteInstance::new(
        textures.get(TextureKey::Instructions2),
        place(hint_pos, hint, Z_HUD),
        1.0,
    ));
}

/// Score as centered digit glyphs near the top of the screen
fn push_score(score: u32, layout: &Layout, textures: &TextureTable, batch: &mut SpriteBatch) {
    let glyph = DIGIT_SIZE * layout.scale;
    let digits = digits(score);
    let width = glyph.x * digits.len() as f32;
    let mut x = (layout.window.x - width) / 2.0;
    let y = layout.window.y / 10.0;
    for d in digits {
        batch.push(SpriteInstance::new(
            textures.get(TextureKey::Digit(d)),
            place(Vec2::new(x, y), glyph, Z_HUD),
            1.0,
        ));
        x += glyph.x;
    }
}

/// Decimal digits, most significant first
fn digits(mut n: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(MAX_SCORE_DIGITS);
    loop {
        out.push((n % 10) as u8);
        n /= 10;
        if n == 0 {
            break;
        }
    }
    out.reverse();
    out
}
