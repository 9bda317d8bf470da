//! Headless host used by tests and the demo binary

use std::collections::{HashMap, HashSet};

use glam::Vec2;

use super::{ButtonState, Platform};
use crate::consts::REFERENCE_WINDOW;
use crate::renderer::{Renderer, SpriteInstance, TextureHandle, TextureKey};

/// Fixed window with a button the caller drives
#[derive(Debug, Clone)]
pub struct ScriptedPlatform {
    pub window: Vec2,
    pub button: ButtonState,
}

impl Default for ScriptedPlatform {
    fn default() -> Self {
        Self {
            window: REFERENCE_WINDOW,
            button: ButtonState::Released,
        }
    }
}

impl ScriptedPlatform {
    pub fn press(&mut self) {
        self.button = ButtonState::Pressed;
    }

    pub fn release(&mut self) {
        self.button = ButtonState::Released;
    }
}

impl Platform for ScriptedPlatform {
    fn window_dims(&self) -> Vec2 {
        self.window
    }

    fn pointer_button(&self) -> ButtonState {
        self.button
    }
}

/// Texture store that knows every game asset (unless told otherwise) and
/// records what gets drawn and released
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    known: HashMap<String, TextureHandle>,
    missing: HashSet<String>,
    /// Sprites from the most recent draw
    pub frame: Vec<SpriteInstance>,
    pub frames_drawn: usize,
    pub released: Vec<TextureHandle>,
}

impl RecordingRenderer {
    /// Registers every game texture with handles starting at 1
    pub fn new() -> Self {
        let mut renderer = Self::default();
        for (i, key) in TextureKey::all().enumerate() {
            renderer
                .known
                .insert(key.path().to_owned(), TextureHandle::from_raw(i as u32 + 1));
        }
        renderer
    }

    /// Make lookups of `path` fail
    pub fn without(mut self, path: &str) -> Self {
        self.missing.insert(path.to_owned());
        self
    }
}

impl Renderer for RecordingRenderer {
    fn lookup(&mut self, name: &str) -> Option<TextureHandle> {
        if self.missing.contains(name) {
            return None;
        }
        self.known.get(name).copied()
    }

    fn submit(&mut self, sprite: &SpriteInstance) {
        self.frame.push(*sprite);
    }

    fn submit_all(&mut self, sprites: &[SpriteInstance]) {
        self.frame.clear();
        self.frame.extend_from_slice(sprites);
        self.frames_drawn += 1;
    }

    fn release(&mut self, handle: TextureHandle) {
        self.released.push(handle);
    }
}
