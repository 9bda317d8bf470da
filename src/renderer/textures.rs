//! Texture handles resolved once at load

use serde::{Deserialize, Serialize};

use super::Renderer;

/// Opaque handle issued by the host. `0` is the "no texture" sentinel the
/// host draws as nothing (or a placeholder).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextureHandle(u32);

impl TextureHandle {
    pub const NONE: TextureHandle = TextureHandle(0);

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

/// Every image the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKey {
    Background,
    Ground,
    PlayerSheet,
    Obstacle,
    /// "Get ready" banner
    Instructions1,
    /// Tap hint
    Instructions2,
    GameOver,
    Digit(u8),
}

const DIGIT_PATHS: [&str; 10] = [
    "resources/numbers/0.png",
    "resources/numbers/1.png",
    "resources/numbers/2.png",
    "resources/numbers/3.png",
    "resources/numbers/4.png",
    "resources/numbers/5.png",
    "resources/numbers/6.png",
    "resources/numbers/7.png",
    "resources/numbers/8.png",
    "resources/numbers/9.png",
];

impl TextureKey {
    /// All keys in load order
    pub fn all() -> impl Iterator<Item = TextureKey> {
        [
            TextureKey::Background,
            TextureKey::Ground,
            TextureKey::PlayerSheet,
            TextureKey::Obstacle,
            TextureKey::Instructions1,
            TextureKey::Instructions2,
            TextureKey::GameOver,
        ]
        .into_iter()
        .chain((0..10).map(TextureKey::Digit))
    }

    /// Asset path the host resolves
    pub fn path(self) -> &'static str {
        match self {
            TextureKey::Background => "resources/static/background-day.png",
            TextureKey::Ground => "resources/static/base.png",
            TextureKey::PlayerSheet => "resources/sheets/bird_red.png",
            TextureKey::Obstacle => "resources/static/pipe-green.png",
            TextureKey::Instructions1 => "resources/text/instructions_1.png",
            TextureKey::Instructions2 => "resources/text/instructions_2.png",
            TextureKey::GameOver => "resources/text/gameover.png",
            TextureKey::Digit(d) => DIGIT_PATHS[usize::from(d % 10)],
        }
    }

    fn slot(self) -> usize {
        match self {
            TextureKey::Background => 0,
            TextureKey::Ground => 1,
            TextureKey::PlayerSheet => 2,
            TextureKey::Obstacle => 3,
            TextureKey::Instructions1 => 4,
            TextureKey::Instructions2 => 5,
            TextureKey::GameOver => 6,
            TextureKey::Digit(d) => 7 + usize::from(d % 10),
        }
    }
}

const TEXTURE_COUNT: usize = 17;

/// Handle for every [`TextureKey`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureTable {
    handles: [TextureHandle; TEXTURE_COUNT],
}

impl Default for TextureTable {
    fn default() -> Self {
        Self {
            handles: [TextureHandle::NONE; TEXTURE_COUNT],
        }
    }
}

impl TextureTable {
    /// Ask the host for every texture. Missing images map to
    /// [`TextureHandle::NONE`] and are only logged.
    pub fn load(renderer: &mut impl Renderer) -> Self {
        let mut table = Self::default();
        for key in TextureKey::all() {
            let handle = match renderer.lookup(key.path()) {
                Some(handle) => handle,
                None => {
                    log::warn!("texture {} not found, drawing without it", key.path());
                    TextureHandle::NONE
                }
            };
            table.handles[key.slot()] = handle;
        }
        table
    }

    #[inline]
    pub fn get(&self, key: TextureKey) -> TextureHandle {
        self.handles[key.slot()]
    }

    /// Every non-sentinel handle, for release on unload
    pub fn handles(&self) -> impl Iterator<Item = TextureHandle> + '_ {
        self.handles.iter().copied().filter(|h| !h.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_have_distinct_slots_and_paths() {
        let slots: HashSet<_> = TextureKey::all().map(TextureKey::slot).collect();
        let paths: HashSet<_> = TextureKey::all().map(TextureKey::path).collect();
        assert_eq!(slots.len(), TEXTURE_COUNT);
        assert_eq!(paths.len(), TEXTURE_COUNT);
        assert!(slots.iter().all(|&s| s < TEXTURE_COUNT));
    }

    #[test]
    fn test_digit_paths() {
        assert_eq!(TextureKey::Digit(7).path(), "resources/numbers/7.png");
    }

    #[test]
    fn test_default_table_is_all_sentinels() {
        let table = TextureTable::default();
        assert_eq!(table.get(TextureKey::Obstacle), TextureHandle::NONE);
        assert_eq!(table.handles().count(), 0);
    }
}
