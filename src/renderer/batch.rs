//! Fixed-capacity sprite batch

use super::sprite::SpriteInstance;
use crate::error::GameError;

/// Sprites composed for the next draw. Capacity is reserved up front so the
/// frame loop never allocates.
#[derive(Debug, Clone)]
pub struct SpriteBatch {
    sprites: Vec<SpriteInstance>,
    capacity: usize,
    dropped: usize,
}

impl SpriteBatch {
    pub fn with_capacity(capacity: usize) -> Result<Self, GameError> {
        let mut sprites = Vec::new();
        sprites
            .try_reserve_exact(capacity)
            .map_err(|_| GameError::BatchAllocation { capacity })?;
        Ok(Self {
            sprites,
            capacity,
            dropped: 0,
        })
    }

    pub fn reset(&mut self) {
        self.sprites.clear();
        self.dropped = 0;
    }

    /// Queue a sprite. Sprites beyond capacity are dropped.
    pub fn push(&mut self, sprite: SpriteInstance) {
        if self.sprites.len() < self.capacity {
            self.sprites.push(sprite);
        } else {
            if self.dropped == 0 {
                log::warn!("sprite batch full ({}), dropping sprites", self.capacity);
            }
            self.dropped += 1;
        }
    }

    #[inline]
    pub fn sprites(&self) -> &[SpriteInstance] {
        &self.sprites
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Sprites dropped since the last reset
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}
