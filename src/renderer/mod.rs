//! Rendering module
//!
//! The module never talks to a GPU. It composes a batch of textured quads
//! per frame and hands it to the host through the [`Renderer`] trait.

pub mod batch;
pub mod scene;
pub mod sprite;
pub mod textures;

pub use batch::SpriteBatch;
pub use scene::{compose, sprite_budget};
pub use sprite::{SpriteInstance, place, place_flipped};
pub use textures::{TextureHandle, TextureKey, TextureTable};

/// Host-side texture store and sprite sink
pub trait Renderer {
    /// Resolve an asset path to a handle, `None` when the host has no such image
    fn lookup(&mut self, name: &str) -> Option<TextureHandle>;

    fn submit(&mut self, sprite: &SpriteInstance);

    /// Submit a whole batch. Hosts with an instanced path should override.
    fn submit_all(&mut self, sprites: &[SpriteInstance]) {
        for sprite in sprites {
            self.submit(sprite);
        }
    }

    fn release(&mut self, handle: TextureHandle);
}
