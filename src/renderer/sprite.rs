//! Sprite instances handed to the host

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3, Vec4};

use super::textures::TextureHandle;

/// One textured quad: model matrix over the unit square, texture, opacity
/// and the sub-rectangle of the texture to sample (normalized UVs).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    /// Column-major model matrix
    pub transform: [f32; 16],
    /// u, v, width, height in [0, 1]
    pub uv_rect: [f32; 4],
    pub texture: u32,
    pub opacity: f32,
}

/// Size of one instance as laid out for the host
pub const SPRITE_INSTANCE_SIZE: usize = std::mem::size_of::<SpriteInstance>();

/// Samples the whole texture
pub const FULL_UV: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

impl SpriteInstance {
    pub fn new(texture: TextureHandle, transform: Mat4, opacity: f32) -> Self {
        Self {
            transform: transform.to_cols_array(),
            uv_rect: FULL_UV,
            texture: texture.raw(),
            opacity,
        }
    }

    /// Sample only the texel rect `view` (x, y, w, h) of a `sheet_size` sheet
    pub fn with_view(mut self, view: Vec4, sheet_size: Vec2) -> Self {
        self.uv_rect = [
            view.x / sheet_size.x,
            view.y / sheet_size.y,
            view.z / sheet_size.x,
            view.w / sheet_size.y,
        ];
        self
    }

    pub fn texture(&self) -> TextureHandle {
        TextureHandle::from_raw(self.texture)
    }

    pub fn model(&self) -> Mat4 {
        Mat4::from_cols_array(&self.transform)
    }

    /// Top-left corner in screen space
    pub fn position(&self) -> Vec2 {
        self.model().transform_point3(Vec3::ZERO).truncate()
    }
}

/// Model matrix placing the unit quad at `pos` with `size`, on layer `z`
pub fn place(pos: Vec2, size: Vec2, z: f32) -> Mat4 {
    Mat4::from_translation(pos.extend(z)) * Mat4::from_scale(size.extend(1.0))
}

/// Like [`place`], but rotated half a turn inside its own rect. Used for
/// barriers hanging from the top of the screen.
pub fn place_flipped(pos: Vec2, size: Vec2, z: f32) -> Mat4 {
    Mat4::from_translation((pos + size).extend(z))
        * Mat4::from_rotation_z(std::f32::consts::PI)
        * Mat4::from_scale(size.extend(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corners(model: Mat4) -> (Vec2, Vec2) {
        let a = model.transform_point3(Vec3::ZERO).truncate();
        let b = model.transform_point3(Vec3::new(1.0, 1.0, 0.0)).truncate();
        (a.min(b), a.max(b))
    }

    #[test]
    fn test_instance_is_tightly_packed() {
        assert_eq!(SPRITE_INSTANCE_SIZE, 22 * 4);
    }

    #[test]
    fn test_place_covers_rect() {
        let (lo, hi) = corners(place(Vec2::new(10.0, 20.0), Vec2::new(34.0, 24.0), 0.3));
        assert!(lo.abs_diff_eq(Vec2::new(10.0, 20.0), 1e-4));
        assert!(hi.abs_diff_eq(Vec2::new(44.0, 44.0), 1e-4));
    }

    #[test]
    fn test_flipped_covers_same_rect() {
        let pos = Vec2::new(100.0, -300.0);
        let size = Vec2::new(52.0, 512.0);
        let (lo, hi) = corners(place_flipped(pos, size, 0.15));
        assert!(lo.abs_diff_eq(pos, 1e-3));
        assert!(hi.abs_diff_eq(pos + size, 1e-3));
        // The quad's origin ends up at the far corner
        let origin = place_flipped(pos, size, 0.15).transform_point3(Vec3::ZERO).truncate();
        assert!(origin.abs_diff_eq(pos + size, 1e-3));
    }

    #[test]
    fn test_sheet_view_uv() {
        let sprite = SpriteInstance::new(TextureHandle::from_raw(3), Mat4::IDENTITY, 1.0)
            .with_view(Vec4::new(36.0, 1.0, 34.0, 24.0), Vec2::new(141.0, 26.0));
        assert!((sprite.uv_rect[0] - 36.0 / 141.0).abs() < 1e-6);
        assert!((sprite.uv_rect[3] - 24.0 / 26.0).abs() < 1e-6);
        assert_eq!(sprite.texture(), TextureHandle::from_raw(3));
    }
}
