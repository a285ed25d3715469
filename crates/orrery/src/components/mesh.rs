use crate::api::types::TextureId;

/// Default tessellation for sphere meshes (both directions).
pub const DEFAULT_SPHERE_SEGMENTS: u32 = 32;

/// Textured, unlit sphere.
///
/// The host builds the actual geometry; Rust only carries the parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshComponent {
    /// Visual radius in world units. Unused by orbital motion.
    pub radius: f32,
    /// Horizontal segment count.
    pub width_segments: u32,
    /// Vertical segment count.
    pub height_segments: u32,
    /// Surface texture.
    pub texture: TextureId,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl Default for MeshComponent {
    fn default() -> Self {
        Self {
            radius: 1.0,
            width_segments: DEFAULT_SPHERE_SEGMENTS,
            height_segments: DEFAULT_SPHERE_SEGMENTS,
            texture: TextureId::default(),
            alpha: 1.0,
        }
    }
}

impl MeshComponent {
    pub fn sphere(radius: f32, texture: TextureId) -> Self {
        Self {
            radius,
            texture,
            ..Default::default()
        }
    }
}
