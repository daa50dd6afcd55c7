//! Rendering hand-off
//!
//! The engine does not talk to a GPU. Each tick it describes what to draw as
//! [`FrameData`]: the camera matrices plus one [`RenderItem`] per visible
//! entity, in scene insertion order. A renderer draws every item as a unit
//! quad transformed by `projection * view * model`, sampling its texture
//! through the item's frame rectangle, or filling it with the item's color
//! when it has no texture.

pub mod camera;

pub use camera::{Camera, FollowPolicy};

use crate::animation::FrameRect;
use crate::assets::TextureHandle;
use crate::foundation::math::Mat4;
use crate::scene::EntityId;

/// Draw description for one entity
#[derive(Debug, Clone, PartialEq)]
pub struct RenderItem {
    /// Entity this item was built from
    pub entity: EntityId,
    /// Unit quad to world: translate(position) * scale(size)
    pub model: Mat4,
    /// Texture to sample; `None` draws a flat colored quad
    pub texture: Option<TextureHandle>,
    /// Texture-space rectangle (offset + scale) for the current frame
    pub uv: FrameRect,
    /// RGBA tint, or fill color for untextured quads
    pub color: [f32; 4],
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameData {
    /// World-to-screen transform
    pub view: Mat4,
    /// Screen-to-NDC transform
    pub projection: Mat4,
    /// Visible entities in draw order
    pub items: Vec<RenderItem>,
}
