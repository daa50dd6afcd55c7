//! Scene entities
//!
//! An entity is a plain data record: a center position, a size, an optional
//! texture and animation, a fill color and a set of flags. Behaviour lives in
//! [`Scene`](super::Scene), which owns every entity in a generational arena.

use bitflags::bitflags;
use serde::{Serialize, Deserialize};

use crate::assets::TextureHandle;
use crate::foundation::collections::new_key_type;
use crate::foundation::math::Vec2;
use crate::physics::Aabb;

new_key_type! {
    /// Generation-checked entity identifier
    pub struct EntityId;

    /// Generation-checked animation identifier
    pub struct AnimationId;
}

bitflags! {
    /// Per-entity behaviour switches
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct EntityFlags: u32 {
        /// Blocks the controlled entity's movement
        const OBSTACLE = 1 << 0;
        /// Left out of render frame data
        const HIDDEN = 1 << 1;
    }
}

/// Opaque white
pub const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// One object in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Center position in world units
    pub position: Vec2,
    size: Vec2,
    /// Texture to draw; `None` draws a colored quad
    pub texture: Option<TextureHandle>,
    /// RGBA tint, or fill color without a texture
    pub color: [f32; 4],
    pub(crate) animation: Option<AnimationId>,
    /// Behaviour flags
    pub flags: EntityFlags,
}

impl Entity {
    /// Untextured white entity; negative size components become zero
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size: clamp_size(size),
            texture: None,
            color: WHITE,
            animation: None,
            flags: EntityFlags::empty(),
        }
    }

    /// Draw with `texture`
    pub fn with_texture(mut self, texture: TextureHandle) -> Self {
        self.texture = Some(texture);
        self
    }

    /// Tint or fill with `color`
    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    /// Add `flags`
    pub fn with_flags(mut self, flags: EntityFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Mark as a movement obstacle
    pub fn obstacle(self) -> Self {
        self.with_flags(EntityFlags::OBSTACLE)
    }

    /// Size in world units
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Resize; negative components become zero
    pub fn set_size(&mut self, size: Vec2) {
        self.size = clamp_size(size);
    }

    /// Animation driving this entity's frame, if any
    pub fn animation(&self) -> Option<AnimationId> {
        self.animation
    }

    /// Bounding box at the current position
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.position, self.size)
    }

    /// Whether this entity blocks movement
    pub fn is_obstacle(&self) -> bool {
        self.flags.contains(EntityFlags::OBSTACLE)
    }

    /// Whether this entity is drawn
    pub fn is_visible(&self) -> bool {
        !self.flags.contains(EntityFlags::HIDDEN)
    }

    /// Strict bounding-box overlap with `other`
    pub fn overlaps(&self, other: &Entity) -> bool {
        self.bounds().intersects(&other.bounds())
    }
}

fn clamp_size(size: Vec2) -> Vec2 {
    if size.x < 0.0 || size.y < 0.0 {
        log::warn!("Negative entity size ({}, {}) clamped to zero", size.x, size.y);
    }
    Vec2::new(size.x.max(0.0), size.y.max(0.0))
}
