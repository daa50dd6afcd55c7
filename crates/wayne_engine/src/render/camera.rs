//! # 2D Follow Camera
//!
//! Maps world space to screen space for a top-left-origin, Y-down viewport.
//!
//! ## Design Principles
//! - **Library-agnostic**: no graphics API in camera math; matrices go to the
//!   renderer as plain [`Mat4`] values
//! - **Explicit follow policy**: the camera snaps to its target unless a
//!   smoothing policy is configured

use serde::{Serialize, Deserialize};

use crate::foundation::math::{transform_point_2d, Mat4, Mat4Ext, Vec2};

/// How [`Camera::follow`] moves toward its target
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum FollowPolicy {
    /// Jump straight to the target every tick
    #[default]
    Snap,
    /// Exponential decay toward the target
    ///
    /// After `time_constant` seconds about 63% of the remaining distance is
    /// covered. A non-positive time constant behaves like [`FollowPolicy::Snap`].
    Smooth {
        /// Decay time constant in seconds
        time_constant: f32,
    },
}

/// 2D camera centered on a world position
///
/// The view transform puts `position` at the center of the viewport; the
/// projection spans `(0, 0)` to `(viewport_width, viewport_height)` with the
/// Y axis pointing down.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// World position shown at the viewport center
    pub position: Vec2,

    /// Viewport width in pixels
    pub viewport_width: f32,

    /// Viewport height in pixels
    pub viewport_height: f32,

    /// Follow behaviour
    pub policy: FollowPolicy,
}

impl Camera {
    /// Create a snapping camera at `position` for a viewport
    pub fn new(position: Vec2, viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            position,
            viewport_width,
            viewport_height,
            policy: FollowPolicy::Snap,
        }
    }

    /// Use a different follow policy
    pub fn with_policy(mut self, policy: FollowPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Update viewport dimensions after a resize
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        if (self.viewport_width - width).abs() > f32::EPSILON || (self.viewport_height - height).abs() > f32::EPSILON {
            log::info!(
                "Camera viewport changed: {}x{} -> {}x{}",
                self.viewport_width, self.viewport_height, width, height
            );
        }
        self.viewport_width = width;
        self.viewport_height = height;
    }

    /// Track `target` for one tick of `delta_time` seconds
    ///
    /// With [`FollowPolicy::Snap`] the position becomes exactly `target` and
    /// `delta_time` is not used.
    pub fn follow(&mut self, target: Vec2, delta_time: f32) {
        match self.policy {
            FollowPolicy::Smooth { time_constant } if time_constant > 0.0 => {
                let alpha = 1.0 - (-delta_time.max(0.0) / time_constant).exp();
                self.position += (target - self.position) * alpha;
            }
            _ => self.position = target,
        }
        log::trace!("Camera position: ({:.2}, {:.2})", self.position.x, self.position.y);
    }

    /// Viewport center in screen pixels
    pub fn screen_center(&self) -> Vec2 {
        Vec2::new(self.viewport_width / 2.0, self.viewport_height / 2.0)
    }

    /// World-to-screen translation putting `position` at the viewport center
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::translation_2d(self.screen_center() - self.position)
    }

    /// Orthographic projection of `[0, width] x [height, 0]` to NDC
    pub fn projection_matrix(&self, width: f32, height: f32) -> Mat4 {
        Mat4::ortho_top_left(width, height)
    }

    /// Projection for the camera's own viewport
    pub fn viewport_projection(&self) -> Mat4 {
        self.projection_matrix(self.viewport_width, self.viewport_height)
    }

    /// Screen pixel where a world point is drawn
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        transform_point_2d(&self.view_matrix(), world)
    }

    /// World point under a screen pixel
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen - self.screen_center() + self.position
    }
}

impl Default for Camera {
    /// Snapping camera at the origin with an 800x600 viewport
    fn default() -> Self {
        Self::new(Vec2::zeros(), 800.0, 600.0)
    }
}
