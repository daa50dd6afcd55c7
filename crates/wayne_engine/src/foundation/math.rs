//! Math utilities and types
//!
//! 2D scene math on top of nalgebra. World space is Y-down with a top-left
//! screen origin, matching the orthographic projection used by the camera.

pub use nalgebra::{Matrix4, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// Extension trait for Mat4 with 2D scene helpers
pub trait Mat4Ext {
    /// Translation by a 2D offset (z untouched)
    fn translation_2d(offset: Vec2) -> Mat4;

    /// Model matrix for a unit quad: translate to `position`, then scale by `size`
    fn model_2d(position: Vec2, size: Vec2) -> Mat4;

    /// Orthographic projection of `[0, width] x [height, 0]` onto NDC with
    /// depth range `-1..1`. Y is inverted so that (0, 0) is the top-left corner.
    fn ortho_top_left(width: f32, height: f32) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn translation_2d(offset: Vec2) -> Mat4 {
        Mat4::new_translation(&Vec3::new(offset.x, offset.y, 0.0))
    }

    fn model_2d(position: Vec2, size: Vec2) -> Mat4 {
        Mat4::translation_2d(position) * Mat4::new_nonuniform_scaling(&Vec3::new(size.x, size.y, 1.0))
    }

    fn ortho_top_left(width: f32, height: f32) -> Mat4 {
        // new_orthographic asserts on degenerate boxes; a minimized viewport must not panic
        let width = width.max(1.0);
        let height = height.max(1.0);
        let (left, right, bottom, top, near, far) = (0.0, width, height, 0.0, -1.0_f32, 1.0_f32);

        Mat4::new(
            2.0 / (right - left), 0.0, 0.0, -(right + left) / (right - left),
            0.0, 2.0 / (top - bottom), 0.0, -(top + bottom) / (top - bottom),
            0.0, 0.0, -2.0 / (far - near), -(far + near) / (far - near),
            0.0, 0.0, 0.0, 1.0,
        )
    }
}

/// Apply a matrix to a 2D point (z = 0, w = 1)
pub fn transform_point_2d(matrix: &Mat4, point: Vec2) -> Vec2 {
    let p = matrix.transform_point(&nalgebra::Point3::new(point.x, point.y, 0.0));
    Vec2::new(p.x, p.y)
}
