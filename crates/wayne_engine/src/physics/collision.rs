//! Axis-aligned bounding boxes and the overlap test
//!
//! Boxes are center-based: an entity at `center` with `size` covers
//! `[center - size / 2, center + size / 2]` on both axes.

use crate::foundation::math::Vec2;

/// Axis-aligned bounding box stored as center + full size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Center of the box in world space
    pub center: Vec2,
    /// Full width and height
    pub size: Vec2,
}

impl Aabb {
    /// Create a box from its center and full size
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    /// Same box moved to a new center
    pub fn at(&self, center: Vec2) -> Self {
        Self { center, size: self.size }
    }

    /// Left edge (minimum X)
    pub fn left(&self) -> f32 {
        self.center.x - self.size.x / 2.0
    }

    /// Right edge (maximum X)
    pub fn right(&self) -> f32 {
        self.center.x + self.size.x / 2.0
    }

    /// Top edge (minimum Y, screen-space up)
    pub fn top(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    /// Bottom edge (maximum Y)
    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }

    /// Whether the box covers no area (a zero or negative extent on either axis)
    pub fn is_empty(&self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Strict overlap with another box
    ///
    /// Open intervals: boxes whose edges only touch do not overlap, and an
    /// empty box never overlaps anything, even when it sits inside another.
    pub fn intersects(&self, other: &Aabb) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let overlap_x = self.left() < other.right() && self.right() > other.left();
        let overlap_y = self.top() < other.bottom() && self.bottom() > other.top();
        overlap_x && overlap_y
    }
}

/// Collision test between two boxes; symmetric in its arguments
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.intersects(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(x: f32, y: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::new(1.0, 1.0))
    }

    #[test]
    fn test_edges() {
        let b = Aabb::new(Vec2::new(10.0, 20.0), Vec2::new(4.0, 6.0));
        assert_eq!(b.left(), 8.0);
        assert_eq!(b.right(), 12.0);
        assert_eq!(b.top(), 17.0);
        assert_eq!(b.bottom(), 23.0);
    }

    #[test]
    fn test_overlapping_boxes() {
        assert!(overlaps(&unit(0.0, 0.0), &unit(0.5, 0.5)));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        assert!(!overlaps(&unit(0.0, 0.0), &unit(1.0, 0.0)));
        assert!(!overlaps(&unit(0.0, 0.0), &unit(0.0, 1.0)));
        assert!(!overlaps(&unit(0.0, 0.0), &unit(1.0, 1.0)));
    }

    #[test]
    fn test_overlap_on_one_axis_only() {
        // X intervals overlap, Y intervals are apart
        assert!(!overlaps(&unit(0.0, 0.0), &unit(0.2, 3.0)));
    }

    #[test]
    fn test_symmetry() {
        let boxes = [
            unit(0.0, 0.0),
            unit(1.0, 0.0),
            unit(0.4, -0.3),
            Aabb::new(Vec2::new(2.0, 2.0), Vec2::new(5.0, 0.5)),
            Aabb::new(Vec2::new(0.0, 0.0), Vec2::zeros()),
        ];
        for a in &boxes {
            for b in &boxes {
                assert_eq!(overlaps(a, b), overlaps(b, a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_zero_size_never_collides() {
        let point = Aabb::new(Vec2::new(0.0, 0.0), Vec2::zeros());
        let big = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0));

        assert!(!overlaps(&point, &big));
        assert!(!overlaps(&big, &point));
        assert!(!overlaps(&point, &point));
    }

    #[test]
    fn test_flat_box_never_collides() {
        let line = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        assert!(!overlaps(&line, &unit(0.0, 0.0)));
    }

    #[test]
    fn test_contained_box_collides() {
        let inner = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(0.1, 0.1));
        let outer = Aabb::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(overlaps(&inner, &outer));
    }
}
