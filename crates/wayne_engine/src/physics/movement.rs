//! Axis-separated movement resolution
//!
//! A desired displacement is split into its X and Y components. Each
//! component is probed on its own against every obstacle and committed only
//! if that probe is clear, so a mover pushing diagonally into a wall keeps
//! sliding along it instead of stopping dead.
//!
//! Probes are tested against the obstacles' current bounds. Penetration that
//! already exists when the tick starts is left alone; only further movement
//! along a blocked axis is refused.

use std::borrow::Borrow;

use crate::foundation::math::Vec2;
use crate::physics::collision::Aabb;

/// Outcome of one movement resolution
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoveResult {
    /// Displacement actually applied
    pub committed: Vec2,
    /// X movement was refused this tick
    pub blocked_x: bool,
    /// Y movement was refused this tick
    pub blocked_y: bool,
    /// At least one probe hit an obstacle
    pub colliding: bool,
}

impl MoveResult {
    /// Position after applying the committed displacement to `start`
    pub fn apply_to(&self, start: Vec2) -> Vec2 {
        start + self.committed
    }
}

/// Resolve `delta` for `mover` against `obstacles`
///
/// The mover's own box must not be among the obstacles. An empty obstacle
/// set always commits the full displacement.
pub fn resolve_move<I>(mover: &Aabb, delta: Vec2, obstacles: I) -> MoveResult
where
    I: IntoIterator,
    I::Item: Borrow<Aabb>,
{
    let start = mover.center;
    let next = start + delta;

    let probe_x = mover.at(Vec2::new(next.x, start.y));
    let probe_y = mover.at(Vec2::new(start.x, next.y));

    let mut blocked_x = false;
    let mut blocked_y = false;

    for obstacle in obstacles {
        let obstacle = obstacle.borrow();
        if probe_x.intersects(obstacle) {
            blocked_x = true;
        }
        if probe_y.intersects(obstacle) {
            blocked_y = true;
        }
    }

    let committed = Vec2::new(
        if blocked_x { 0.0 } else { delta.x },
        if blocked_y { 0.0 } else { delta.y },
    );

    MoveResult {
        committed,
        blocked_x,
        blocked_y,
        colliding: blocked_x || blocked_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit(x: f32, y: f32) -> Aabb {
        Aabb::new(Vec2::new(x, y), Vec2::new(1.0, 1.0))
    }

    #[test]
    fn test_no_obstacles_moves_fully() {
        let mover = unit(0.0, 0.0);
        let result = resolve_move(&mover, Vec2::new(3.0, -2.0), std::iter::empty::<Aabb>());

        assert_eq!(result.committed, Vec2::new(3.0, -2.0));
        assert!(!result.colliding);
        assert!(!result.blocked_x && !result.blocked_y);
    }

    #[test]
    fn test_slides_along_wall() {
        let mover = unit(0.0, 0.0);
        let wall = [unit(1.5, 0.0)];

        let result = resolve_move(&mover, Vec2::new(1.0, 1.0), &wall);

        assert!(result.blocked_x);
        assert!(!result.blocked_y);
        assert!(result.colliding);
        assert_relative_eq!(result.apply_to(mover.center), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_blocked_on_both_axes_in_corner() {
        let mover = unit(0.0, 0.0);
        let walls = [unit(1.5, 0.0), unit(0.0, 1.5)];

        let result = resolve_move(&mover, Vec2::new(1.0, 1.0), &walls);

        assert_eq!(result.committed, Vec2::zeros());
        assert!(result.blocked_x && result.blocked_y);
    }

    #[test]
    fn test_moving_to_touch_is_allowed() {
        let mover = unit(0.0, 0.0);
        let wall = [unit(2.0, 0.0)];

        // Ends with edges exactly touching: not a collision
        let result = resolve_move(&mover, Vec2::new(1.0, 0.0), &wall);

        assert_eq!(result.committed, Vec2::new(1.0, 0.0));
        assert!(!result.colliding);
    }

    #[test]
    fn test_moving_away_from_wall() {
        let mover = unit(0.0, 0.0);
        let wall = [unit(1.0, 0.0)];

        let result = resolve_move(&mover, Vec2::new(-1.0, 0.0), &wall);

        assert_eq!(result.committed, Vec2::new(-1.0, 0.0));
        assert!(!result.colliding);
    }

    #[test]
    fn test_existing_penetration_is_not_separated() {
        let mover = unit(0.0, 0.0);
        let overlapping = [unit(0.5, 0.0)];

        // Both probes start inside the obstacle, so nothing moves
        let result = resolve_move(&mover, Vec2::new(-0.1, 0.0), &overlapping);

        assert_eq!(result.committed, Vec2::zeros());
        assert!(result.colliding);
    }

    #[test]
    fn test_zero_size_mover_passes_through() {
        let mover = Aabb::new(Vec2::new(0.0, 0.0), Vec2::zeros());
        let wall = [unit(0.5, 0.0)];

        let result = resolve_move(&mover, Vec2::new(1.0, 0.0), &wall);

        assert_eq!(result.committed, Vec2::new(1.0, 0.0));
        assert!(!result.colliding);
    }

    #[test]
    fn test_any_blocking_obstacle_wins() {
        let mover = unit(0.0, 0.0);
        let obstacles = [unit(10.0, 10.0), unit(1.5, 0.0), unit(-10.0, 0.0)];

        let result = resolve_move(&mover, Vec2::new(1.0, 0.0), &obstacles);

        assert!(result.blocked_x);
        assert_eq!(result.committed, Vec2::zeros());
    }
}
