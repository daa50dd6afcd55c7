//! Physics module for collision detection and movement resolution
//!
//! Narrow-phase only: every mover is tested against every obstacle. Scenes
//! are small enough that no spatial partitioning is used.

pub mod collision;
pub mod movement;

pub use collision::{Aabb, overlaps};
pub use movement::{MoveResult, resolve_move};
