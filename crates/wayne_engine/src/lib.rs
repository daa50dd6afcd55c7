//! # Wayne Engine
//!
//! A small real-time 2D scene engine. It owns a set of positioned, sized
//! entities, moves a controlled entity under discrete-time input while
//! resolving axis-aligned collisions against static obstacles, drives sprite
//! animation clocks, and computes a camera transform that follows a target.
//!
//! ## Features
//!
//! - **Axis-separated movement**: entities slide along walls instead of sticking
//! - **Sprite animation**: fixed-duration frame clocks over sprite-sheet cells
//! - **Follow camera**: screen-centered view and top-left orthographic projection
//! - **Arena ownership**: entities and animations live in generation-checked slot maps
//! - **Headless**: windowing, GPU and audio stay outside the engine; the renderer
//!   consumes [`render::FrameData`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wayne_engine::prelude::*;
//!
//! struct MyApp;
//!
//! impl Application for MyApp {
//!     fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
//!         let player = engine.scene.spawn(Entity::new(Vec2::new(0.0, 0.0), Vec2::new(32.0, 32.0)));
//!         engine.scene.set_controlled(Some(player))?;
//!         engine.scene.set_follow_target(Some(player))?;
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
//!         engine.input.press(KeyCode::D);
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, _engine: &mut Engine) {}
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = EngineConfig::default();
//!     let mut app = MyApp;
//!     Engine::run(config, &mut app)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Core engine modules
pub mod core;

pub mod foundation;
pub mod config;
pub mod animation;
pub mod assets;
pub mod input;
pub mod physics;
pub mod render;
pub mod scene;

mod application;
mod engine;


pub use application::{Application, AppError, AppEvent};
pub use engine::{Engine, EngineError, TickReport};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Application, AppError, AppEvent,
        Engine, EngineError, TickReport,
        foundation::{
            math::{Vec2, Vec3, Mat4},
            time::Timer,
        },
        animation::{Animation, FrameRect, SpriteSheet},
        assets::{TextureHandle, TextureInfo, TextureRegistry, AssetError},
        input::{InputState, KeyCode, MovementBindings},
        physics::{Aabb, MoveResult, overlaps, resolve_move},
        render::{Camera, FollowPolicy, FrameData, RenderItem},
        scene::{Entity, EntityFlags, EntityId, AnimationId, Scene, SceneError, CollisionEvent},
        core::config::{EngineConfig, ViewportConfig, PlayerConfig, CameraConfig},
        config::{Config, ConfigError},
    };
}
