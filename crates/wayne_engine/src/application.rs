//! Application trait and lifecycle management

use crate::assets::AssetError;
use crate::config::ConfigError;
use crate::engine::{Engine, EngineError};
use crate::input::KeyCode;
use crate::render::FrameData;
use crate::scene::SceneError;
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to drive a scene with the engine.
pub trait Application {
    /// Initialize the application
    ///
    /// Called once after the engine is created. Use this to register
    /// textures, spawn entities and pick the controlled entity and follow
    /// target.
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Update the application
    ///
    /// Called every frame before the engine tick, so keys pressed here are
    /// seen by this frame's movement.
    ///
    /// # Arguments
    /// * `engine` - Mutable reference to the engine
    /// * `delta_time` - Time since last frame in seconds
    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError>;

    /// Render the frame
    ///
    /// Called after the engine tick with the frame description. The engine
    /// draws nothing itself; a windowed application hands `frame` to its
    /// renderer here.
    fn render(&mut self, frame: &FrameData) -> Result<(), AppError> {
        let _ = frame;
        Ok(())
    }

    /// Handle application events
    ///
    /// Called when the platform layer reports an event.
    fn handle_event(&mut self, engine: &mut Engine, event: AppEvent) -> Result<(), AppError> {
        engine.handle_event(event);
        Ok(())
    }

    /// Cleanup the application
    ///
    /// Called when the application is shutting down, before the scene is
    /// torn down.
    fn cleanup(&mut self, engine: &mut Engine);
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Scene operation failed
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    /// Asset registration or lookup failed
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Custom application error
    #[error("Application error: {0}")]
    Custom(String),
}

/// Application events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEvent {
    /// Viewport was resized
    ViewportResized {
        /// New viewport width
        width: u32,
        /// New viewport height
        height: u32,
    },

    /// Close requested
    CloseRequested,

    /// Key input event
    KeyInput {
        /// The key that was pressed/released
        key: KeyCode,
        /// Whether the key was pressed (true) or released (false)
        pressed: bool,
    },

    /// Focus lost; held keys will not see their release
    FocusLost,
}
