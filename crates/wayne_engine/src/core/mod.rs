//! # Core Engine Module
//!
//! Shared abstractions used throughout the engine.
//!
//! ## Organization
//!
//! - **Config**: Engine configuration sections and validation
//! - **Foundation**: Low-level utilities (math, collections, time, logging)

pub mod config;

// Re-export foundation modules for convenience
pub use crate::foundation;

// Re-export commonly used config types
pub use config::{
    EngineConfig,
    ViewportConfig,
    PlayerConfig,
    CameraConfig,
};
pub use crate::config::{Config, ConfigError};
