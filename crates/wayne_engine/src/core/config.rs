//! # Engine Configuration
//!
//! Configuration structures for the scene engine: viewport, player movement,
//! camera follow policy, key bindings and logging. All sections are
//! serializable through the [`Config`] trait (TOML or RON) and every field
//! has a default, so partial files are accepted.

use serde::{Serialize, Deserialize};

use crate::config::{Config, ConfigError};
use crate::input::MovementBindings;
use crate::render::FollowPolicy;

/// # Viewport Configuration
///
/// Screen dimensions in pixels. The camera centers its target inside this
/// rectangle and the projection spans it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self { width: 800, height: 600 }
    }
}

/// # Player Configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Movement speed of the controlled entity in world units per second
    pub speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self { speed: 200.0 }
    }
}

/// # Camera Configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// How the camera tracks its follow target
    pub follow: FollowPolicy,
}

/// # Engine Configuration
///
/// Top-level configuration for [`crate::Engine`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Log level for the engine (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
    /// Viewport dimensions
    pub viewport: ViewportConfig,
    /// Player movement settings
    pub player: PlayerConfig,
    /// Camera settings
    pub camera: CameraConfig,
    /// Keys composing the movement vector
    pub controls: MovementBindings,
    /// Upper bound for wall-clock frame deltas in seconds (None = unclamped)
    pub max_frame_time: Option<f32>,
}

impl EngineConfig {
    /// Create a new engine configuration
    pub fn new() -> Self {
        Self {
            log_level: "info".to_string(),
            viewport: ViewportConfig::default(),
            player: PlayerConfig::default(),
            camera: CameraConfig::default(),
            controls: MovementBindings::default(),
            max_frame_time: None,
        }
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Set viewport size
    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport = ViewportConfig { width, height };
        self
    }

    /// Set player speed
    pub fn with_player_speed(mut self, speed: f32) -> Self {
        self.player.speed = speed;
        self
    }

    /// Set camera follow policy
    pub fn with_follow_policy(mut self, follow: FollowPolicy) -> Self {
        self.camera.follow = follow;
        self
    }

    /// Set movement key bindings
    pub fn with_controls(mut self, controls: MovementBindings) -> Self {
        self.controls = controls;
        self
    }

    /// Clamp wall-clock frame deltas
    pub fn with_max_frame_time(mut self, seconds: f32) -> Self {
        self.max_frame_time = Some(seconds);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_level.parse::<log::LevelFilter>().is_err() {
            return Err(ConfigError::Invalid(format!("Unknown log level: {}", self.log_level)));
        }

        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "Viewport must be non-empty, got {}x{}",
                self.viewport.width, self.viewport.height
            )));
        }

        if !self.player.speed.is_finite() || self.player.speed < 0.0 {
            return Err(ConfigError::Invalid(format!("Player speed must be finite and >= 0, got {}", self.player.speed)));
        }

        if let FollowPolicy::Smooth { time_constant } = self.camera.follow {
            if !time_constant.is_finite() {
                return Err(ConfigError::Invalid("Camera time constant must be finite".to_string()));
            }
        }

        if let Some(max) = self.max_frame_time {
            if max <= 0.0 {
                return Err(ConfigError::Invalid(format!("max_frame_time must be > 0, got {max}")));
            }
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl Config for EngineConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyCode;

    #[test]
    fn test_default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_viewport() {
        let config = EngineConfig::new().with_viewport(0, 600);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let config = EngineConfig::new().with_log_level("loud");
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_negative_speed() {
        let config = EngineConfig::new().with_player_speed(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.toml");

        let config = EngineConfig::new()
            .with_viewport(1024, 768)
            .with_player_speed(150.0)
            .with_follow_policy(FollowPolicy::Smooth { time_constant: 0.2 })
            .with_max_frame_time(0.1);
        config.save_to_file(&path).unwrap();

        let loaded = EngineConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_ron_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.ron");

        let controls = MovementBindings {
            up: KeyCode::Up,
            down: KeyCode::Down,
            left: KeyCode::Left,
            right: KeyCode::Right,
        };
        let config = EngineConfig::new().with_controls(controls);
        config.save_to_file(&path).unwrap();

        let loaded = EngineConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.controls, controls);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "[player]\nspeed = 90.0\n").unwrap();

        let loaded = EngineConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.player.speed, 90.0);
        assert_eq!(loaded.viewport, ViewportConfig::default());
        assert_eq!(loaded.camera.follow, FollowPolicy::Snap);
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.json");
        std::fs::write(&path, "{}").unwrap();

        let result = EngineConfig::load_from_file(&path);
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }
}
