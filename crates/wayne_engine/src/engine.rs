//! Core engine implementation

use crate::{
    application::{Application, AppEvent},
    assets::TextureRegistry,
    config::ConfigError,
    core::config::EngineConfig,
    foundation::{logging, math::Vec2, time::Timer},
    input::InputState,
    physics::MoveResult,
    render::{Camera, FrameData},
    scene::{CollisionEvent, Scene},
};
use thiserror::Error;

/// Main engine struct
///
/// The engine owns the scene, camera, input state and texture registry, and
/// runs the per-tick sequence: movement from input, animation clocks, then
/// camera follow.
pub struct Engine {
    /// Entities and animations
    pub scene: Scene,

    /// Follow camera
    pub camera: Camera,

    /// Keyboard state fed by the platform layer
    pub input: InputState,

    /// Texture name registry
    pub textures: TextureRegistry,

    /// Frame timing
    timer: Timer,

    /// Engine configuration
    config: EngineConfig,

    /// Whether the engine should continue running
    running: bool,

    /// Whether the controlled entity was blocked last tick
    was_colliding: bool,
}

/// What one tick did
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Movement of the controlled entity
    pub movement: MoveResult,

    /// Collision state change since the previous tick
    pub collision_event: Option<CollisionEvent>,

    /// Camera position after following
    pub camera_position: Vec2,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        log::info!(
            "Initializing engine ({}x{} viewport, player speed {})",
            config.viewport.width,
            config.viewport.height,
            config.player.speed
        );

        let camera = Camera::new(
            Vec2::zeros(),
            config.viewport.width as f32,
            config.viewport.height as f32,
        )
        .with_policy(config.camera.follow);
        let timer = Timer::new().with_max_delta(config.max_frame_time);

        Ok(Self {
            scene: Scene::new(),
            camera,
            input: InputState::new(),
            textures: TextureRegistry::new(),
            timer,
            config,
            running: true,
            was_colliding: false,
        })
    }

    /// Run the engine main loop on the wall clock with the given application
    pub fn run<T: Application>(config: EngineConfig, app: &mut T) -> Result<(), EngineError> {
        Self::run_loop(config, app, None)
    }

    /// Run the engine main loop with a fixed time step
    ///
    /// Frames are not paced; every frame advances the simulation by
    /// `step` seconds. Used for headless and scripted runs.
    pub fn run_fixed<T: Application>(config: EngineConfig, app: &mut T, step: f32) -> Result<(), EngineError> {
        Self::run_loop(config, app, Some(step))
    }

    fn run_loop<T: Application>(config: EngineConfig, app: &mut T, step: Option<f32>) -> Result<(), EngineError> {
        logging::init_with_level(&config.log_level);
        let mut engine = Self::new(config)?;

        // Initialize application
        app.initialize(&mut engine)
            .map_err(|e| EngineError::Application(format!("App initialization: {}", e)))?;

        log::info!("Starting main loop...");

        let result = engine.main_loop(app, step);

        // Cleanup
        app.cleanup(&mut engine);
        engine.scene.clear();

        log::info!(
            "Engine shutdown complete after {} frames ({:.1} fps average)",
            engine.timer.frame_count(),
            engine.timer.average_fps()
        );
        result
    }

    fn main_loop<T: Application>(&mut self, app: &mut T, step: Option<f32>) -> Result<(), EngineError> {
        while self.running {
            match step {
                Some(step) => self.timer.advance(step),
                None => self.timer.update(),
            }
            let delta_time = self.timer.delta_time();

            // Update application
            app.update(self, delta_time)
                .map_err(|e| EngineError::Application(format!("App update: {}", e)))?;

            // Update engine systems
            self.tick(delta_time);

            // Render
            app.render(&self.frame_data())
                .map_err(|e| EngineError::Application(format!("App render: {}", e)))?;
        }
        Ok(())
    }

    /// Advance the simulation by `delta_time` seconds
    ///
    /// Order is fixed: the controlled entity moves along the input vector,
    /// every animation advances, the camera follows its target, and the
    /// input frame ends. Negative and non-finite deltas are treated as zero.
    pub fn tick(&mut self, delta_time: f32) -> TickReport {
        let delta_time = if delta_time.is_finite() {
            delta_time.max(0.0)
        } else {
            log::warn!("Non-finite frame time {} ignored", delta_time);
            0.0
        };

        let direction = self.input.movement_vector(&self.config.controls);
        let movement = self.scene.move_controlled(direction, self.config.player.speed, delta_time);

        let collision_event = CollisionEvent::from_transition(self.was_colliding, movement.colliding);
        self.was_colliding = movement.colliding;
        match collision_event {
            Some(CollisionEvent::Started) => log::info!("Collision started"),
            Some(CollisionEvent::Ended) => log::info!("Collision ended"),
            None => {}
        }

        self.scene.advance_animations(delta_time);

        if let Some(target) = self.scene.follow_position() {
            self.camera.follow(target, delta_time);
        }

        self.input.end_frame();

        log::trace!(
            "Tick {:.4}s: committed ({:.2}, {:.2}), camera ({:.2}, {:.2})",
            delta_time,
            movement.committed.x,
            movement.committed.y,
            self.camera.position.x,
            self.camera.position.y
        );

        TickReport {
            movement,
            collision_event,
            camera_position: self.camera.position,
        }
    }

    /// Describe the current frame for a renderer
    pub fn frame_data(&self) -> FrameData {
        self.scene.frame_data(&self.camera)
    }

    /// Handle an application event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::CloseRequested => self.quit(),
            AppEvent::KeyInput { key, pressed } => self.input.handle_key_input(key, pressed),
            AppEvent::ViewportResized { width, height } => {
                self.config.viewport.width = width;
                self.config.viewport.height = height;
                self.camera.set_viewport(width as f32, height as f32);
            }
            AppEvent::FocusLost => self.input.release_all(),
        }
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }

    /// Whether the main loop keeps going
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the current frame delta time
    pub fn delta_time(&self) -> f32 {
        self.timer.delta_time()
    }

    /// Frames run by the main loop so far
    pub fn frame_count(&self) -> u64 {
        self.timer.frame_count()
    }
}

/// Engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration rejected at startup
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Application callback failed
    #[error("Application error: {0}")]
    Application(String),
}
