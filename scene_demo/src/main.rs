//! Scene demo application
//!
//! Runs the engine headless on a fixed time step: a player with an animated
//! sprite sheet walks into a wall, slides along it, backs off and walks up,
//! driven by a scripted key sequence. Positions and collision edges go to
//! the log.
//!
//! Usage: `scene_demo [config.toml|config.ron]`

use thiserror::Error;
use wayne_engine::foundation::logging;
use wayne_engine::prelude::*;

/// Simulation step, 60 ticks per second
const STEP: f32 = 1.0 / 60.0;

/// Frames before the demo quits
const TOTAL_FRAMES: u64 = 120;

/// Held keys per frame range, `[start, end)`
const SCRIPT: &[(u64, u64, &[KeyCode])] = &[
    (0, 40, &[KeyCode::D]),
    (40, 70, &[KeyCode::D, KeyCode::S]),
    (70, 100, &[KeyCode::A]),
    (100, TOTAL_FRAMES, &[KeyCode::W]),
];

#[derive(Error, Debug)]
enum DemoError {
    #[error("Failed to load config: {0}")]
    Config(#[from] ConfigError),

    #[error("Engine failed: {0}")]
    Engine(#[from] EngineError),
}

#[derive(Default)]
struct DemoLevel {
    player: Option<EntityId>,
    frame: u64,
    held: Vec<KeyCode>,
    items_drawn: usize,
}

impl DemoLevel {
    fn keys_for(frame: u64) -> &'static [KeyCode] {
        SCRIPT
            .iter()
            .find(|(start, end, _)| (*start..*end).contains(&frame))
            .map(|(_, _, keys)| *keys)
            .unwrap_or_default()
    }
}

impl Application for DemoLevel {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        log::info!("Building demo level...");

        let sheet = engine.textures.register("player", 128, 32)?;
        let info = engine.textures.info_by_name("player")?.clone();
        let frames = SpriteSheet::from_texture(&info, 32, 32).row(0, 0, 4);
        let walk = engine.scene.add_animation(Animation::new(frames, 0.1));

        let player = engine
            .scene
            .spawn(Entity::new(Vec2::new(0.0, 0.0), Vec2::new(32.0, 32.0)).with_texture(sheet));
        engine.scene.attach_animation(player, Some(walk))?;

        // Marker overlaps nothing and blocks nothing
        engine.scene.spawn(
            Entity::new(Vec2::new(-100.0, -100.0), Vec2::new(16.0, 16.0)).with_color([1.0, 0.2, 0.2, 1.0]),
        );

        // Wall right of the player, and a floor below
        engine.scene.spawn(
            Entity::new(Vec2::new(120.0, 0.0), Vec2::new(32.0, 192.0))
                .with_color([0.4, 0.4, 0.4, 1.0])
                .obstacle(),
        );
        engine.scene.spawn(
            Entity::new(Vec2::new(0.0, 200.0), Vec2::new(400.0, 32.0))
                .with_color([0.4, 0.4, 0.4, 1.0])
                .obstacle(),
        );

        engine.scene.set_controlled(Some(player))?;
        engine.scene.set_follow_target(Some(player))?;
        self.player = Some(player);

        log::info!("Demo level ready: {} entities", engine.scene.len());
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, _delta_time: f32) -> Result<(), AppError> {
        let keys = Self::keys_for(self.frame);
        for &key in &self.held {
            if !keys.contains(&key) {
                engine.input.release(key);
            }
        }
        for &key in keys {
            engine.input.press(key);
        }
        self.held = keys.to_vec();

        if self.frame % 20 == 0 {
            if let Some(entity) = self.player.and_then(|id| engine.scene.get(id)) {
                log::info!(
                    "Frame {:3}: player at ({:7.2}, {:7.2}), camera at ({:7.2}, {:7.2})",
                    self.frame,
                    entity.position.x,
                    entity.position.y,
                    engine.camera.position.x,
                    engine.camera.position.y
                );
            }
        }

        self.frame += 1;
        if self.frame >= TOTAL_FRAMES {
            engine.quit();
        }
        Ok(())
    }

    fn render(&mut self, frame: &FrameData) -> Result<(), AppError> {
        self.items_drawn += frame.items.len();
        Ok(())
    }

    fn cleanup(&mut self, engine: &mut Engine) {
        if let Some(entity) = self.player.and_then(|id| engine.scene.get(id)) {
            log::info!("Final player position: ({:.2}, {:.2})", entity.position.x, entity.position.y);
        }
        log::info!("Described {} render items over {} frames", self.items_drawn, self.frame);
    }
}

fn load_config() -> Result<EngineConfig, DemoError> {
    match std::env::args().nth(1) {
        Some(path) => Ok(EngineConfig::load_from_file(&path)?),
        None => Ok(EngineConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up panic hook for better error reporting
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("PANIC occurred: {}", panic_info);

        if let Some(location) = panic_info.location() {
            eprintln!("Panic location: {}:{}:{}", location.file(), location.line(), location.column());
        }
    }));

    let config = load_config()?;

    // Initialize logging; RUST_LOG still wins
    logging::init_with_level(&config.log_level);

    log::info!("Starting scene demo");

    let mut app = DemoLevel::default();
    match Engine::run_fixed(config, &mut app, STEP).map_err(DemoError::from) {
        Ok(()) => {
            log::info!("Scene demo finished successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("{}", e);
            Err(e.into())
        }
    }
}
