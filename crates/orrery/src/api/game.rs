use crate::api::types::EntityId;
use crate::assets::registry::TextureRegistry;
use crate::core::scene::Scene;
use crate::core::time::FrameClock;
use crate::input::camera_control::{CameraController, ControllerConfig};
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::camera::PerspectiveCamera;
use crate::systems::orbit::OrbitAnimator;
use crate::systems::orbit_path::OrbitPaths;
use crate::systems::starfield::Starfield;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Initial viewport width in pixels (the host sends a resize right away).
    pub viewport_width: f32,
    /// Initial viewport height in pixels.
    pub viewport_height: f32,
    /// Initial vertical field of view, degrees.
    pub fov: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Drag/zoom tuning.
    pub controller: ControllerConfig,
    /// Maximum number of body instances (default: 64).
    pub max_instances: usize,
    /// Maximum number of background stars (default: 1000).
    pub max_stars: usize,
    /// Maximum number of orbit ring vertices (default: 16 rings).
    pub max_orbit_vertices: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 720.0,
            fov: 75.0,
            near: 0.1,
            far: 1000.0,
            controller: ControllerConfig::default(),
            max_instances: 64,
            max_stars: 1000,
            max_orbit_vertices: 16 * 65,
        }
    }
}

/// The core contract every scene must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Spawn bodies, register orbits, place the camera.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Per-frame hook. Runs after camera input and before orbits are stepped.
    fn update(&mut self, _ctx: &mut EngineContext, _input: &InputQueue) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub camera: PerspectiveCamera,
    pub controller: CameraController,
    pub clock: FrameClock,
    pub orbits: OrbitAnimator,
    pub orbit_paths: OrbitPaths,
    pub starfield: Starfield,
    pub textures: TextureRegistry,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    /// Create an EngineContext sized and tuned by `config`.
    pub fn from_config(config: &GameConfig) -> Self {
        let aspect = if config.viewport_height > 0.0 {
            config.viewport_width / config.viewport_height
        } else {
            1.0
        };
        Self {
            scene: Scene::new(),
            camera: PerspectiveCamera::new(config.fov, aspect, config.near, config.far),
            controller: CameraController::new(config.controller),
            clock: FrameClock::new(),
            orbits: OrbitAnimator::new(),
            orbit_paths: OrbitPaths::new(config.max_orbit_vertices),
            starfield: Starfield::default(),
            textures: TextureRegistry::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Feed one input event to the camera controller.
    pub fn apply_camera_input(&mut self, event: &InputEvent) -> bool {
        self.controller.handle(&mut self.camera, event)
    }

    /// Move every orbiting body to the current clock time.
    /// Called automatically by the game runner after `Game::update()`.
    pub fn step_orbits(&mut self) {
        self.orbits.update(&mut self.scene, self.clock.elapsed());
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
