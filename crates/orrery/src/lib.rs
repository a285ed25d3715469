pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::types::{EntityId, TextureId};
pub use components::entity::Entity;
pub use components::mesh::MeshComponent;
pub use crate::core::scene::Scene;
pub use crate::core::time::FrameClock;
pub use crate::core::rng::Rng;
pub use renderer::instance::{RenderInstance, RenderBuffer};
pub use renderer::camera::{PerspectiveCamera, CameraUniform};
pub use input::queue::{InputEvent, InputQueue};
pub use input::camera_control::{CameraController, ControllerConfig};
pub use assets::manifest::{AssetManifest, TextureDescriptor};
pub use assets::registry::TextureRegistry;
pub use bridge::protocol::{ProtocolLayout, FrameStats, HEADER_FLOATS};
pub use systems::orbit::{Orbit, OrbitAnimator, OrbitCenter, OrbitingBody};
pub use systems::orbit_path::{OrbitPath, OrbitPaths, OrbitVertex};
pub use systems::starfield::{Starfield, StarVertex};
pub use systems::render::build_render_buffer;
