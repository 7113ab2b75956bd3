pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext};
pub use api::runner::GameRunner;
pub use api::types::{EntityId, GameEvent};
pub use components::entity::{BodyKind, Entity};
pub use components::mesh::{Color, MeshComponent, Shape};
pub use components::orbit::OrbitComponent;
pub use core::scene::Scene;
pub use core::transform::{LocalTransform, TransformGraph};
pub use renderer::camera::{Camera, CameraUniform};
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use renderer::traits::{FrameData, PresentationSink};
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::{BodyDescriptor, ManifestError, RingSpec, StarDescriptor, SystemManifest};
pub use assets::registry::{TextureId, TextureRegistry};
pub use systems::hierarchy::build_system;
pub use systems::orbit::advance_orbits;
pub use systems::picking::{resolve_pick, PickHit, Ray};
pub use systems::render::build_render_buffer;
