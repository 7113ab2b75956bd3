use crate::api::types::{EntityId, GameEvent};
use crate::assets::registry::TextureRegistry;
use crate::core::scene::Scene;
use crate::core::transform::TransformGraph;
use crate::input::queue::InputQueue;
use crate::renderer::camera::Camera;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Initial viewport width in pixels.
    pub viewport_width: f32,
    /// Initial viewport height in pixels.
    pub viewport_height: f32,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Maximum number of render instances (default: 64).
    pub max_instances: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 720.0,
            fov_y: 50f32.to_radians(),
            max_instances: 64,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state: build the body hierarchy, place the camera.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The per-frame tick. Handle input, advance the simulation.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
///
/// The single owner of all simulation state: scene, hierarchy, camera,
/// texture handles. Lives on the rendering thread; input callbacks and the
/// frame loop are serialized by the host, so plain mutable access is safe.
pub struct EngineContext {
    pub scene: Scene,
    pub graph: TransformGraph,
    pub camera: Camera,
    pub textures: TextureRegistry,
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_config(&GameConfig::default())
    }

    pub fn with_config(config: &GameConfig) -> Self {
        Self {
            scene: Scene::new(),
            graph: TransformGraph::new(),
            camera: Camera::new(config.fov_y, config.viewport_width, config.viewport_height),
            textures: TextureRegistry::new(),
            events: Vec::with_capacity(config.max_events),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to the presentation layer.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_sequential() {
        let mut ctx = EngineContext::new();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
        assert_eq!(b.0, a.0 + 1);
    }

    #[test]
    fn clear_frame_data_drops_events() {
        let mut ctx = EngineContext::new();
        ctx.emit_event(GameEvent { kind: 1.0, a: 2.0, b: 3.0, c: 4.0 });
        assert_eq!(ctx.events.len(), 1);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }

    #[test]
    fn context_camera_matches_config() {
        let config = GameConfig {
            viewport_width: 640.0,
            viewport_height: 480.0,
            ..Default::default()
        };
        let ctx = EngineContext::with_config(&config);
        assert_eq!(ctx.camera.viewport_width, 640.0);
        assert_eq!(ctx.camera.viewport_height, 480.0);
    }
}
