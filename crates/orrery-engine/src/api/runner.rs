use crate::api::game::{EngineContext, Game, GameConfig};
use crate::api::types::GameEvent;
use crate::input::queue::{InputEvent, InputQueue};
use crate::renderer::instance::RenderBuffer;
use crate::renderer::traits::FrameData;
use crate::systems::render::build_render_buffer;

/// Generic game runner that wires up the engine loop.
///
/// The host pushes input events as they arrive and calls `tick` once per
/// display refresh; the cadence is externally driven, so there is no
/// timestep accumulation here. One call, one simulation step.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let render_buffer = RenderBuffer::with_capacity(config.max_instances);

        Self {
            game,
            ctx: EngineContext::with_config(&config),
            input: InputQueue::new(),
            render_buffer,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: update the game, rebuild the render buffer.
    pub fn tick(&mut self) {
        if !self.initialized {
            return;
        }

        self.ctx.clear_frame_data();
        self.game.update(&mut self.ctx, &self.input);
        self.input.drain();

        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);
    }

    /// Frame data for the presentation sink.
    pub fn frame_data(&self) -> FrameData<'_> {
        FrameData {
            instances: self.render_buffer.instances(),
            camera: self.ctx.camera.uniform(),
        }
    }

    /// Game events emitted during the last tick.
    pub fn events(&self) -> &[GameEvent] {
        &self.ctx.events
    }

    /// The game instance (e.g. to read the current selection).
    pub fn game(&self) -> &G {
        &self.game
    }

    /// The engine context (scene, hierarchy, camera).
    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }
}
