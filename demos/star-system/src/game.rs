/// Star system — interactive orrery with click-to-identify.
///
/// Planets orbit the star, moons orbit their planet, and a pointer click
/// resolves to the name of the body under the cursor. Camera navigation and
/// actual drawing belong to the host.

use glam::Vec3;
use orrery_engine::*;
use orrery_engine::input::queue::{InputEvent, InputQueue};

use crate::bodies;

// ── Camera placement (slightly above the orbital plane) ──────────────

const CAMERA_EYE: Vec3 = Vec3::new(0.0, 45.0, 170.0);
const CAMERA_FOV_DEG: f32 = 50.0;

// ── Selection ────────────────────────────────────────────────────────

/// Viewport-pixel drag distance before a click stops counting as a select.
const DRAG_THRESHOLD: f32 = 5.0;

// ── Game event kinds to the presentation layer ───────────────────────

pub const EVENT_SELECTION: f32 = 1.0;

// ── Game struct ──────────────────────────────────────────────────────

pub struct StarSystem {
    /// Planet entity ids in manifest order.
    planet_ids: Vec<EntityId>,
    /// Current selection, if any.
    selected: Option<PickHit>,

    // Drag state
    dragging: bool,
    drag_moved: bool,
    drag_start: (f32, f32),
}

impl StarSystem {
    pub fn new() -> Self {
        Self {
            planet_ids: Vec::new(),
            selected: None,
            dragging: false,
            drag_moved: false,
            drag_start: (0.0, 0.0),
        }
    }

    /// The currently selected body, if any.
    pub fn selection(&self) -> Option<&PickHit> {
        self.selected.as_ref()
    }

    /// Planet entity ids in manifest order.
    pub fn planet_ids(&self) -> &[EntityId] {
        &self.planet_ids
    }
}

impl Default for StarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for StarSystem {
    fn config(&self) -> GameConfig {
        GameConfig {
            viewport_width: 1280.0,
            viewport_height: 720.0,
            fov_y: CAMERA_FOV_DEG.to_radians(),
            max_instances: 32,
            max_events: 16,
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        ctx.camera.look_at(CAMERA_EYE, Vec3::ZERO);
        let manifest = bodies::system_manifest();
        self.planet_ids = build_system(ctx, &manifest);
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        // ── Handle input ─────────────────────────────────────────────
        for event in input.iter() {
            match event {
                InputEvent::PointerDown { x, y } => {
                    self.dragging = true;
                    self.drag_moved = false;
                    self.drag_start = (*x, *y);
                }
                InputEvent::PointerMove { x, y } => {
                    if self.dragging {
                        let dx = *x - self.drag_start.0;
                        let dy = *y - self.drag_start.1;
                        if (dx * dx + dy * dy).sqrt() > DRAG_THRESHOLD {
                            self.drag_moved = true;
                        }
                    }
                }
                InputEvent::PointerUp { x, y } => {
                    if self.dragging && !self.drag_moved {
                        // Click (not a drag) → identify the body under it
                        self.selected = resolve_pick(*x, *y, &ctx.camera, &ctx.scene);
                    }
                    self.dragging = false;
                    self.drag_moved = false;
                }
                InputEvent::Resize { width, height } => {
                    ctx.camera.resize(*width, *height);
                }
            }
        }

        // ── Advance orbits ───────────────────────────────────────────
        advance_orbits(&mut ctx.scene, &mut ctx.graph);

        // ── Emit selection state ─────────────────────────────────────
        let (flag, x, y) = match &self.selected {
            Some(hit) => (1.0, hit.x, hit.y),
            None => (-1.0, 0.0, 0.0),
        };
        ctx.emit_event(GameEvent {
            kind: EVENT_SELECTION,
            a: flag,
            b: x,
            c: y,
        });
    }
}
