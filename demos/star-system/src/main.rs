use std::error::Error;

use orrery_engine::{FrameData, GameRunner, InputEvent, PresentationSink};
use star_system::{bodies, StarSystem};

/// Frames to simulate per run.
const FRAMES: usize = 600;
/// Cadence of scripted clicks, in frames.
const CLICK_EVERY: usize = 120;

/// Bodies the scripted pointer walks through.
const CLICK_TARGETS: [&str; 5] = ["Mercury", "Earth", "Jupiter", "Saturn", "Neptune"];

/// Headless presentation sink: draw calls and the label overlay go to the
/// logger instead of a GPU surface.
struct ConsoleSink {
    label: Option<String>,
}

impl ConsoleSink {
    fn new() -> Self {
        Self { label: None }
    }
}

impl PresentationSink for ConsoleSink {
    fn backend(&self) -> &'static str {
        "console"
    }

    fn draw(&mut self, frame: &FrameData) {
        log::trace!("frame: {} instances", frame.instances.len());
    }

    fn resize(&mut self, width: u32, height: u32) {
        log::info!("viewport resized to {width}x{height}");
    }

    fn show_label(&mut self, text: &str, x: f32, y: f32) {
        if self.label.as_deref() != Some(text) {
            log::info!("selected {text} at ({x:.0}, {y:.0})");
            self.label = Some(text.to_string());
        }
    }

    fn hide_label(&mut self) {
        if self.label.take().is_some() {
            log::info!("selection cleared");
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    bodies::system_manifest().validate()?;

    let mut runner = GameRunner::new(StarSystem::new());
    runner.init();
    let mut sink = ConsoleSink::new();

    for frame in 0..FRAMES {
        // Periodically click on the next target body, aiming at its current
        // projected position, as a stand-in for a real pointer.
        if frame % CLICK_EVERY == CLICK_EVERY / 2 {
            let target = CLICK_TARGETS[(frame / CLICK_EVERY) % CLICK_TARGETS.len()];
            let ctx = runner.context();
            if let Some(screen) = ctx
                .scene
                .find_by_name(target)
                .and_then(|entity| ctx.camera.world_to_viewport(entity.pos))
            {
                runner.push_input(InputEvent::PointerDown { x: screen.x, y: screen.y });
                runner.push_input(InputEvent::PointerUp { x: screen.x, y: screen.y });
            }
        }

        runner.tick();
        sink.draw(&runner.frame_data());

        match runner.game().selection() {
            Some(hit) => sink.show_label(&hit.name, hit.x, hit.y),
            None => sink.hide_label(),
        }
    }

    Ok(())
}
