//! Presentation sink trait for external renderers.
//!
//! The engine produces flat per-frame data (instances + camera uniform);
//! a sink submits the actual draw calls and owns the label overlay. Sink
//! internals such as surfaces, materials, and swap chains are not the
//! engine's concern.

use super::camera::CameraUniform;
use super::instance::RenderInstance;

/// Complete frame data for rendering.
pub struct FrameData<'a> {
    /// One instance per visible mesh, in scene order.
    pub instances: &'a [RenderInstance],
    /// Camera view-projection for this frame.
    pub camera: CameraUniform,
}

/// Contract for the presentation layer.
///
/// Implementors provide platform-specific rendering of the data the engine
/// produces, plus a body-name label overlay positioned in viewport pixels.
pub trait PresentationSink {
    /// Backend identifier (e.g. "wgpu", "canvas", "console").
    fn backend(&self) -> &'static str;

    /// Draw a complete frame.
    fn draw(&mut self, frame: &FrameData);

    /// Handle viewport resize.
    fn resize(&mut self, width: u32, height: u32);

    /// Show the selection label at viewport coordinates.
    fn show_label(&mut self, text: &str, x: f32, y: f32);

    /// Hide the selection label.
    fn hide_label(&mut self);
}
