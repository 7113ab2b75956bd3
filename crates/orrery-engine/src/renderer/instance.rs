use bytemuck::{Pod, Zeroable};

/// Shape discriminant values used in the instance wire format.
pub const SHAPE_SPHERE: f32 = 0.0;
pub const SHAPE_ANNULUS: f32 = 1.0;

/// Texture slot value meaning "untextured".
pub const NO_TEXTURE: f32 = -1.0;

/// Per-instance render data for the presentation layer.
/// Flat float layout so an external renderer can consume it directly.
/// 16 floats = 64 bytes per instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RenderInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// SHAPE_SPHERE or SHAPE_ANNULUS.
    pub shape: f32,
    /// Sphere radius, or annulus inner radius.
    pub param0: f32,
    /// Unused for spheres; annulus outer radius.
    pub param1: f32,
    /// World orientation quaternion (x, y, z, w).
    pub rot_x: f32,
    pub rot_y: f32,
    pub rot_z: f32,
    pub rot_w: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub opacity: f32,
    /// Texture handle value, or NO_TEXTURE.
    pub texture: f32,
    /// Bit 0: double-sided.
    pub flags: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 16;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Buffer of render instances, rebuilt from the scene each frame.
pub struct RenderBuffer {
    instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self::with_capacity(64)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instances(&self) -> &[RenderInstance] {
        &self.instances
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
