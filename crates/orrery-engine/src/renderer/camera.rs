use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

/// Perspective camera for 3D rendering and picking.
/// Produces view/projection matrices mapping world units to clip space.
pub struct Camera {
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    /// Up direction.
    pub up: Vec3,
    /// Viewport width in pixels. Pointer coordinates are normalized against
    /// the dimensions current at event time.
    pub viewport_width: f32,
    /// Viewport height in pixels.
    pub viewport_height: f32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_projection: [[f32; 4]; 4],
}

impl Camera {
    pub fn new(fov_y: f32, viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            fov_y,
            near: 0.1,
            far: 3000.0,
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            viewport_width,
            viewport_height,
        }
    }

    /// Place the camera at `eye`, looking at `target`.
    pub fn look_at(&mut self, eye: Vec3, target: Vec3) {
        self.eye = eye;
        self.target = target;
    }

    pub fn aspect(&self) -> f32 {
        self.viewport_width / self.viewport_height
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Perspective projection with depth in [0, 1].
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect(), self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_projection: self.view_projection().to_cols_array_2d(),
        }
    }

    /// Update viewport dimensions (e.g. on window resize).
    /// Field of view is preserved; only the aspect ratio changes.
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        self.viewport_width = viewport_width;
        self.viewport_height = viewport_height;
    }

    /// Normalize viewport pixel coordinates to [-1, 1] on both axes,
    /// with the vertical axis inverted relative to screen space.
    pub fn ndc(&self, viewport_x: f32, viewport_y: f32) -> Vec2 {
        Vec2::new(
            (viewport_x / self.viewport_width) * 2.0 - 1.0,
            -((viewport_y / self.viewport_height) * 2.0 - 1.0),
        )
    }

    /// Project a world-space point to viewport pixel coordinates.
    /// Returns None for points behind the camera.
    pub fn world_to_viewport(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.view_projection() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport_width,
            (1.0 - ndc.y) * 0.5 * self.viewport_height,
        ))
    }
}
