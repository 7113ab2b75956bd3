use crate::assets::registry::TextureId;

/// RGB color for untextured or tinted rendering.
#[derive(Debug, Clone, Copy)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self { r: 0.6, g: 0.6, b: 0.8 }
    }
}

/// Renderable primitive shape.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    Sphere { radius: f32 },
    /// Flat ring in the entity's local XZ plane, spanning [inner, outer].
    Annulus { inner: f32, outer: f32 },
}

/// Component for mesh-rendered entities.
#[derive(Debug, Clone, Copy)]
pub struct MeshComponent {
    pub shape: Shape,
    pub color: Color,
    /// 1.0 = opaque. Ring decorations render translucent.
    pub opacity: f32,
    /// Render both faces (used by rings, visible from above and below).
    pub double_sided: bool,
    /// Texture handle resolved by the asset provider, if any.
    pub texture: Option<TextureId>,
}

impl Default for MeshComponent {
    fn default() -> Self {
        Self {
            shape: Shape::Sphere { radius: 1.0 },
            color: Color::default(),
            opacity: 1.0,
            double_sided: false,
            texture: None,
        }
    }
}

impl MeshComponent {
    pub fn sphere(radius: f32) -> Self {
        Self {
            shape: Shape::Sphere { radius },
            ..Default::default()
        }
    }

    pub fn annulus(inner: f32, outer: f32) -> Self {
        Self {
            shape: Shape::Annulus { inner, outer },
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_double_sided(mut self, double_sided: bool) -> Self {
        self.double_sided = double_sided;
        self
    }

    pub fn with_texture(mut self, texture: TextureId) -> Self {
        self.texture = Some(texture);
        self
    }
}
