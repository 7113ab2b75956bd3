use crate::components::entity::Entity;
use crate::components::mesh::Shape;
use crate::renderer::instance::{RenderBuffer, RenderInstance, NO_TEXTURE, SHAPE_ANNULUS, SHAPE_SPHERE};

/// Build the render instance buffer from entities with mesh components.
pub fn build_render_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();
    for entity in entities {
        if !entity.active {
            continue;
        }
        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };
        let (shape, param0, param1) = match mesh.shape {
            Shape::Sphere { radius } => (SHAPE_SPHERE, radius, 0.0),
            Shape::Annulus { inner, outer } => (SHAPE_ANNULUS, inner, outer),
        };
        let rot = entity.rotation;
        buffer.push(RenderInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            shape,
            param0,
            param1,
            rot_x: rot.x,
            rot_y: rot.y,
            rot_z: rot.z,
            rot_w: rot.w,
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            opacity: mesh.opacity,
            texture: mesh.texture.map(|t| t.0 as f32).unwrap_or(NO_TEXTURE),
            flags: if mesh.double_sided { 1.0 } else { 0.0 },
        });
    }
}
