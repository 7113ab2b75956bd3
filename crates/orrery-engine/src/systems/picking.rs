use glam::{Quat, Vec3};
use crate::api::types::EntityId;
use crate::components::entity::BodyKind;
use crate::components::mesh::Shape;
use crate::core::scene::Scene;
use crate::renderer::camera::Camera;

/// World-space ray for pointer picking.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// Build the ray through a viewport pixel from the camera's current
    /// projection/view state. Uses the viewport dimensions current at event
    /// time, so resize events must reach the camera before the next pick.
    pub fn through_viewport(viewport_x: f32, viewport_y: f32, camera: &Camera) -> Self {
        let ndc = camera.ndc(viewport_x, viewport_y);
        let inv = camera.view_projection().inverse();
        // Depth range is [0, 1]: unproject a point on each clip plane.
        let near = inv.project_point3(Vec3::new(ndc.x, ndc.y, 0.0));
        let far = inv.project_point3(Vec3::new(ndc.x, ndc.y, 1.0));
        Self {
            origin: near,
            dir: (far - near).normalize(),
        }
    }
}

/// A resolved selection: the body's display name plus the input viewport
/// coordinates, for label placement by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct PickHit {
    pub name: String,
    pub x: f32,
    pub y: f32,
}

/// Resolve a pointer position to the nearest intersected named body.
///
/// All primitives are tested, decorations included; the nearest hit wins.
/// If that hit is a ring decoration the result is no selection: the ring
/// visually covers the body behind it, so no label falls through to the
/// next-nearest hit.
pub fn resolve_pick(
    viewport_x: f32,
    viewport_y: f32,
    camera: &Camera,
    scene: &Scene,
) -> Option<PickHit> {
    let ray = Ray::through_viewport(viewport_x, viewport_y, camera);

    let mut best: Option<(f32, EntityId)> = None;
    for entity in scene.iter() {
        if !entity.active {
            continue;
        }
        let Some(mesh) = &entity.mesh else { continue };
        let t = match mesh.shape {
            Shape::Sphere { radius } => ray_sphere(&ray, entity.pos, radius),
            Shape::Annulus { inner, outer } => {
                ray_annulus(&ray, entity.pos, entity.rotation, inner, outer)
            }
        };
        if let Some(t) = t {
            if best.is_none() || t < best.unwrap().0 {
                best = Some((t, entity.id));
            }
        }
    }

    let (_, id) = best?;
    let entity = scene.get(id)?;
    if entity.kind == BodyKind::Ring {
        log::debug!("pick at ({viewport_x}, {viewport_y}) landed on a ring decoration");
        return None;
    }
    let name = entity.name.as_ref()?;
    Some(PickHit {
        name: name.clone(),
        x: viewport_x,
        y: viewport_y,
    })
}

/// Nearest non-negative ray parameter for a sphere, if any.
/// Half-b form of the quadratic; `ray.dir` must be unit length.
fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.dir);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    let t = -b - sqrt_disc;
    if t >= 0.0 {
        return Some(t);
    }
    // Origin inside the sphere: take the exit point.
    let t = -b + sqrt_disc;
    (t >= 0.0).then_some(t)
}

/// Ray parameter for a flat annulus, if any. The annulus lies in the
/// entity's local XZ plane (normal = rotated +Y) and is double-sided, so
/// both face orientations intersect.
fn ray_annulus(ray: &Ray, center: Vec3, rotation: Quat, inner: f32, outer: f32) -> Option<f32> {
    let normal = rotation * Vec3::Y;
    let denom = ray.dir.dot(normal);
    if denom.abs() < 1e-6 {
        return None; // edge-on
    }
    let t = (center - ray.origin).dot(normal) / denom;
    if t < 0.0 {
        return None;
    }
    let radial = (ray.origin + ray.dir * t - center).length();
    (radial >= inner && radial <= outer).then_some(t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::entity::{BodyKind, Entity};
    use crate::components::mesh::MeshComponent;

    fn test_camera() -> Camera {
        let mut camera = Camera::new(50f32.to_radians(), 800.0, 600.0);
        camera.look_at(Vec3::new(0.0, 0.0, 100.0), Vec3::ZERO);
        camera
    }

    fn sphere_at(id: u32, kind: BodyKind, name: Option<&str>, pos: Vec3, radius: f32) -> Entity {
        let mut entity = Entity::new(EntityId(id), kind).with_mesh(MeshComponent::sphere(radius));
        if let Some(name) = name {
            entity = entity.with_name(name);
        }
        entity.pos = pos;
        entity
    }

    #[test]
    fn center_ray_points_down_negative_z() {
        let camera = test_camera();
        let ray = Ray::through_viewport(400.0, 300.0, &camera);
        assert!(ray.dir.z < -0.999);
        assert!(ray.dir.x.abs() < 1e-4);
        assert!(ray.dir.y.abs() < 1e-4);
    }

    #[test]
    fn empty_space_yields_no_selection() {
        let camera = test_camera();
        let mut scene = Scene::new();
        scene.spawn(sphere_at(1, BodyKind::Primary, Some("Gaia"), Vec3::new(50.0, 0.0, 0.0), 2.0));
        // Top-left corner: nothing there.
        assert_eq!(resolve_pick(10.0, 10.0, &camera, &scene), None);
    }

    #[test]
    fn body_under_cursor_is_named() {
        let camera = test_camera();
        let mut scene = Scene::new();
        scene.spawn(sphere_at(1, BodyKind::Primary, Some("Gaia"), Vec3::ZERO, 2.0));

        let hit = resolve_pick(400.0, 300.0, &camera, &scene).unwrap();
        assert_eq!(hit.name, "Gaia");
        assert_eq!((hit.x, hit.y), (400.0, 300.0));
    }

    #[test]
    fn nearest_of_two_bodies_wins() {
        let camera = test_camera();
        let mut scene = Scene::new();
        scene.spawn(sphere_at(1, BodyKind::Primary, Some("Far"), Vec3::new(0.0, 0.0, -20.0), 2.0));
        scene.spawn(sphere_at(2, BodyKind::Moon, Some("Near"), Vec3::new(0.0, 0.0, 20.0), 2.0));

        let hit = resolve_pick(400.0, 300.0, &camera, &scene).unwrap();
        assert_eq!(hit.name, "Near");
    }

    #[test]
    fn ring_in_front_suppresses_the_body_behind() {
        let camera = test_camera();
        let mut scene = Scene::new();
        scene.spawn(sphere_at(1, BodyKind::Moon, Some("Titan"), Vec3::ZERO, 1.0));

        // Annulus between the camera and the moon, tilted to face the
        // camera, offset so the center ray crosses the band.
        let mut ring = Entity::new(EntityId(2), BodyKind::Ring)
            .with_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2))
            .with_mesh(MeshComponent::annulus(1.0, 3.0).with_double_sided(true));
        ring.pos = Vec3::new(2.0, 0.0, 50.0);
        scene.spawn(ring);

        assert_eq!(resolve_pick(400.0, 300.0, &camera, &scene), None);
    }

    #[test]
    fn body_in_front_of_ring_is_still_named() {
        let camera = test_camera();
        let mut scene = Scene::new();
        scene.spawn(sphere_at(1, BodyKind::Moon, Some("Titan"), Vec3::new(0.0, 0.0, 60.0), 1.0));

        let mut ring = Entity::new(EntityId(2), BodyKind::Ring)
            .with_rotation(Quat::from_rotation_x(std::f32::consts::FRAC_PI_2))
            .with_mesh(MeshComponent::annulus(1.0, 3.0).with_double_sided(true));
        ring.pos = Vec3::new(2.0, 0.0, 50.0);
        scene.spawn(ring);

        let hit = resolve_pick(400.0, 300.0, &camera, &scene).unwrap();
        assert_eq!(hit.name, "Titan");
    }

    #[test]
    fn body_behind_camera_is_not_picked() {
        let camera = test_camera();
        let mut scene = Scene::new();
        scene.spawn(sphere_at(1, BodyKind::Primary, Some("Ghost"), Vec3::new(0.0, 0.0, 150.0), 2.0));
        assert_eq!(resolve_pick(400.0, 300.0, &camera, &scene), None);
    }

    #[test]
    fn edge_on_annulus_is_not_hit() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 100.0),
            dir: Vec3::new(0.0, 0.0, -1.0),
        };
        // Untilted annulus: normal +Y, perpendicular to the ray.
        assert_eq!(ray_annulus(&ray, Vec3::new(2.0, 0.0, 0.0), Quat::IDENTITY, 1.0, 3.0), None);
    }

    #[test]
    fn ray_from_inside_sphere_hits_exit() {
        let ray = Ray {
            origin: Vec3::ZERO,
            dir: Vec3::new(0.0, 0.0, -1.0),
        };
        let t = ray_sphere(&ray, Vec3::ZERO, 5.0).unwrap();
        assert!((t - 5.0).abs() < 1e-5);
    }
}
