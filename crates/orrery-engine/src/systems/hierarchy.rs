use glam::{Quat, Vec3};
use crate::api::game::EngineContext;
use crate::api::types::EntityId;
use crate::assets::manifest::{BodyDescriptor, SystemManifest};
use crate::components::entity::{BodyKind, Entity};
use crate::components::mesh::{Color, MeshComponent};
use crate::components::orbit::OrbitComponent;
use crate::core::transform::LocalTransform;

/// Build the runtime body hierarchy from a descriptor manifest.
///
/// Spawns the star at the origin, then one entity per planet with its ring
/// (if any) attached as the first child and its moons following in
/// descriptor order. Every body starts at `(distance, 0, 0)` in its parent
/// frame; the first orbit update overwrites that from the accumulated angle.
///
/// Returns the planet entity ids, index-matching the manifest order.
/// Descriptor preconditions (positive radii, non-negative distances) are
/// the caller's responsibility; validate the manifest first.
pub fn build_system(ctx: &mut EngineContext, manifest: &SystemManifest) -> Vec<EntityId> {
    let star_id = ctx.next_id();
    let mut star_mesh = MeshComponent::sphere(manifest.star.radius);
    if let Some(path) = &manifest.star.texture {
        star_mesh = star_mesh.with_texture(ctx.textures.handle(path));
    }
    ctx.scene.spawn(
        Entity::new(star_id, BodyKind::Primary)
            .with_name(&manifest.star.name)
            .with_mesh(star_mesh),
    );
    ctx.graph.register_with(star_id, LocalTransform::new());

    let mut planet_ids = Vec::with_capacity(manifest.planets.len());
    for planet in &manifest.planets {
        let planet_id = spawn_body(ctx, planet, BodyKind::Primary, None);

        if let Some(ring) = &planet.ring {
            let ring_id = ctx.next_id();
            let [r, g, b] = ring.color;
            let tilt = Quat::from_rotation_z(ring.inclination);
            ctx.scene.spawn(
                Entity::new(ring_id, BodyKind::Ring)
                    .with_rotation(tilt)
                    .with_mesh(
                        MeshComponent::annulus(ring.inner_radius, ring.outer_radius)
                            .with_color(Color::new(r, g, b))
                            .with_opacity(ring.opacity)
                            .with_double_sided(true),
                    ),
            );
            ctx.graph
                .register_with(ring_id, LocalTransform::new().with_rotation(tilt));
            ctx.graph.set_parent(ring_id, Some(planet_id));
        }

        for moon in &planet.moons {
            spawn_body(ctx, moon, BodyKind::Moon, Some(planet_id));
        }

        planet_ids.push(planet_id);
    }

    ctx.graph.propagate(&mut ctx.scene);
    log::info!(
        "built system {:?}: {} planets, {} entities",
        manifest.star.name,
        planet_ids.len(),
        ctx.scene.len()
    );
    planet_ids
}

fn spawn_body(
    ctx: &mut EngineContext,
    desc: &BodyDescriptor,
    kind: BodyKind,
    parent: Option<EntityId>,
) -> EntityId {
    let id = ctx.next_id();
    let mut mesh = MeshComponent::sphere(desc.radius);
    if let Some(path) = &desc.texture {
        mesh = mesh.with_texture(ctx.textures.handle(path));
    }
    ctx.scene.spawn(
        Entity::new(id, kind)
            .with_name(&desc.name)
            .with_mesh(mesh)
            .with_orbit(OrbitComponent::new(desc.distance, desc.angular_speed)),
    );
    ctx.graph.register_with(
        id,
        LocalTransform::new().with_offset(Vec3::new(desc.distance, 0.0, 0.0)),
    );
    if parent.is_some() {
        ctx.graph.set_parent(id, parent);
    }
    id
}
