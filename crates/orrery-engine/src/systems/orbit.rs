use glam::Vec3;
use crate::core::scene::Scene;
use crate::core::transform::TransformGraph;

/// Advance every orbiting body by one frame and re-derive world positions.
///
/// Each orbit component accumulates its own angle independently; the local
/// offset in the parent's frame is always
/// `(distance·sin θ, 0, distance·cos θ)`. Entities without an orbit
/// component (the star, ring decorations) keep their local transform
/// untouched, so a ring rides along with its planet but never moves
/// relative to it. Runs once per rendered frame on the rendering thread.
pub fn advance_orbits(scene: &mut Scene, graph: &mut TransformGraph) {
    for entity in scene.iter_mut() {
        let Some(orbit) = &mut entity.orbit else { continue };
        orbit.angle += orbit.angular_speed;
        let offset = Vec3::new(
            orbit.distance * orbit.angle.sin(),
            0.0,
            orbit.distance * orbit.angle.cos(),
        );
        if let Some(local) = graph.get_local_mut(entity.id) {
            local.offset = offset;
        }
    }
    graph.propagate(scene);
}
