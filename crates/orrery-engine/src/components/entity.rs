use glam::{Quat, Vec3};
use crate::api::types::EntityId;
use crate::components::mesh::MeshComponent;
use crate::components::orbit::OrbitComponent;

/// Entity category. Decorations are intersectable but never produce a
/// selection label; the variant replaces sentinel-string tagging so a body
/// may carry any display name without being misclassified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// The star or a planet: a named, top-level body.
    Primary,
    /// A satellite orbiting a planet.
    Moon,
    /// Flat annulus decoration attached to a planet. Not named, never moves
    /// relative to its parent.
    Ring,
}

/// Fat Entity — a single struct with optional components.
/// Designed for simplicity and rapid prototyping over ECS purity.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// Body category, fixed at construction.
    pub kind: BodyKind,
    /// Display name. Present on bodies, absent on ring decorations.
    pub name: Option<String>,
    /// Whether this entity is active (inactive entities are skipped).
    pub active: bool,
    /// Position in world space, derived by transform propagation.
    pub pos: Vec3,
    /// Orientation in world space.
    pub rotation: Quat,
    /// Mesh component (optional — entities without meshes are invisible).
    pub mesh: Option<MeshComponent>,
    /// Orbit component (optional; the star and rings do not orbit).
    pub orbit: Option<OrbitComponent>,
}

impl Entity {
    /// Create a new entity with the given ID at the origin.
    pub fn new(id: EntityId, kind: BodyKind) -> Self {
        Self {
            id,
            kind,
            name: None,
            active: true,
            pos: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            mesh: None,
            orbit: None,
        }
    }

    // -- Builder pattern --

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_mesh(mut self, mesh: MeshComponent) -> Self {
        self.mesh = Some(mesh);
        self
    }

    pub fn with_orbit(mut self, orbit: OrbitComponent) -> Self {
        self.orbit = Some(orbit);
        self
    }
}
