// core/transform.rs
//
// Transform hierarchy — tracks parent-child relationships by EntityId.
// Moon offsets are expressed in their planet's frame; world positions come
// from root-to-leaf propagation each frame.
//
// Usage:
//   let mut graph = TransformGraph::new();
//   graph.set_parent(moon_id, Some(planet_id));
//   graph.propagate(&mut scene);  // Updates world positions from local offsets

use std::collections::HashMap;
use glam::{Quat, Vec3};
use crate::api::types::EntityId;
use crate::core::scene::Scene;

/// Local transform data for entities in the hierarchy.
#[derive(Debug, Clone, Copy)]
pub struct LocalTransform {
    /// Position relative to parent (or world if no parent).
    pub offset: Vec3,
    /// Rotation relative to parent.
    pub rotation: Quat,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            offset: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl LocalTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }
}

/// Node in the transform hierarchy.
#[derive(Debug, Clone, Default)]
struct TransformNode {
    parent: Option<EntityId>,
    children: Vec<EntityId>,
    local: LocalTransform,
}

/// Transform hierarchy graph — manages parent-child relationships.
///
/// Exists separately from Scene so flat entity storage stays simple;
/// the graph alone knows who orbits whom.
#[derive(Debug, Default)]
pub struct TransformGraph {
    nodes: HashMap<EntityId, TransformNode>,
    /// Entities with no parent (top-level).
    roots: Vec<EntityId>,
    /// Dirty flag — set when hierarchy changes, cleared after propagate.
    dirty: bool,
}

impl TransformGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity with a specific local transform.
    pub fn register_with(&mut self, id: EntityId, local: LocalTransform) {
        let node = self.nodes.entry(id).or_default();
        node.local = local;
        if !self.roots.contains(&id) {
            self.roots.push(id);
        }
        self.dirty = true;
    }

    /// Set the parent of an entity. Pass `None` to make it a root.
    pub fn set_parent(&mut self, child: EntityId, parent: Option<EntityId>) {
        self.nodes.entry(child).or_default();
        if let Some(p) = parent {
            self.nodes.entry(p).or_default();
        }

        // Remove from old parent's children
        if let Some(old_parent) = self.nodes.get(&child).and_then(|n| n.parent) {
            if let Some(old_node) = self.nodes.get_mut(&old_parent) {
                old_node.children.retain(|&c| c != child);
            }
        }

        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = parent;
        }

        // Add to new parent's children, preserving attachment order
        if let Some(p) = parent {
            if let Some(parent_node) = self.nodes.get_mut(&p) {
                if !parent_node.children.contains(&child) {
                    parent_node.children.push(child);
                }
            }
            self.roots.retain(|&r| r != child);
        } else {
            if !self.roots.contains(&child) {
                self.roots.push(child);
            }
        }

        self.dirty = true;
    }

    /// Get the local transform for an entity.
    pub fn get_local(&self, id: EntityId) -> Option<&LocalTransform> {
        self.nodes.get(&id).map(|n| &n.local)
    }

    /// Get the local transform mutably.
    pub fn get_local_mut(&mut self, id: EntityId) -> Option<&mut LocalTransform> {
        self.dirty = true;
        self.nodes.get_mut(&id).map(|n| &mut n.local)
    }

    /// Get the parent of an entity.
    pub fn get_parent(&self, id: EntityId) -> Option<EntityId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    /// Get the children of an entity, in attachment order.
    pub fn get_children(&self, id: EntityId) -> Option<&[EntityId]> {
        self.nodes.get(&id).map(|n| n.children.as_slice())
    }

    /// Propagate transforms from roots down through the hierarchy.
    /// Updates Entity.pos/rotation based on parent transforms.
    pub fn propagate(&mut self, scene: &mut Scene) {
        if !self.dirty {
            return;
        }

        let roots: Vec<EntityId> = self.roots.clone();
        for root in roots {
            self.propagate_recursive(root, Vec3::ZERO, Quat::IDENTITY, scene);
        }

        self.dirty = false;
    }

    fn propagate_recursive(
        &self,
        id: EntityId,
        parent_pos: Vec3,
        parent_rot: Quat,
        scene: &mut Scene,
    ) {
        let Some(node) = self.nodes.get(&id) else { return };
        let local = &node.local;

        let world_pos = parent_pos + parent_rot * local.offset;
        let world_rot = parent_rot * local.rotation;

        if let Some(entity) = scene.get_mut(id) {
            entity.pos = world_pos;
            entity.rotation = world_rot;
        }

        let children: Vec<EntityId> = node.children.clone();
        for child in children {
            self.propagate_recursive(child, world_pos, world_rot, scene);
        }
    }

    /// Check if the hierarchy has pending changes.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of entities in the hierarchy.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the hierarchy is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::{BodyKind, Entity};

    #[test]
    fn parent_child_relationship() {
        let mut graph = TransformGraph::new();
        let parent = EntityId(1);
        let child = EntityId(2);

        graph.register_with(parent, LocalTransform::new());
        graph.register_with(child, LocalTransform::new());
        graph.set_parent(child, Some(parent));

        assert_eq!(graph.get_parent(child), Some(parent));
        assert_eq!(graph.get_children(parent), Some([child].as_slice()));
    }

    #[test]
    fn propagate_composes_offsets() {
        let mut graph = TransformGraph::new();
        let mut scene = Scene::new();

        let parent = EntityId(1);
        let child = EntityId(2);

        scene.spawn(Entity::new(parent, BodyKind::Primary));
        scene.spawn(Entity::new(child, BodyKind::Moon));

        graph.register_with(
            parent,
            LocalTransform::new().with_offset(Vec3::new(100.0, 0.0, 50.0)),
        );
        graph.register_with(
            child,
            LocalTransform::new().with_offset(Vec3::new(0.0, 0.0, 5.0)),
        );
        graph.set_parent(child, Some(parent));

        graph.propagate(&mut scene);

        let child_entity = scene.get(child).unwrap();
        assert_eq!(child_entity.pos, Vec3::new(100.0, 0.0, 55.0));
    }

    #[test]
    fn propagate_applies_parent_rotation_to_offsets() {
        let mut graph = TransformGraph::new();
        let mut scene = Scene::new();

        let parent = EntityId(1);
        let child = EntityId(2);

        scene.spawn(Entity::new(parent, BodyKind::Primary));
        scene.spawn(Entity::new(child, BodyKind::Moon));

        // Parent rotated 90° about Y: child offset along +X maps to -Z.
        graph.register_with(
            parent,
            LocalTransform::new()
                .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2)),
        );
        graph.register_with(
            child,
            LocalTransform::new().with_offset(Vec3::new(10.0, 0.0, 0.0)),
        );
        graph.set_parent(child, Some(parent));

        graph.propagate(&mut scene);

        let child_entity = scene.get(child).unwrap();
        assert!((child_entity.pos.x - 0.0).abs() < 1e-5);
        assert!((child_entity.pos.z - -10.0).abs() < 1e-5);
    }

    #[test]
    fn propagate_is_skipped_when_clean() {
        let mut graph = TransformGraph::new();
        let mut scene = Scene::new();
        let id = EntityId(1);

        scene.spawn(Entity::new(id, BodyKind::Primary));
        graph.register_with(id, LocalTransform::new().with_offset(Vec3::new(1.0, 2.0, 3.0)));
        graph.propagate(&mut scene);
        assert!(!graph.is_dirty());

        // Mutating the entity directly is not clobbered until the graph dirties.
        scene.get_mut(id).unwrap().pos = Vec3::ZERO;
        graph.propagate(&mut scene);
        assert_eq!(scene.get(id).unwrap().pos, Vec3::ZERO);
    }
}
