use glam::{Mat4, Quat, Vec3};
use id_arena::Arena;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::material::Color;
use crate::primitive::{Primitive, PrimitiveId};
use crate::scene_graph::object3d::{Object3D, ObjectId};
use crate::scene_graph::transform::Transform;

static NEXT_SCENE_ID: AtomicU64 = AtomicU64::new(0);

/// Scene-wide light sources. These illuminate every lit primitive; they are
/// not nodes in the object tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    Ambient { color: Color },
    Directional { color: Color, position: Vec3 },
}

/// Owns every node and primitive of one scene graph. Each scene has a unique
/// identity so that handles into one scene cannot be replayed against another.
pub struct Scene {
    id: u64,
    objects: Arena<Object3D>,
    primitives: Arena<Primitive>,
    lights: Vec<Light>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            id: NEXT_SCENE_ID.fetch_add(1, Ordering::Relaxed),
            objects: Arena::new(),
            primitives: Arena::new(),
            lights: Vec::new(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn add_object(&mut self, object: Object3D) -> ObjectId {
        self.objects.alloc(object)
    }

    /// Spawns a detached leaf node carrying `primitive` at `translation`.
    pub fn spawn(
        &mut self,
        name: impl Into<String>,
        primitive: Primitive,
        translation: Vec3,
    ) -> ObjectId {
        let primitive_id = self.primitives.alloc(primitive);
        self.add_object(Object3D {
            name: name.into(),
            transform: Transform::from_translation(translation),
            primitive_id: Some(primitive_id),
            ..Default::default()
        })
    }

    /// Spawns a detached, empty group node.
    pub fn spawn_group(&mut self, name: impl Into<String>) -> ObjectId {
        self.add_object(Object3D::group(name))
    }

    pub fn get_object(&self, id: ObjectId) -> Option<&Object3D> {
        self.objects.get(id)
    }

    pub fn get_object_mut(&mut self, id: ObjectId) -> Option<&mut Object3D> {
        self.objects.get_mut(id)
    }

    pub fn get_object_by_name(&self, name: &str) -> Option<ObjectId> {
        self.objects
            .iter()
            .find(|(_, object)| object.name == name)
            .map(|(id, _)| id)
    }

    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &Object3D)> {
        self.objects.iter()
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn get_primitive(&self, id: PrimitiveId) -> Option<&Primitive> {
        self.primitives.get(id)
    }

    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn attach(&mut self, child_id: ObjectId, parent_id: ObjectId) {
        self.set_object_parent(child_id, Some(parent_id));
    }

    /// Sets the parent of an object, maintaining strict tree ownership: the
    /// object is first removed from any previous parent's child list.
    pub fn set_object_parent(&mut self, child_id: ObjectId, new_parent_id: Option<ObjectId>) {
        if let Some(child) = self.objects.get(child_id) {
            if let Some(old_parent_id) = child.parent_id {
                if let Some(old_parent) = self.objects.get_mut(old_parent_id) {
                    old_parent.child_ids.retain(|&id| id != child_id);
                }
            }
        }

        if let Some(child) = self.objects.get_mut(child_id) {
            child.parent_id = new_parent_id;

            if let Some(new_parent_id) = new_parent_id {
                if let Some(new_parent) = self.objects.get_mut(new_parent_id) {
                    new_parent.child_ids.push(child_id);
                }
            }
        }

        self.invalidate_object_hierarchy(child_id);
    }

    /// Deep-copies a subtree, duplicating primitive descriptors so the copy
    /// shares no geometry with the source. Returns the detached copy's root,
    /// or `None` when `source` is not in this scene.
    pub fn instantiate(&mut self, source: ObjectId) -> Option<ObjectId> {
        self.objects.get(source)?;
        Some(self.instantiate_subtree(source))
    }

    fn instantiate_subtree(&mut self, source: ObjectId) -> ObjectId {
        let (name, translation, rotation, scale, primitive_id, child_ids) = {
            let source = &self.objects[source];
            (
                source.name.clone(),
                source.transform.translation(),
                source.transform.rotation(),
                source.transform.scale(),
                source.primitive_id,
                source.child_ids.clone(),
            )
        };

        let primitive_id = primitive_id.map(|id| {
            let primitive = self.primitives[id].clone();
            self.primitives.alloc(primitive)
        });

        let copy_id = self.add_object(Object3D {
            name,
            transform: Transform::new(translation, rotation, scale),
            primitive_id,
            parent_id: None,
            child_ids: Vec::new(),
        });

        for child_id in child_ids {
            let child_copy = self.instantiate_subtree(child_id);
            self.set_object_parent(child_copy, Some(copy_id));
        }

        copy_id
    }

    pub fn set_object_translation(&mut self, object_id: ObjectId, translation: Vec3) {
        if let Some(object) = self.objects.get_mut(object_id) {
            object.transform.set_translation(translation);
        }
        self.invalidate_object_hierarchy(object_id);
    }

    pub fn set_object_rotation(&mut self, object_id: ObjectId, rotation: Quat) {
        if let Some(object) = self.objects.get_mut(object_id) {
            object.transform.set_rotation(rotation);
        }
        self.invalidate_object_hierarchy(object_id);
    }

    pub fn set_object_transform(
        &mut self,
        object_id: ObjectId,
        translation: Vec3,
        rotation: Quat,
        scale: f32,
    ) {
        if let Some(object) = self.objects.get_mut(object_id) {
            object.transform.set_transform(translation, rotation, scale);
        }
        self.invalidate_object_hierarchy(object_id);
    }

    pub fn get_object_transform(&self, object_id: ObjectId) -> Option<&Transform> {
        self.objects.get(object_id).map(|object| &object.transform)
    }

    /// World translation of a node, valid after the last transform pass.
    pub fn world_translation(&self, object_id: ObjectId) -> Option<Vec3> {
        self.objects
            .get(object_id)
            .map(|object| object.transform.world_translation())
    }

    /// Invalidates world transforms for an object and all its descendants.
    pub fn invalidate_object_hierarchy(&self, object_id: ObjectId) {
        if let Some(object) = self.objects.get(object_id) {
            object.transform.invalidate_world();

            for &child_id in &object.child_ids {
                self.invalidate_object_hierarchy(child_id);
            }
        }
    }

    /// Recomputes world matrices for every node, in hierarchical order.
    pub fn update_world_transforms(&self) {
        let root_ids = self.objects.iter().filter_map(|(id, object)| {
            if object.parent_id.is_none() {
                Some(id)
            } else {
                None
            }
        });

        for root_id in root_ids {
            self.update_object_transform_recursive(root_id, Mat4::IDENTITY);
        }
    }

    fn update_object_transform_recursive(&self, object_id: ObjectId, parent_world_matrix: Mat4) {
        if let Some(object) = self.objects.get(object_id) {
            if object.transform.is_world_dirty() {
                let local_matrix = *object.transform.get_local_matrix();
                let world_matrix = parent_world_matrix * local_matrix;
                object.transform.set_world_matrix(world_matrix);
            }

            let world_matrix = *object.transform.get_world_matrix();
            for &child_id in &object.child_ids {
                self.update_object_transform_recursive(child_id, world_matrix);
            }
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
