use id_arena::Id;

use crate::primitive::PrimitiveId;
use crate::scene_graph::scene::Scene;
use crate::scene_graph::transform::Transform;

pub type ObjectId = Id<Object3D>;

/// A node in the scene tree: either a group (no primitive) or a leaf carrying
/// one renderable primitive. Children are positioned in this node's local
/// frame and a node belongs to at most one parent.
pub struct Object3D {
    pub name: String,
    pub transform: Transform,
    pub primitive_id: Option<PrimitiveId>,
    pub parent_id: Option<ObjectId>,
    pub child_ids: Vec<ObjectId>,
}

impl Object3D {
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn is_group(&self) -> bool {
        self.primitive_id.is_none()
    }

    pub fn parent<'a>(&self, scene: &'a Scene) -> Option<&'a Object3D> {
        self.parent_id.and_then(|id| scene.get_object(id))
    }

    pub fn children<'a, 'b>(&'a self, scene: &'b Scene) -> impl Iterator<Item = &'b Object3D> + 'b
    where
        'a: 'b,
    {
        self.child_ids
            .iter()
            .filter_map(move |id| scene.get_object(*id))
    }
}

impl Default for Object3D {
    fn default() -> Self {
        Self {
            name: String::new(),
            transform: Transform::default(),
            primitive_id: None,
            parent_id: None,
            child_ids: Vec::new(),
        }
    }
}
