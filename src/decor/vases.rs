use glam::Vec3;

use crate::material::{Color, Material};
use crate::primitive::{Primitive, Shape};
use crate::room::RoomFrame;
use crate::scene_graph::object3d::ObjectId;
use crate::scene_graph::scene::Scene;

// Top radius, bottom radius, height, color and placement of each vase.
// Placement is arbitrary but fixed, tuned for looks in the front corner.
const VASES: [(f32, f32, f32, Color, [f32; 3]); 6] = [
    (2.5, 5.0, 30.0, Color::rgb(130, 20, 130), [0.0, 15.0, 0.0]),
    (1.5, 3.0, 50.0, Color::rgb(25, 25, 112), [8.0, 25.0, 8.0]),
    (3.0, 6.0, 46.0, Color::rgb(0, 100, 0), [2.0, 23.0, 20.0]),
    (2.0, 4.0, 34.0, Color::rgb(250, 128, 114), [14.0, 17.0, 14.0]),
    (2.5, 5.0, 42.0, Color::rgb(0, 191, 255), [20.0, 19.0, 20.0]),
    (3.0, 6.0, 32.0, Color::rgb(0, 255, 0), [18.0, 21.0, 2.0]),
];

/// A cluster of translucent vases standing in the front left corner.
pub fn vases(scene: &mut Scene, room: &RoomFrame) -> ObjectId {
    let vases = scene.spawn_group("vases");

    for (radius_top, radius_bottom, height, color, [x, y, z]) in VASES {
        let vase = scene.spawn(
            "vase",
            Primitive::new(
                Shape::cylinder(radius_top, radius_bottom, height, 100, 100),
                Material::phong(color).with_opacity(0.5).with_specular(10.0),
            ),
            Vec3::new(x, y, z),
        );
        scene.attach(vase, vases);
    }

    scene.set_object_translation(
        vases,
        Vec3::new(
            -room.half_width() + 5.0,
            -room.half_height(),
            room.half_depth() / 2.0,
        ),
    );
    vases
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_vases_are_translucent() {
        let mut scene = Scene::new();
        let room = RoomFrame::new(150.0, 100.0, 150.0);
        let group = vases(&mut scene, &room);

        let vases = scene.get_object(group).unwrap();
        assert_eq!(vases.child_ids.len(), 6);

        for &id in &vases.child_ids {
            let primitive_id = scene.get_object(id).unwrap().primitive_id.unwrap();
            let primitive = scene.get_primitive(primitive_id).unwrap();
            let crate::primitive::Surface::Uniform(material) = &primitive.surface else {
                panic!("vases have a single material");
            };
            assert!(material.is_transparent());
        }
    }
}
