use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use crate::material::Color;
use crate::primitive::{Primitive, Shape};
use crate::scene_graph::object3d::ObjectId;
use crate::scene_graph::scene::Scene;

const BODY_BROWN: Color = Color::rgb(120, 60, 30);
const CAB_BROWN: Color = Color::rgb(130, 50, 20);
const IRON_GRAY: Color = Color::rgb(40, 40, 40);

/// The circular track the train visually sits on: a flat black torus,
/// centered under the tree.
pub fn tracks(scene: &mut Scene) -> ObjectId {
    let tracks = scene.spawn(
        "tracks",
        Primitive::solid(Shape::torus(30.0, 1.0, 16, 100), Color::BLACK),
        Vec3::new(0.0, -50.0, 0.0),
    );
    scene.set_object_rotation(tracks, glam::Quat::from_rotation_x(FRAC_PI_2));
    tracks
}

/// The train: body, cab and funnel cuboids plus two axle groups of torus
/// wheels. The far-side axle is an instantiated copy of the near one,
/// pushed across in depth.
pub fn train(scene: &mut Scene) -> ObjectId {
    let train = scene.spawn_group("train");

    let body = scene.spawn(
        "body",
        Primitive::solid(Shape::cuboid(8.0, 4.0, 2.0), BODY_BROWN),
        Vec3::new(0.0, -47.0, 30.0),
    );
    scene.attach(body, train);

    let cab = scene.spawn(
        "cab",
        Primitive::solid(Shape::cuboid(3.0, 2.0, 1.0), CAB_BROWN),
        Vec3::new(4.0, -48.0, 30.0),
    );
    scene.attach(cab, train);

    let funnel = scene.spawn(
        "funnel",
        Primitive::solid(Shape::cuboid(1.0, 2.0, 1.0), IRON_GRAY),
        Vec3::new(2.0, -45.0, 30.0),
    );
    scene.attach(funnel, train);

    let axle = scene.spawn_group("axle");
    let wheel = scene.spawn(
        "wheel",
        Primitive::solid(Shape::torus(1.0, 0.25, 10, 10), IRON_GRAY),
        Vec3::new(-2.0, -49.0, 31.5),
    );
    scene.attach(wheel, axle);

    let rear_wheel = scene.instantiate(wheel).expect("wheel was just spawned");
    scene.set_object_translation(rear_wheel, Vec3::new(2.0, -49.0, 31.5));
    scene.attach(rear_wheel, axle);

    let far_axle = scene.instantiate(axle).expect("axle was just spawned");
    scene.set_object_translation(far_axle, Vec3::new(0.0, 0.0, -3.0));

    scene.attach(axle, train);
    scene.attach(far_axle, train);

    train
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn train_has_two_independent_axles() {
        let mut scene = Scene::new();
        let train = train(&mut scene);

        let axles: Vec<ObjectId> = scene
            .get_object(train)
            .unwrap()
            .child_ids
            .iter()
            .copied()
            .filter(|&id| scene.get_object(id).unwrap().name == "axle")
            .collect();
        assert_eq!(axles.len(), 2);

        for axle in &axles {
            assert_eq!(scene.get_object(*axle).unwrap().child_ids.len(), 2);
        }

        // The copied axle shares no node or primitive with the source.
        let wheel_primitives: Vec<_> = axles
            .iter()
            .flat_map(|&axle| scene.get_object(axle).unwrap().child_ids.iter())
            .map(|&wheel| scene.get_object(wheel).unwrap().primitive_id.unwrap())
            .collect();
        assert_eq!(wheel_primitives.len(), 4);
        for (i, a) in wheel_primitives.iter().enumerate() {
            for b in wheel_primitives.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn tracks_lie_flat_below_room_center() {
        let mut scene = Scene::new();
        let tracks = tracks(&mut scene);

        let object = scene.get_object(tracks).unwrap();
        assert_eq!(object.transform.translation(), Vec3::new(0.0, -50.0, 0.0));

        let expected = glam::Quat::from_rotation_x(FRAC_PI_2);
        assert!(object.transform.rotation().abs_diff_eq(expected, 1e-6));
    }
}
