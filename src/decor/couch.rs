use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};

use crate::material::Color;
use crate::primitive::{Primitive, Shape};
use crate::room::RoomFrame;
use crate::scene_graph::object3d::ObjectId;
use crate::scene_graph::scene::Scene;

const RED: Color = Color::rgb(130, 0, 0);
const CREAM: Color = Color::rgb(200, 200, 200);

const BASE_WIDTH: f32 = 20.0;
const BASE_HEIGHT: f32 = 15.0;
const BASE_DEPTH: f32 = 60.0;
const SIDE_WIDTH: f32 = 20.0;
const SIDE_HEIGHT: f32 = 20.0;
const SIDE_DEPTH: f32 = 5.0;
const BACK_WIDTH: f32 = 10.0;
const BACK_HEIGHT: f32 = 35.0;
const BACK_DEPTH: f32 = 70.0;
const CUSHION_HEIGHT: f32 = 2.0;

/// One couch: base, two armrest sides, a tall back and a cushion slab.
/// The second side is an instantiated copy of the first, mirrored in depth.
fn couch_parts(scene: &mut Scene) -> ObjectId {
    let couch = scene.spawn_group("couch");

    let base = scene.spawn(
        "base",
        Primitive::solid(Shape::cuboid(BASE_WIDTH, BASE_HEIGHT, BASE_DEPTH), RED),
        Vec3::ZERO,
    );
    scene.attach(base, couch);

    let side_y = SIDE_HEIGHT / 2.0 - BASE_HEIGHT / 2.0;
    let side_z = BASE_DEPTH / 2.0 + SIDE_DEPTH / 2.0;
    let side = scene.spawn(
        "side",
        Primitive::solid(Shape::cuboid(SIDE_WIDTH, SIDE_HEIGHT, SIDE_DEPTH), RED),
        Vec3::new(0.0, side_y, side_z),
    );
    scene.attach(side, couch);

    let far_side = scene.instantiate(side).expect("side was just spawned");
    scene.set_object_translation(far_side, Vec3::new(0.0, side_y, -side_z));
    scene.attach(far_side, couch);

    let back = scene.spawn(
        "back",
        Primitive::solid(Shape::cuboid(BACK_WIDTH, BACK_HEIGHT, BACK_DEPTH), RED),
        Vec3::new(
            -BASE_WIDTH / 2.0 - BACK_WIDTH / 2.0,
            BACK_HEIGHT / 2.0 - BASE_HEIGHT / 2.0,
            0.0,
        ),
    );
    scene.attach(back, couch);

    let cushion = scene.spawn(
        "cushion",
        Primitive::solid(Shape::cuboid(BASE_WIDTH, CUSHION_HEIGHT, BASE_DEPTH), CREAM),
        Vec3::new(0.0, BASE_HEIGHT / 2.0 + CUSHION_HEIGHT / 2.0, 0.0),
    );
    scene.attach(cushion, couch);

    couch
}

/// Two couches: one against the left wall, one turned a quarter and pushed
/// toward the front wall so only its back greets the viewer.
pub fn couches(scene: &mut Scene, room: &RoomFrame) -> ObjectId {
    let couches = scene.spawn_group("couches");
    let floor_y = -room.half_height() + BASE_HEIGHT / 2.0;

    let left_couch = couch_parts(scene);
    scene.set_object_translation(
        left_couch,
        Vec3::new(
            -room.half_width() + BASE_WIDTH / 2.0 + BACK_WIDTH,
            floor_y,
            -BACK_WIDTH,
        ),
    );
    scene.attach(left_couch, couches);

    let front_couch = couch_parts(scene);
    scene.set_object_transform(
        front_couch,
        Vec3::new(
            -room.half_width() + BACK_DEPTH,
            floor_y,
            room.half_depth() - BACK_WIDTH - BASE_WIDTH,
        ),
        Quat::from_rotation_y(FRAC_PI_2),
        1.0,
    );
    scene.attach(front_couch, couches);

    couches
}
