use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};

use crate::material::{Color, Material, Side};
use crate::primitive::{Primitive, Shape};
use crate::room::RoomFrame;
use crate::scene_graph::object3d::ObjectId;
use crate::scene_graph::scene::Scene;

const SCREEN_WIDTH: f32 = 60.0;
const SCREEN_HEIGHT: f32 = 40.0;
const DEPTH: f32 = 4.0;

/// A wall-mounted television: a black cabinet cuboid with a translucent
/// screen plane floating just in front of it. Mounted halfway up the
/// right wall.
pub fn television(scene: &mut Scene, room: &RoomFrame) -> ObjectId {
    let tv = scene.spawn_group("television");

    let cabinet = scene.spawn(
        "cabinet",
        Primitive::solid(
            Shape::cuboid(SCREEN_WIDTH * 1.25, SCREEN_HEIGHT * 1.25, DEPTH),
            Color::BLACK,
        ),
        Vec3::ZERO,
    );
    scene.set_object_rotation(cabinet, Quat::from_rotation_y(FRAC_PI_2));
    scene.attach(cabinet, tv);

    let screen = scene.spawn(
        "screen",
        Primitive::new(
            Shape::plane(SCREEN_WIDTH, SCREEN_HEIGHT),
            Material::phong(Color::WHITE)
                .with_side(Side::Double)
                .with_opacity(0.4)
                .with_specular(50.0),
        ),
        Vec3::new(-DEPTH / 1.5, 0.0, 0.0),
    );
    scene.set_object_rotation(screen, Quat::from_rotation_y(FRAC_PI_2));
    scene.attach(screen, tv);

    scene.set_object_translation(tv, Vec3::new(room.half_width() - DEPTH / 2.0, 0.0, 0.0));
    tv
}
