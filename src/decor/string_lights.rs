use glam::Vec3;
use itertools::iproduct;

use crate::material::Color;
use crate::primitive::{Primitive, Shape};
use crate::room::RoomFrame;
use crate::scene_graph::object3d::ObjectId;
use crate::scene_graph::scene::Scene;

const SPACING: f32 = 5.0;
const DROP_BELOW_CEILING: f32 = 5.0;

/// Inclusive positions from one half extent to the other, stepped by the
/// bulb spacing. For an extent of 150 this yields 31 positions.
fn perimeter_steps(extent: f32) -> impl Iterator<Item = f32> {
    let half = extent / 2.0;
    let count = (extent / SPACING).floor() as i32;
    (0..=count).map(move |i| -half + i as f32 * SPACING)
}

fn bulb(scene: &mut Scene, position: Vec3) -> ObjectId {
    scene.spawn(
        "bulb",
        Primitive::solid(Shape::sphere(1.0), Color::WHITE),
        position,
    )
}

/// One string of bulbs along each of the four top-perimeter edges, dropped
/// slightly below the ceiling so they stay inside the room.
pub fn string_lights(scene: &mut Scene, room: &RoomFrame) -> ObjectId {
    let lights = scene.spawn_group("string lights");
    let y = room.half_height() - DROP_BELOW_CEILING;

    for (z, x) in iproduct!(
        perimeter_steps(room.depth),
        [room.half_width(), -room.half_width()]
    ) {
        let bulb = bulb(scene, Vec3::new(x, y, z));
        scene.attach(bulb, lights);
    }

    for (x, z) in iproduct!(
        perimeter_steps(room.width),
        [-room.half_depth(), room.half_depth()]
    ) {
        let bulb = bulb(scene, Vec3::new(x, y, z));
        scene.attach(bulb, lights);
    }

    lights
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perimeter_steps_are_inclusive_on_both_ends() {
        let steps: Vec<f32> = perimeter_steps(150.0).collect();
        assert_eq!(steps.len(), 31);
        assert_eq!(steps[0], -75.0);
        assert_eq!(*steps.last().unwrap(), 75.0);
    }

    #[test]
    fn uneven_extent_stops_inside_the_far_edge() {
        let steps: Vec<f32> = perimeter_steps(12.0).collect();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps, vec![-6.0, -1.0, 4.0]);
    }
}
