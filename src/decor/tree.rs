use glam::Vec3;

use crate::material::{Color, Material};
use crate::primitive::{Primitive, Shape};
use crate::room::SceneContext;
use crate::scene_graph::object3d::ObjectId;
use crate::scene_graph::scene::Scene;

const SIENNA: Color = Color::rgb(160, 82, 45);
const FOREST_GREEN: Color = Color::rgb(0, 100, 0);
const GOLD: Color = Color::rgb(255, 215, 0);

/// Tree proportions. The defaults are the scene's canonical tree.
#[derive(Debug, Clone, Copy)]
pub struct TreeParams {
    pub trunk_radius: f32,
    pub trunk_height: f32,
    pub bottom_radius: f32,
    pub height: f32,
    pub star_radius: f32,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            trunk_radius: 5.0,
            trunk_height: 10.0,
            bottom_radius: 20.0,
            height: 50.0,
            star_radius: 2.5,
        }
    }
}

// Present dimensions, position (before the vertical room shift) and
// wrapping paper. Placement is deliberate, not generated.
const PRESENTS: [([f32; 3], [f32; 3], &str); 4] = [
    ([5.0, 7.5, 5.0], [2.5, 3.75, 7.5], "gold_wrap.jpg"),
    ([5.5, 5.5, 5.5], [-5.0, 3.75, 10.0], "red_wrap.jpg"),
    ([5.5, 9.0, 10.0], [8.75, 4.5, 0.0], "purple_wrap.jpg"),
    ([12.5, 5.0, 12.5], [-10.0, 3.75, 0.0], "gold_wrap.jpg"),
];

/// The tree with its star and the presents underneath, as one composite.
/// The vertical offset of half the room height drops the composite from the
/// centered room frame down to floor level.
pub fn christmas_tree(scene: &mut Scene, ctx: &mut SceneContext, params: TreeParams) -> ObjectId {
    let offset = 0.5 * ctx.room.height;
    let tree = scene.spawn_group("christmas tree");

    let trunk = scene.spawn(
        "trunk",
        Primitive::solid(
            Shape::cylinder(params.trunk_radius, params.trunk_radius, params.trunk_height, 40, 40),
            SIENNA,
        ),
        Vec3::new(0.0, params.trunk_radius - offset, 0.0),
    );
    scene.attach(trunk, tree);

    let canopy = scene.spawn(
        "canopy",
        Primitive::solid(
            Shape::cylinder(0.0, params.bottom_radius, params.height, 40, 2),
            FOREST_GREEN,
        ),
        Vec3::new(
            0.0,
            params.height - params.bottom_radius + params.trunk_radius - offset,
            0.0,
        ),
    );
    scene.attach(canopy, tree);

    // Two opposing cones stacked apex-to-apex read as a star from afar.
    let top_y = params.height + params.trunk_height + params.star_radius;
    let star_top = scene.spawn(
        "star top",
        Primitive::solid(
            Shape::cylinder(0.0, params.star_radius, params.star_radius, 40, 2),
            GOLD,
        ),
        Vec3::new(0.0, top_y - offset, 0.0),
    );
    scene.attach(star_top, tree);

    let star_bottom = scene.spawn(
        "star bottom",
        Primitive::solid(
            Shape::cylinder(params.star_radius, 0.0, params.star_radius, 40, 2),
            GOLD,
        ),
        Vec3::new(0.0, top_y - params.star_radius - offset, 0.0),
    );
    scene.attach(star_bottom, tree);

    for ([width, height, length], [x, y, z], wrap) in PRESENTS {
        let paper = ctx.textures.register(wrap);
        let present = scene.spawn(
            "present",
            Primitive::new(
                Shape::cuboid(width, height, length),
                Material::textured(Color::WHITE, paper),
            ),
            Vec3::new(x, y - offset, z),
        );
        scene.attach(present, tree);
    }

    tree
}
