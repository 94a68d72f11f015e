use glam::Vec3;

use crate::material::{Color, Material};
use crate::primitive::{Primitive, Shape};
use crate::room::SceneContext;
use crate::scene_graph::object3d::ObjectId;
use crate::scene_graph::scene::Scene;

const PILLAR_WIDTH: f32 = 10.0;
const OPENING: f32 = 50.0;
const PILLAR_DEPTH: f32 = 10.0;

/// A white brick mantle around a softly glowing fire plane, set against the
/// middle of the back wall. The right pillar is an instantiated copy of the
/// left one.
pub fn mantle(scene: &mut Scene, ctx: &mut SceneContext) -> ObjectId {
    let brick = ctx.textures.register("mantle.jpg");
    let fire_texture = ctx.textures.register("fire.jpg");

    let mantle = scene.spawn_group("mantle");

    let fire = scene.spawn(
        "fire",
        Primitive::new(
            Shape::plane(OPENING, OPENING),
            Material::unlit(Color::WHITE)
                .with_texture(fire_texture)
                .with_opacity(0.55),
        ),
        Vec3::ZERO,
    );
    scene.attach(fire, mantle);

    let left_pillar = scene.spawn(
        "pillar",
        Primitive::new(
            Shape::cuboid(PILLAR_WIDTH, OPENING, PILLAR_DEPTH),
            Material::textured(Color::WHITE, brick),
        ),
        Vec3::new(-OPENING / 2.0, 0.0, 0.0),
    );
    scene.attach(left_pillar, mantle);

    let right_pillar = scene
        .instantiate(left_pillar)
        .expect("pillar was just spawned");
    scene.set_object_translation(right_pillar, Vec3::new(OPENING / 2.0, 0.0, 0.0));
    scene.attach(right_pillar, mantle);

    // The top slab juts out past the pillars on both sides.
    let top = scene.spawn(
        "top",
        Primitive::new(
            Shape::cuboid(OPENING + PILLAR_WIDTH * 2.0, PILLAR_WIDTH, PILLAR_DEPTH * 1.25),
            Material::textured(Color::WHITE, brick),
        ),
        Vec3::new(0.0, OPENING / 2.0, PILLAR_DEPTH / 8.0),
    );
    scene.attach(top, mantle);

    scene.set_object_translation(
        mantle,
        Vec3::new(
            0.0,
            -ctx.room.half_height() + OPENING / 2.0,
            -ctx.room.half_depth() + PILLAR_DEPTH / 2.0,
        ),
    );
    mantle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Shading;
    use crate::primitive::Surface;
    use crate::room::RoomFrame;

    #[test]
    fn fire_is_unlit_and_translucent() {
        let mut scene = Scene::new();
        let mut ctx = SceneContext::new(RoomFrame::new(150.0, 100.0, 150.0));
        let group = mantle(&mut scene, &mut ctx);

        let fire = scene
            .get_object(group)
            .unwrap()
            .children(&scene)
            .find(|child| child.name == "fire")
            .unwrap();
        let primitive = scene.get_primitive(fire.primitive_id.unwrap()).unwrap();
        let Surface::Uniform(material) = &primitive.surface else {
            panic!("fire plane has a single material");
        };

        assert_eq!(material.shading, Shading::Unlit);
        assert_eq!(material.opacity, 0.55);
        assert!(material.texture.is_some());
    }

    #[test]
    fn pillars_are_copies_with_mirrored_positions() {
        let mut scene = Scene::new();
        let mut ctx = SceneContext::new(RoomFrame::new(150.0, 100.0, 150.0));
        let group = mantle(&mut scene, &mut ctx);

        let pillar_positions: Vec<Vec3> = scene
            .get_object(group)
            .unwrap()
            .children(&scene)
            .filter(|child| child.name == "pillar")
            .map(|child| child.transform.translation())
            .collect();

        assert_eq!(pillar_positions.len(), 2);
        assert!(pillar_positions.contains(&Vec3::new(-25.0, 0.0, 0.0)));
        assert!(pillar_positions.contains(&Vec3::new(25.0, 0.0, 0.0)));
    }
}
