use glam::Vec3;

use crate::material::{Color, Material, Side};
use crate::primitive::{Primitive, Shape};
use crate::scene_graph::object3d::ObjectId;
use crate::scene_graph::scene::{Light, Scene};
use crate::texture::TextureRegistry;

/// Bounding-box dimensions of the room. The room is centered at the origin,
/// so every decoration is positioned in terms of the half extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomFrame {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

impl RoomFrame {
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    pub fn half_width(&self) -> f32 {
        self.width / 2.0
    }

    pub fn half_height(&self) -> f32 {
        self.height / 2.0
    }

    pub fn half_depth(&self) -> f32 {
        self.depth / 2.0
    }
}

/// Everything a composer needs besides the scene itself: the room frame and
/// the texture registry. Passed explicitly; there is no global scene state.
pub struct SceneContext {
    pub room: RoomFrame,
    pub textures: TextureRegistry,
}

impl SceneContext {
    pub fn new(room: RoomFrame) -> Self {
        Self {
            room,
            textures: TextureRegistry::new(),
        }
    }
}

// Fallback colors, in case the wall and floor textures never load.
pub const WALL_COLOR: Color = Color::rgb(70, 130, 200);
pub const CEILING_COLOR: Color = Color::rgb(255, 222, 173);
pub const FLOOR_COLOR: Color = Color::rgb(240, 160, 90);

const AMBIENT_COLOR: Color = Color::rgb(220, 220, 220);
const DIRECTIONAL_COLOR: Color = Color::rgb(50, 50, 50);

/// The room itself: one cuboid viewed from the inside, with per-face
/// materials in the order right wall, left wall, ceiling, floor, front
/// wall, back wall.
pub fn room_shell(scene: &mut Scene, ctx: &mut SceneContext) -> ObjectId {
    let brick = ctx.textures.register("brick.jpg");
    let carpet = ctx.textures.register("carpet.jpg");

    let wall = Material::textured(WALL_COLOR, brick).with_side(Side::Back);
    let ceiling = Material::phong(CEILING_COLOR).with_side(Side::Back);
    let floor = Material::textured(FLOOR_COLOR, carpet).with_side(Side::Back);

    let shape = Shape::cuboid(ctx.room.width, ctx.room.height, ctx.room.depth);
    let faces = [
        wall.clone(),
        wall.clone(),
        ceiling,
        floor,
        wall.clone(),
        wall,
    ];

    scene.spawn("room shell", Primitive::per_face(shape, faces), Vec3::ZERO)
}

/// Soft ambient fill plus one dim directional light anchored in a corner.
pub fn add_room_lights(scene: &mut Scene) {
    scene.add_light(Light::Ambient {
        color: AMBIENT_COLOR,
    });
    scene.add_light(Light::Directional {
        color: DIRECTIONAL_COLOR,
        position: Vec3::new(50.0, 50.0, 100.0),
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Surface;

    #[test]
    fn room_shell_has_six_back_side_faces() {
        let mut scene = Scene::new();
        let mut ctx = SceneContext::new(RoomFrame::new(150.0, 100.0, 150.0));

        let shell = room_shell(&mut scene, &mut ctx);
        let primitive_id = scene.get_object(shell).unwrap().primitive_id.unwrap();
        let primitive = scene.get_primitive(primitive_id).unwrap();

        assert_eq!(
            primitive.shape,
            Shape::cuboid(150.0, 100.0, 150.0)
        );
        let Surface::PerFace(faces) = &primitive.surface else {
            panic!("room shell should carry per-face materials");
        };
        assert!(faces.iter().all(|face| face.side == Side::Back));
        assert_eq!(faces[2].color, CEILING_COLOR);
        assert_eq!(faces[3].color, FLOOR_COLOR);
        assert!(faces[3].texture.is_some());
    }

    #[test]
    fn room_lights_are_one_ambient_and_one_directional() {
        let mut scene = Scene::new();
        add_room_lights(&mut scene);

        assert_eq!(scene.lights().len(), 2);
        assert!(matches!(scene.lights()[0], Light::Ambient { .. }));
        assert!(matches!(
            scene.lights()[1],
            Light::Directional { position, .. } if position == Vec3::new(50.0, 50.0, 100.0)
        ));
    }
}
