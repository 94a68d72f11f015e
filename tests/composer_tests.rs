use glam::Vec3;
use yuletide::decor::{string_lights::string_lights, tree};
use yuletide::room::{RoomFrame, SceneContext};
use yuletide::scene_graph::scene::Scene;

fn child_translation(scene: &Scene, group: yuletide::scene_graph::object3d::ObjectId, name: &str) -> Vec3 {
    scene
        .get_object(group)
        .unwrap()
        .children(scene)
        .find(|child| child.name == name)
        .unwrap_or_else(|| panic!("no child named {name}"))
        .transform
        .translation()
}

#[test]
fn string_lights_count_for_the_default_room() {
    let mut scene = Scene::new();
    let room = RoomFrame::new(150.0, 100.0, 150.0);

    let lights = string_lights(&mut scene, &room);
    // 31 bulbs per string, two strings per axis.
    assert_eq!(scene.get_object(lights).unwrap().child_ids.len(), 124);
}

#[test]
fn string_lights_count_follows_the_room_size() {
    let mut scene = Scene::new();
    let room = RoomFrame::new(100.0, 80.0, 60.0);

    let lights = string_lights(&mut scene, &room);
    // 2 * (60/5 + 1) + 2 * (100/5 + 1)
    assert_eq!(scene.get_object(lights).unwrap().child_ids.len(), 68);
}

#[test]
fn string_lights_hang_below_the_ceiling() {
    let mut scene = Scene::new();
    let room = RoomFrame::new(150.0, 100.0, 150.0);

    let lights = string_lights(&mut scene, &room);
    for bulb in scene.get_object(lights).unwrap().children(&scene) {
        let position = bulb.transform.translation();
        assert_eq!(position.y, 45.0);
        assert!(position.x.abs() <= 75.0 && position.z.abs() <= 75.0);
    }
}

#[test]
fn tree_parts_stack_at_the_expected_heights() {
    let mut scene = Scene::new();
    let mut ctx = SceneContext::new(RoomFrame::new(150.0, 100.0, 150.0));

    let tree = tree::christmas_tree(&mut scene, &mut ctx, tree::TreeParams::default());

    assert_eq!(child_translation(&scene, tree, "trunk").y, -45.0);
    assert_eq!(child_translation(&scene, tree, "canopy").y, -15.0);
    assert_eq!(child_translation(&scene, tree, "star top").y, 12.5);
    assert_eq!(child_translation(&scene, tree, "star bottom").y, 10.0);
}

#[test]
fn presents_keep_their_dimensions_in_any_room() {
    use yuletide::primitive::Shape;

    let expected = [
        (5.0, 7.5, 5.0),
        (5.5, 5.5, 5.5),
        (5.5, 9.0, 10.0),
        (12.5, 5.0, 12.5),
    ];

    for room_height in [100.0, 60.0] {
        let mut scene = Scene::new();
        let mut ctx = SceneContext::new(RoomFrame::new(150.0, room_height, 150.0));
        let tree = tree::christmas_tree(&mut scene, &mut ctx, tree::TreeParams::default());

        let presents: Vec<_> = scene
            .get_object(tree)
            .unwrap()
            .children(&scene)
            .filter(|child| child.name == "present")
            .collect();
        assert_eq!(presents.len(), 4);

        for (present, &(width, height, length)) in presents.iter().zip(expected.iter()) {
            let primitive = scene.get_primitive(present.primitive_id.unwrap()).unwrap();
            assert_eq!(primitive.shape, Shape::cuboid(width, height, length));
        }
    }
}

#[test]
fn present_placement_only_shifts_with_room_height() {
    let mut tall = Scene::new();
    let mut tall_ctx = SceneContext::new(RoomFrame::new(150.0, 100.0, 150.0));
    let tall_tree = tree::christmas_tree(&mut tall, &mut tall_ctx, tree::TreeParams::default());

    let mut short = Scene::new();
    let mut short_ctx = SceneContext::new(RoomFrame::new(40.0, 60.0, 40.0));
    let short_tree = tree::christmas_tree(&mut short, &mut short_ctx, tree::TreeParams::default());

    let tall_positions: Vec<Vec3> = tall
        .get_object(tall_tree)
        .unwrap()
        .children(&tall)
        .filter(|child| child.name == "present")
        .map(|child| child.transform.translation())
        .collect();
    let short_positions: Vec<Vec3> = short
        .get_object(short_tree)
        .unwrap()
        .children(&short)
        .filter(|child| child.name == "present")
        .map(|child| child.transform.translation())
        .collect();

    // Horizontal placement is room-size-invariant; only the floor offset
    // (half the room height) moves.
    for (tall_pos, short_pos) in tall_positions.iter().zip(short_positions.iter()) {
        assert_eq!(tall_pos.x, short_pos.x);
        assert_eq!(tall_pos.z, short_pos.z);
        assert_eq!(short_pos.y - tall_pos.y, 20.0);
    }
}
