use glam::Vec3;

use crate::animation::{TrainAnimator, TrainState};
use crate::decor::{couch, mantle, string_lights, train, tree, tv, vases};
use crate::room::{add_room_lights, room_shell, RoomFrame, SceneContext};
use crate::scene_graph::object3d::ObjectId;
use crate::scene_graph::scene::Scene;

/// The fully assembled holiday room: one scene graph, the handle to the
/// train, and the animator that drives it. Assembling twice yields two
/// completely independent scenes.
pub struct HolidayScene {
    pub scene: Scene,
    pub context: SceneContext,
    pub root: ObjectId,
    pub train: ObjectId,
    pub animator: TrainAnimator,
}

impl HolidayScene {
    pub fn new(room: RoomFrame) -> anyhow::Result<Self> {
        let mut context = SceneContext::new(room);
        let mut scene = Scene::new();

        let root = scene.spawn_group("holiday room");

        let shell = room_shell(&mut scene, &mut context);
        scene.attach(shell, root);
        add_room_lights(&mut scene);

        // The tree, the train and its tracks travel together as one group,
        // set off-center so the rest of the room stays walkable.
        let tree_and_train = scene.spawn_group("tree and train");
        let tree = tree::christmas_tree(&mut scene, &mut context, tree::TreeParams::default());
        let train = train::train(&mut scene);
        let tracks = train::tracks(&mut scene);
        scene.attach(tree, tree_and_train);
        scene.attach(train, tree_and_train);
        scene.attach(tracks, tree_and_train);
        scene.set_object_translation(
            tree_and_train,
            Vec3::new(
                room.half_width() * 0.5,
                0.0,
                -room.half_depth() * 0.4,
            ),
        );
        scene.attach(tree_and_train, root);

        let lights = string_lights::string_lights(&mut scene, &room);
        scene.attach(lights, root);

        let mantle = mantle::mantle(&mut scene, &mut context);
        scene.attach(mantle, root);

        let couches = couch::couches(&mut scene, &room);
        scene.attach(couches, root);

        let tv = tv::television(&mut scene, &room);
        scene.attach(tv, root);

        let vases = vases::vases(&mut scene, &room);
        scene.attach(vases, root);

        scene.update_world_transforms();

        let animator = TrainAnimator::new(&scene, train)?;
        log::debug!(
            "assembled holiday room with {} nodes and {} textures",
            scene.object_count(),
            context.textures.len()
        );

        Ok(Self {
            scene,
            context,
            root,
            train,
            animator,
        })
    }

    /// One frame: advance the animator, then refresh world transforms.
    pub fn update(&mut self) -> anyhow::Result<TrainState> {
        let state = self.animator.tick(&mut self.scene)?;
        self.scene.update_world_transforms();
        Ok(state)
    }
}
