use anyhow::anyhow;
use glam::{Quat, Vec3};

use crate::scene_graph::object3d::ObjectId;
use crate::scene_graph::scene::Scene;

pub const TIME_STEP: f64 = 0.01;
pub const SPIN_STEP: f64 = 0.03;
pub const STOP_TIME: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainState {
    Running,
    Stopped,
}

/// Drives the train around its orbit, one externally scheduled tick per
/// frame. The animator is bound to the scene that owns the train; ticking it
/// against any other scene is a contract violation and fails loudly.
///
/// The orbit radius is 1 even though the drawn track torus has radius 30;
/// the train has always drifted off its tracks and changing that here would
/// change the scene.
pub struct TrainAnimator {
    scene_id: u64,
    train: ObjectId,
    t: f64,
    spin: f64,
    state: TrainState,
}

impl TrainAnimator {
    pub fn new(scene: &Scene, train: ObjectId) -> anyhow::Result<Self> {
        scene
            .get_object(train)
            .ok_or_else(|| anyhow!("train object is not part of the given scene"))?;

        Ok(Self {
            scene_id: scene.id(),
            train,
            t: 0.0,
            spin: 0.0,
            state: TrainState::Running,
        })
    }

    pub fn state(&self) -> TrainState {
        self.state
    }

    pub fn elapsed(&self) -> f64 {
        self.t
    }

    pub fn spin(&self) -> f64 {
        self.spin
    }

    pub fn train(&self) -> ObjectId {
        self.train
    }

    /// Advances the animation by one frame. While running, elapsed time and
    /// spin accumulate and the train is moved along its orbit; once elapsed
    /// time reaches the stop threshold the animator parks in `Stopped` and
    /// ticks become no-ops.
    pub fn tick(&mut self, scene: &mut Scene) -> anyhow::Result<TrainState> {
        if scene.id() != self.scene_id {
            return Err(anyhow!(
                "animator is bound to scene {} but was ticked against scene {}",
                self.scene_id,
                scene.id()
            ));
        }
        if scene.get_object(self.train).is_none() {
            return Err(anyhow!("train object is no longer part of the scene"));
        }

        if self.state == TrainState::Stopped {
            return Ok(self.state);
        }

        self.t += TIME_STEP;
        self.spin += SPIN_STEP;

        scene.set_object_transform(
            self.train,
            Vec3::new(self.t.cos() as f32, 0.0, self.t.sin() as f32),
            Quat::from_rotation_y(self.spin as f32),
            1.0,
        );

        if self.t >= STOP_TIME {
            self.state = TrainState::Stopped;
        }

        Ok(self.state)
    }
}
