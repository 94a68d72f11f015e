pub mod animation;
pub mod decor;
pub mod holiday;
pub mod material;
pub mod primitive;
pub mod room;
pub mod scene_graph;
pub mod texture;

pub use animation::{TrainAnimator, TrainState};
pub use holiday::HolidayScene;
pub use room::{RoomFrame, SceneContext};
