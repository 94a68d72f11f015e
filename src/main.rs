use std::path::PathBuf;

use anyhow::Result;

use yuletide::animation::TrainState;
use yuletide::{HolidayScene, RoomFrame};

fn main() -> Result<()> {
    pretty_env_logger::init();

    let room = RoomFrame::new(150.0, 100.0, 150.0);
    let mut holiday = HolidayScene::new(room)?;

    let assets = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("assets"));
    let loaded = holiday.context.textures.load_all(&assets);
    log::info!(
        "loaded {}/{} textures from {}",
        loaded,
        holiday.context.textures.len(),
        assets.display()
    );

    // Stand-in for a real frame scheduler: fixed ticks until the train parks.
    let mut ticks: u64 = 0;
    loop {
        let state = holiday.update()?;
        ticks += 1;

        if ticks % 1000 == 0 {
            let position = holiday
                .scene
                .world_translation(holiday.train)
                .unwrap_or_default();
            log::info!(
                "tick {}: train at ({:.2}, {:.2}, {:.2})",
                ticks,
                position.x,
                position.y,
                position.z
            );
        }

        if state == TrainState::Stopped {
            break;
        }
    }

    log::info!(
        "train stopped after {} ticks at t = {:.2}",
        ticks,
        holiday.animator.elapsed()
    );
    Ok(())
}
