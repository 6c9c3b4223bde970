//=========================================================================
// Circle Burst — Binary Entry Point
//=========================================================================
//
// Queues the two scenes and hands control to the engine:
//   1. Press-any-key splash
//   2. The circle grid
//
// Asset files are expected in `data/` next to the executable; a missing
// or unreadable asset is fatal here, before any window appears.
//
//=========================================================================

use std::process;

use log::error;

use circle_burst::assets::{self, SpriteAssets};
use circle_burst::gfx::color;
use circle_burst::prelude::*;

const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let data_dir = assets::data_dir();
    let sprite_assets = SpriteAssets::load(&data_dir).unwrap_or_else(|e| {
        error!("Asset load failed: {}", e);
        process::exit(1);
    });

    let result = EngineBuilder::new()
        .with_title("Circle Burst")
        .with_window_size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .push_scene(Box::new(PressAnyKeyToExitScene::new(color::BLACK)))
        .push_scene(Box::new(SpriteScene::new(
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
            sprite_assets,
        )))
        .build()
        .run();

    if let Err(e) = result {
        error!("Engine terminated with error: {}", e);
        process::exit(1);
    }
}
