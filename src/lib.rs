//=========================================================================
// Circle Burst — Library Root
//
// A windowed toy game: a grid of colored circles; clicking one plays a
// sprite explosion and a sound effect. Built as a small scene-based
// engine so the screens (press-any-key intro, the circle grid) share
// one lifecycle.
//
// Responsibilities of this crate root:
// - Expose the engine facade (`Engine`, `EngineBuilder`)
// - Expose the pieces games compose: scenes, entities, gfx, audio
// - Keep the platform layer (Winit integration) private
//
// Typical usage:
// ```no_run
// use circle_burst::prelude::*;
// use circle_burst::gfx::color;
//
// EngineBuilder::new()
//     .push_scene(Box::new(PressAnyKeyToExitScene::new(color::BLACK)))
//     .build()
//     .run()
//     .unwrap();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the scene lifecycle, events, and the director; the rest
// are the building blocks scenes are made of. All are public so the
// binary (and tests) can compose them freely.
//
pub mod assets;
pub mod audio;
pub mod core;
pub mod entities;
pub mod gfx;
pub mod prelude;
pub mod scenes;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the OS-specific logic (window, Winit event loop)
// and stays private; `engine` wires platform and core together.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
pub use platform::PlatformError;
