//=========================================================================
// Concrete Scenes
//=========================================================================
//
// The scenes the binary queues up:
// - `press_any_key`: transient informational screen
// - `sprite_scene`: the circle grid with click-to-explode wiring
//
//=========================================================================

//=== Module Declarations =================================================

mod press_any_key;
mod sprite_scene;

//=== Public API ==========================================================

pub use press_any_key::PressAnyKeyToExitScene;
pub use sprite_scene::{layout_circles, SpriteScene};
