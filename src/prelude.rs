//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use circle_burst::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine facade
pub use crate::engine::{Engine, EngineBuilder};

// Scene lifecycle
pub use crate::core::scene::{Scene, SceneState};

// Events
pub use crate::core::event::{GameEvent, KeyCode, PointerButton};

// Concrete scenes
pub use crate::scenes::{PressAnyKeyToExitScene, SpriteScene};

// Building blocks
pub use crate::assets::SpriteAssets;
pub use crate::audio::Mixer;
pub use crate::entities::{Circle, Explosion, RenderGroup};
pub use crate::gfx::{Color, Rect, Surface};
