//=========================================================================
// Game Entities
//=========================================================================
//
// The two entity kinds the sprite scene composes:
// - `circle`: colored disc with an Idle/Exploding state machine
// - `explosion`: transient sprite animation + the render group that
//   owns active sprites
//
//=========================================================================

//=== Module Declarations =================================================

mod circle;
pub mod explosion;

//=== Public API ==========================================================

pub use circle::{Circle, CircleState};
pub use explosion::{Explosion, FrameSequence, RenderGroup, SpriteId, TICKS_PER_FRAME};
