//=========================================================================
// Scene System
//=========================================================================
//
// Scene lifecycle contract for the director-driven run loop.
//
// Architecture:
//   SceneDirector
//     └─ queue: Vec<Box<dyn Scene>>
//
// Flow (per scene):
//   start() → [process_event()* → update() → draw()]* → end()
//   loop continues while is_valid() holds
//
// There is no inheritance chain. Shared behavior (validity flag, quit
// handling, soundtrack start/stop) lives in the concrete `SceneState`
// helper; each scene embeds one and calls its helpers explicitly.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::audio::Mixer;
use crate::core::event::GameEvent;
use crate::gfx::Surface;

//=== Module Declarations =================================================

mod state;

//=== Public API ==========================================================

pub use state::SceneState;

//=== Scene Trait =========================================================

/// Defines scene behavior with explicit lifecycle hooks.
///
/// A scene is a self-contained screen with its own event handling. The
/// director calls `start` once, then per tick feeds events through
/// `process_event`, advances state with `update`, and renders with
/// `draw`, until `is_valid` reports false; `end` then runs teardown.
///
/// # Minimal Implementation
///
/// Only `draw`, `process_event`, and the two queries are required;
/// `start`, `update`, and `end` default to no-ops:
///
/// ```rust
/// use circle_burst::prelude::*;
/// use circle_burst::gfx::color;
///
/// struct SolidScene(SceneState);
///
/// impl Scene for SolidScene {
///     fn draw(&self, surface: &mut Surface) {
///         surface.fill(self.0.background());
///     }
///     fn process_event(&mut self, event: &GameEvent, _mixer: &mut Mixer) {
///         self.0.handle_common_event(event);
///     }
///     fn is_valid(&self) -> bool {
///         self.0.is_valid()
///     }
///     fn frame_rate(&self) -> u32 {
///         self.0.frame_rate()
///     }
/// }
///
/// let scene = SolidScene(SceneState::new(color::BLACK));
/// assert!(scene.is_valid());
/// ```
pub trait Scene: Send {
    /// Called once when the scene becomes current, before any events.
    ///
    /// Default implementation does nothing. Scenes with a soundtrack
    /// call [`SceneState::start_soundtrack`] here.
    fn start(&mut self, _mixer: &mut Mixer) {}

    /// Processes one input event.
    ///
    /// Unrecognized events must produce no state change. Scenes extend
    /// (never replace) the common quit/Escape handling by delegating to
    /// [`SceneState::handle_common_event`] before their own rules.
    fn process_event(&mut self, event: &GameEvent, mixer: &mut Mixer);

    /// Advances scene state by one tick. Default is a no-op.
    fn update(&mut self) {}

    /// Renders the scene onto the surface. Side effect only.
    fn draw(&self, surface: &mut Surface);

    /// Called once after the scene is invalidated.
    ///
    /// Default implementation does nothing. Scenes with a soundtrack
    /// call [`SceneState::end_soundtrack`] here.
    fn end(&mut self, _mixer: &mut Mixer) {}

    /// `true` until an exit condition fires; never flips back.
    fn is_valid(&self) -> bool;

    /// The tick rate the scene wants from the director.
    fn frame_rate(&self) -> u32;
}
