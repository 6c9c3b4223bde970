//=========================================================================
// Press-Any-Key Scene
//=========================================================================
//
// Transient informational scene: a solid background that goes away as
// soon as the user presses anything. Exit rules are the common ones
// (quit signal, Escape) plus the any-key extension.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::audio::Mixer;
use crate::core::event::GameEvent;
use crate::core::scene::{Scene, SceneState};
use crate::gfx::{Color, Surface};

//=== PressAnyKeyToExitScene ==============================================

pub struct PressAnyKeyToExitScene {
    state: SceneState,
}

impl PressAnyKeyToExitScene {
    pub fn new(background: Color) -> Self {
        Self {
            state: SceneState::new(background),
        }
    }
}

impl Scene for PressAnyKeyToExitScene {
    fn process_event(&mut self, event: &GameEvent, _mixer: &mut Mixer) {
        // Base rules first, then the any-key extension.
        self.state.handle_common_event(event);
        self.state.handle_any_key_exit(event);
    }

    fn draw(&self, surface: &mut Surface) {
        surface.fill(self.state.background());
    }

    fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    fn frame_rate(&self) -> u32 {
        self.state.frame_rate()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::{KeyCode, PointerButton};
    use crate::gfx::color;

    fn scene() -> PressAnyKeyToExitScene {
        PressAnyKeyToExitScene::new(color::BLACK)
    }

    #[test]
    fn any_key_down_invalidates() {
        let mut mixer = Mixer::muted();
        let mut scene = scene();
        assert!(scene.is_valid());

        scene.process_event(&GameEvent::KeyDown(KeyCode::Space), &mut mixer);
        assert!(!scene.is_valid());
    }

    #[test]
    fn quit_invalidates() {
        let mut mixer = Mixer::muted();
        let mut scene = scene();
        scene.process_event(&GameEvent::Quit, &mut mixer);
        assert!(!scene.is_valid());
    }

    #[test]
    fn pointer_and_key_release_are_ignored() {
        let mut mixer = Mixer::muted();
        let mut scene = scene();
        scene.process_event(&GameEvent::KeyUp(KeyCode::Space), &mut mixer);
        scene.process_event(
            &GameEvent::PointerDown { button: PointerButton::Left, x: 5, y: 5 },
            &mut mixer,
        );
        assert!(scene.is_valid());
    }

    #[test]
    fn validity_never_returns_true() {
        let mut mixer = Mixer::muted();
        let mut scene = scene();
        scene.process_event(&GameEvent::KeyDown(KeyCode::KeyA), &mut mixer);
        // Follow-up events must not revive the scene.
        scene.process_event(&GameEvent::KeyUp(KeyCode::KeyA), &mut mixer);
        scene.update();
        assert!(!scene.is_valid());
    }

    #[test]
    fn draw_fills_background() {
        let scene = scene();
        let mut surface = Surface::new(8, 8);
        scene.draw(&mut surface);
        assert_eq!(surface.pixel(4, 4), color::BLACK.to_rgba());
    }
}
