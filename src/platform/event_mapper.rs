//=========================================================================
// Platform Event Mapper
//=========================================================================
//
// Converts Winit input events to engine-level `GameEvent`s, keeping the
// scenes independent of the OS layer.
//
// The mapper is stateful: Winit reports mouse presses without a
// position, so the last `CursorMoved` coordinate is tracked here and
// stamped onto each `PointerDown`.
//
// Unsupported keys map to `KeyCode::Unidentified` (still delivered, so
// press-any-key scenes see them); unsupported events map to `None`.
//
//=========================================================================

//=== External Crates =====================================================

use winit::event::{ElementState, KeyEvent, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

//=== Internal Dependencies ===============================================

use crate::core::event::{GameEvent, KeyCode, PointerButton};

//=== Key Conversion ======================================================
//
// Maps `WinitKeyCode` values to the engine's internal `KeyCode` enum.
// Only the subset scenes care about is explicit; the rest fall back to
// `Unidentified`.
//

impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Control keys -------------------------------------------
            Escape => KeyCode::Escape,
            Space => KeyCode::Space,
            Enter => KeyCode::Enter,

            //--- Numeric keys -------------------------------------------
            Digit0 => KeyCode::Digit0, Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2, Digit3 => KeyCode::Digit3,
            Digit4 => KeyCode::Digit4, Digit5 => KeyCode::Digit5,
            Digit6 => KeyCode::Digit6, Digit7 => KeyCode::Digit7,
            Digit8 => KeyCode::Digit8, Digit9 => KeyCode::Digit9,

            //--- Alphabetic keys ----------------------------------------
            KeyA => KeyCode::KeyA, KeyB => KeyCode::KeyB, KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD, KeyE => KeyCode::KeyE, KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG, KeyH => KeyCode::KeyH, KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ, KeyK => KeyCode::KeyK, KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM, KeyN => KeyCode::KeyN, KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP, KeyQ => KeyCode::KeyQ, KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS, KeyT => KeyCode::KeyT, KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV, KeyW => KeyCode::KeyW, KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY, KeyZ => KeyCode::KeyZ,

            //--- Arrow keys ---------------------------------------------
            ArrowDown => KeyCode::ArrowDown, ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight, ArrowUp => KeyCode::ArrowUp,

            //--- Fallback -----------------------------------------------
            _ => KeyCode::Unidentified,
        }
    }
}

//=== Mouse Conversion ====================================================

impl From<WinitMouseButton> for PointerButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => PointerButton::Left,
            WinitMouseButton::Right => PointerButton::Right,
            WinitMouseButton::Middle => PointerButton::Middle,
            _ => PointerButton::Other,
        }
    }
}

//=== EventMapper =========================================================

/// Stateful Winit → `GameEvent` translator.
pub(crate) struct EventMapper {
    cursor_x: f64,
    cursor_y: f64,
}

impl EventMapper {
    pub fn new() -> Self {
        Self { cursor_x: 0.0, cursor_y: 0.0 }
    }

    /// Translates one window event. `CursorMoved` updates the tracked
    /// position and produces nothing; unsupported events produce `None`.
    pub fn map(&mut self, event: &WindowEvent) -> Option<GameEvent> {
        match event {
            //--- Cursor Tracking -----------------------------------------
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_x = position.x;
                self.cursor_y = position.y;
                None
            }

            //--- Keyboard Input ------------------------------------------
            WindowEvent::KeyboardInput {
                event: KeyEvent { physical_key, state, repeat, .. },
                ..
            } => {
                // OS key repeat would re-trigger press-any-key scenes.
                if *repeat {
                    return None;
                }
                let key = match physical_key {
                    PhysicalKey::Code(code) => KeyCode::from(*code),
                    _ => KeyCode::Unidentified,
                };
                Some(match state {
                    ElementState::Pressed => GameEvent::KeyDown(key),
                    ElementState::Released => GameEvent::KeyUp(key),
                })
            }

            //--- Mouse Button Input --------------------------------------
            WindowEvent::MouseInput { state, button, .. } => {
                let button = PointerButton::from(*button);
                Some(match state {
                    ElementState::Pressed => GameEvent::PointerDown {
                        button,
                        x: self.cursor_x as i32,
                        y: self.cursor_y as i32,
                    },
                    ElementState::Released => GameEvent::PointerUp(button),
                })
            }

            //--- Unhandled Events ----------------------------------------
            _ => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
