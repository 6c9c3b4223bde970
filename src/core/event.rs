//=========================================================================
// Game Event Types
//=========================================================================
//
// Platform-independent representation of the discrete events scenes
// consume. The platform layer maps OS events (Winit) into these; scenes
// never see platform types.
//
// Responsibilities:
// - Represent quit, keyboard, and pointer events in a stable form
// - Carry pointer coordinates on the press itself (hit testing needs
//   the position at click time, not the live cursor)
// - Provide an `Unidentified` fallback that scenes silently ignore
//
//=========================================================================

//=== PointerButton Enum ==================================================
//
// Identifies which pointer button triggered an event, independent of
// the underlying platform library.
//
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
    Other,
}

//=== KeyCode Enum ========================================================
//
// Physical keyboard keys in a simplified cross-platform form. Only the
// codes the scenes care about are mapped explicitly; everything else
// falls back to `Unidentified`.
//
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Control keys -----------------------------------------------------
    Escape, Space, Enter,

    //--- Numeric keys -----------------------------------------------------
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic keys --------------------------------------------------
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow keys -------------------------------------------------------
    ArrowDown, ArrowLeft, ArrowRight, ArrowUp,

    //--- Fallback ---------------------------------------------------------
    // Keys not mapped explicitly by the platform layer.
    Unidentified,
}

//=== GameEvent Enum ======================================================
//
// A concrete input event as normalized by the platform layer. Pointer
// presses carry the cursor position at the moment of the click.
//
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Window close requested by the user or the OS.
    Quit,

    KeyDown(KeyCode),
    KeyUp(KeyCode),

    PointerDown { button: PointerButton, x: i32, y: i32 },
    PointerUp(PointerButton),

    /// Anything the platform layer could not map. Scenes ignore these.
    Unidentified,
}

//=========================================================================
// Unit Tests
//=========================================================================
