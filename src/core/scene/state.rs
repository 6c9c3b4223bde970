//=========================================================================
// Scene State Helper
//=========================================================================
//
// Concrete shared-behavior helper every scene variant embeds.
//
// Replaces an inheritance chain: instead of implicit super-calls, each
// scene's `process_event` invokes `handle_common_event` (and optionally
// `handle_any_key_exit`) explicitly, then adds its own rules.
//
// Holds the data every scene carries:
// - background color
// - frame rate (fixed 60)
// - validity flag (flips false exactly once, never back)
// - optional soundtrack path
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::path::{Path, PathBuf};
use std::process;

//=== External Crates =====================================================

use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::audio::Mixer;
use crate::core::event::{GameEvent, KeyCode};
use crate::gfx::Color;

//=== Constants ===========================================================

/// Fixed tick rate every scene requests from the director.
const FRAME_RATE: u32 = 60;

/// Soundtrack playback volume (full scale = 1.0).
const SOUNDTRACK_VOLUME: f32 = 0.5;

//=== SceneState ==========================================================

/// Shared per-scene state and common event handling.
pub struct SceneState {
    background: Color,
    frame_rate: u32,
    valid: bool,
    soundtrack: Option<PathBuf>,
}

impl SceneState {
    //--- Construction -----------------------------------------------------

    /// Creates scene state with no soundtrack.
    pub fn new(background: Color) -> Self {
        Self {
            background,
            frame_rate: FRAME_RATE,
            valid: true,
            soundtrack: None,
        }
    }

    /// Creates scene state with a soundtrack to loop while the scene runs.
    pub fn with_soundtrack(background: Color, soundtrack: impl Into<PathBuf>) -> Self {
        Self {
            soundtrack: Some(soundtrack.into()),
            ..Self::new(background)
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn background(&self) -> Color {
        self.background
    }

    /// `true` until an exit condition fires.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn frame_rate(&self) -> u32 {
        self.frame_rate
    }

    pub fn soundtrack(&self) -> Option<&Path> {
        self.soundtrack.as_deref()
    }

    //--- Validity ---------------------------------------------------------

    /// Marks the scene finished. Idempotent; there is no way back.
    pub fn invalidate(&mut self) {
        if self.valid {
            info!(target: "scene", "Scene invalidated");
            self.valid = false;
        }
    }

    //--- Common Event Rules -----------------------------------------------

    /// Base rule shared by every scene: quit signal or Escape exits.
    ///
    /// All other events are left untouched for the caller to interpret.
    pub fn handle_common_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Quit => {
                info!(target: "scene", "Quit requested");
                self.invalidate();
            }
            GameEvent::KeyDown(KeyCode::Escape) => {
                info!(target: "scene", "Escape pressed");
                self.invalidate();
            }
            _ => {}
        }
    }

    /// Extension rule: any key-down exits the scene.
    ///
    /// Callers that want press-any-key behavior invoke this *after*
    /// [`Self::handle_common_event`].
    pub fn handle_any_key_exit(&mut self, event: &GameEvent) {
        if let GameEvent::KeyDown(_) = event {
            self.invalidate();
        }
    }

    //--- Soundtrack -------------------------------------------------------

    /// Starts looping the soundtrack, if one is configured.
    ///
    /// A load failure is fatal: the reason is logged and the process
    /// aborts.
    pub fn start_soundtrack(&self, mixer: &mut Mixer) {
        let Some(path) = self.soundtrack() else {
            return;
        };
        if let Err(e) = mixer.play_soundtrack(path, SOUNDTRACK_VOLUME) {
            error!(target: "scene", "Failed to start soundtrack {}: {}", path.display(), e);
            process::exit(1);
        }
    }

    /// Fades the soundtrack out, if one is playing.
    pub fn end_soundtrack(&self, mixer: &mut Mixer) {
        if self.soundtrack.is_some() {
            mixer.fade_out_soundtrack();
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
