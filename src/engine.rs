//=========================================================================
// Circle Burst Engine
//=========================================================================
//
// Main entry point and thread wiring.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_title()            ├─ spawns core thread
//         ├─ with_window_size()      │   (SceneDirector @ scene fps)
//         ├─ with_channel_capacity() └─ runs platform event loop
//         └─ push_scene()              on the main thread
// ```
//
// Shutdown paths:
// - Window closed → `WindowClosed` reaches the director, the current
//   scene gets a Quit, the queue is abandoned, the event loop exits.
// - Scene queue exhausted → the core thread exits the process; the
//   Winit loop has no other way to be woken from outside.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::process;
use std::thread;

//=== External Crates =====================================================

use crossbeam_channel::bounded;
use log::{info, warn};

//=== Internal Dependencies ===============================================

use crate::audio::Mixer;
use crate::core::director::{DirectorOutcome, SceneDirector};
use crate::core::scene::Scene;
use crate::gfx::Surface;
use crate::platform::{Platform, PlatformError, WindowConfig};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **Title**: "Circle Burst"
/// - **Window**: 800×600 logical pixels
/// - **Channel capacity**: 128 event batches
///
/// # Examples
///
/// ```no_run
/// use circle_burst::prelude::*;
/// use circle_burst::gfx::color;
///
/// EngineBuilder::new()
///     .with_window_size(1024, 768)
///     .push_scene(Box::new(PressAnyKeyToExitScene::new(color::BLACK)))
///     .build()
///     .run()
///     .unwrap();
/// ```
pub struct EngineBuilder {
    title: String,
    width: u32,
    height: u32,
    channel_capacity: usize,
    scenes: Vec<Box<dyn Scene>>,
}

impl EngineBuilder {
    /// Creates a builder with default settings and an empty scene queue.
    pub fn new() -> Self {
        Self {
            title: "Circle Burst".to_string(),
            width: 800,
            height: 600,
            channel_capacity: 128,
            scenes: Vec::new(),
        }
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the window (and drawing surface) size in logical pixels.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window dimensions must be positive");
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the platform → core channel capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Appends a scene to the queue. Scenes play in push order.
    pub fn push_scene(mut self, scene: Box<dyn Scene>) -> Self {
        self.scenes.push(scene);
        self
    }

    /// Builds the engine instance.
    pub fn build(self) -> Engine {
        info!(
            target: "engine",
            "Building engine ({}x{}, {} scene(s), channel: {})",
            self.width, self.height, self.scenes.len(), self.channel_capacity
        );
        Engine {
            title: self.title,
            width: self.width,
            height: self.height,
            channel_capacity: self.channel_capacity,
            scenes: self.scenes,
        }
    }

    #[cfg(test)]
    pub(crate) fn scene_count(&self) -> usize {
        self.scenes.len()
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// The assembled runtime: window configuration plus the scene queue.
///
/// `run` wires the two threads together and blocks until shutdown.
pub struct Engine {
    title: String,
    width: u32,
    height: u32,
    channel_capacity: usize,
    scenes: Vec<Box<dyn Scene>>,
}

impl Engine {
    /// Runs the engine. Blocks on the platform event loop.
    ///
    /// Must be called from the main thread (Winit requirement on
    /// macOS/iOS). If the scene queue finishes on its own, the core
    /// thread exits the process with status 0.
    pub fn run(self) -> Result<(), PlatformError> {
        if self.scenes.is_empty() {
            warn!(target: "engine", "No scenes queued; the program will exit immediately");
        }

        let (sender, receiver) = bounded(self.channel_capacity);
        let (width, height) = (self.width, self.height);
        let scenes = self.scenes;

        //--- Core thread: scene director ------------------------------
        let core = thread::spawn(move || {
            // The output stream must be created on the thread that uses
            // it, hence mixer acquisition happens here, not in main.
            let mixer = Mixer::new().unwrap_or_else(|e| {
                warn!(target: "engine", "Running muted: {}", e);
                Mixer::muted()
            });

            let director = SceneDirector::new(Surface::new(width, height), mixer, scenes);
            match director.run(&receiver) {
                DirectorOutcome::Completed => {
                    info!(target: "engine", "All scenes finished; exiting");
                    process::exit(0);
                }
                DirectorOutcome::PlatformClosed => {
                    info!(target: "engine", "Core thread exiting after platform close");
                }
            }
        });

        //--- Main thread: platform event loop -------------------------
        let platform = Platform::new(
            sender,
            WindowConfig {
                title: self.title,
                width,
                height,
            },
        );
        let result = platform.run();

        // Only reached when the event loop exited (window close path).
        let _ = core.join();
        result
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::color;
    use crate::scenes::PressAnyKeyToExitScene;

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.width, 800);
        assert_eq!(builder.height, 600);
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.scene_count(), 0);
    }

    #[test]
    fn builder_accumulates_scenes_in_order() {
        let builder = EngineBuilder::new()
            .push_scene(Box::new(PressAnyKeyToExitScene::new(color::BLACK)))
            .push_scene(Box::new(PressAnyKeyToExitScene::new(color::WHITE)));
        assert_eq!(builder.scene_count(), 2);
    }

    #[test]
    #[should_panic(expected = "Window dimensions must be positive")]
    fn zero_window_size_is_rejected() {
        let _ = EngineBuilder::new().with_window_size(0, 600);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn zero_channel_capacity_is_rejected() {
        let _ = EngineBuilder::new().with_channel_capacity(0);
    }
}
