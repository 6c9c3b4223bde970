//=========================================================================
// Platform Subsystem
//=========================================================================
//
// Bridges Winit (OS-level events) with the core thread via channel.
//
// Architecture:
// ```text
//  Main Thread:                     Core Thread:
//  ┌──────────────────────────┐    ┌──────────────────┐
//  │  Winit Event Loop        │    │  SceneDirector   │
//  │   ↓                      │    │   ↓              │
//  │  EventMapper             │    │  Scene           │
//  │   ├─ Winit → GameEvent   │    │   ├─ events      │
//  │   └─ Tracks cursor pos   │    │   ├─ update      │
//  │   ↓                      │    │   └─ draw        │
//  │  EventBuffer             │    └──────────────────┘
//  │   ↓ (RedrawRequested)    │             ↑
//  │  Channel ────────────────┼─────────────┘
//  └──────────────────────────┘    PlatformEvent
// ```
//
// Key decisions:
// - `RedrawRequested` is the frame boundary: buffered input is flushed
//   atomically, so event order within a frame is deterministic
// - Empty batches are not sent
// - A disconnected channel (core thread gone) logs a warning and drops
//   events, leaving the window closable
// - Winit requires the main thread on macOS/iOS, so `Platform::run`
//   must be called from the thread that owns `main`
//
//=========================================================================

//=== Module Declarations =================================================

mod event_buffer;
mod event_mapper;

//=== External Crates =====================================================

use crossbeam_channel::Sender;
use log::{debug, error, info, trace, warn};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::event::GameEvent;
use event_buffer::EventBuffer;
use event_mapper::EventMapper;

//=== PlatformEvent =======================================================

/// Messages sent from the platform layer to the core thread. These are
/// the only values that cross the thread boundary.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Batched input events for a single frame, in arrival order.
    Inputs(Vec<GameEvent>),

    /// Window close requested by the user or the OS.
    WindowClosed,
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors. Fatal: without an event
/// loop there is no program.
#[derive(Debug)]
pub enum PlatformError {
    /// Failed to create the event loop (OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error.
    EventLoopExecution(winit::error::EventLoopError),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=== WindowConfig ========================================================

/// Window parameters, decided by the engine builder.
#[derive(Debug, Clone)]
pub(crate) struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

//=== Platform ============================================================

/// Window manager and input aggregator.
///
/// Runs on the main thread and sends batched events to the core thread.
/// Not `Send`: communication with other threads happens exclusively
/// over the channel sender.
pub(crate) struct Platform {
    /// OS window handle (created lazily in `resumed`).
    window: Option<Window>,

    config: WindowConfig,

    /// This frame's not-yet-flushed events.
    buffer: EventBuffer,

    event_sender: Sender<PlatformEvent>,

    /// Winit → engine event translation, with cursor tracking.
    mapper: EventMapper,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    pub fn new(event_sender: Sender<PlatformEvent>, config: WindowConfig) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            config,
            buffer: EventBuffer::new(),
            event_sender,
            mapper: EventMapper::new(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Starts the event loop. Blocks until the loop exits (window close
    /// or process exit); only event-loop *creation* failures surface as
    /// an error.
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Flushes the frame's buffered events to the core thread.
    ///
    /// On a disconnected channel (core thread exited early) the events
    /// are dropped with a warning; the window stays responsive so the
    /// user can still close it.
    fn flush_events(&mut self) {
        if let Some(batch) = self.buffer.drain() {
            trace!(target: "platform::input", "Flushing {} event(s)", batch.len());
            let count = batch.len();
            if self.event_sender.send(PlatformEvent::Inputs(batch)).is_err() {
                warn!(target: "platform::input", "Channel disconnected, dropping {} event(s)", count);
            }
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on first activation (startup or mobile
    /// resume).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                let _ = self.event_sender.send(PlatformEvent::WindowClosed);
                event_loop.exit();
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: flush buffered input, schedule next frame.
                self.flush_events();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            other => {
                if let Some(event) = self.mapper.map(other) {
                    self.buffer.push(event);
                }
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::KeyCode;
    use crossbeam_channel::unbounded;

    fn config() -> WindowConfig {
        WindowConfig {
            title: "test".to_string(),
            width: 800,
            height: 600,
        }
    }

    #[test]
    fn window_is_created_lazily() {
        let (tx, _rx) = unbounded();
        let platform = Platform::new(tx, config());
        assert!(platform.window().is_none());
    }

    #[test]
    fn flush_empty_buffer_sends_nothing() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, config());

        platform.flush_events();

        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn flush_sends_buffered_events_once() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, config());

        platform.buffer.push(GameEvent::KeyDown(KeyCode::Space));
        platform.flush_events();
        platform.flush_events();

        match rx.try_recv() {
            Ok(PlatformEvent::Inputs(batch)) => assert_eq!(batch.len(), 1),
            other => panic!("Expected Inputs, got {:?}", other),
        }
        assert!(rx.try_recv().is_err(), "Second flush must not resend");
    }

    #[test]
    fn flush_survives_disconnected_channel() {
        let (tx, rx) = unbounded();
        let mut platform = Platform::new(tx, config());
        platform.buffer.push(GameEvent::Quit);

        drop(rx);
        platform.flush_events();
    }
}
