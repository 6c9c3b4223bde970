//=========================================================================
// Scene Director
//=========================================================================
//
// The core-thread run loop that plays a queue of scenes in order.
//
// Per scene:
//  1. `start()` once (soundtrack begins here)
//  2. Each tick: gather platform events → `process_event()` each,
//     `update()`, `draw()`, then sleep out the remainder of the frame
//  3. When `is_valid()` goes false: `end()` (soundtrack fades), next
//     scene
//
// Pacing follows the scene's `frame_rate()`: the event wait doubles as
// the frame timer (`recv_timeout`), with a final sleep to hold the
// tick length steady.
//
// A window close (or a dead platform channel) is translated into a
// `GameEvent::Quit` for the current scene, and the remaining queue is
// abandoned.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, RecvTimeoutError};
use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::audio::Mixer;
use crate::core::event::GameEvent;
use crate::core::scene::Scene;
use crate::gfx::Surface;
use crate::platform::PlatformEvent;

//=== Outcome =============================================================

/// Why the director stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectorOutcome {
    /// Every queued scene ran to its natural end.
    Completed,

    /// The platform closed (window close or channel loss) mid-queue.
    PlatformClosed,
}

//=== SceneDirector =======================================================

/// Owns the drawing surface, the mixer, and the scene queue; drives the
/// scene lifecycle on the core thread.
pub struct SceneDirector {
    surface: Surface,
    mixer: Mixer,
    queue: VecDeque<Box<dyn Scene>>,
}

impl SceneDirector {
    //--- Construction -----------------------------------------------------

    pub fn new(surface: Surface, mixer: Mixer, scenes: Vec<Box<dyn Scene>>) -> Self {
        Self {
            surface,
            mixer,
            queue: scenes.into(),
        }
    }

    //--- Execution --------------------------------------------------------

    /// Plays the queue until it is exhausted or the platform goes away.
    pub fn run(mut self, receiver: &Receiver<PlatformEvent>) -> DirectorOutcome {
        while let Some(mut scene) = self.queue.pop_front() {
            debug!(target: "director", "Starting next scene ({} queued after it)", self.queue.len());
            scene.start(&mut self.mixer);
            let closed = self.play(scene.as_mut(), receiver);
            scene.end(&mut self.mixer);

            if closed {
                info!(target: "director", "Platform closed; abandoning {} queued scene(s)", self.queue.len());
                return DirectorOutcome::PlatformClosed;
            }
        }
        info!(target: "director", "Scene queue exhausted");
        DirectorOutcome::Completed
    }

    /// Ticks one scene until it invalidates. Returns `true` if the
    /// platform closed while the scene was running.
    fn play(&mut self, scene: &mut dyn Scene, receiver: &Receiver<PlatformEvent>) -> bool {
        let frame = Duration::from_secs_f64(1.0 / f64::from(scene.frame_rate()));
        let mut events: Vec<GameEvent> = Vec::new();
        let mut closed = false;

        while scene.is_valid() {
            let tick_start = Instant::now();

            //--- Step 1: Gather platform events ---------------------------
            events.clear();
            closed |= collect_events(receiver, &mut events, frame);

            //--- Step 2: Feed events to the scene -------------------------
            for event in &events {
                scene.process_event(event, &mut self.mixer);
            }

            //--- Step 3: Advance and render -------------------------------
            scene.update();
            scene.draw(&mut self.surface);

            if closed {
                break;
            }

            //--- Step 4: Hold the tick length -----------------------------
            let elapsed = tick_start.elapsed();
            if elapsed < frame {
                thread::sleep(frame - elapsed);
            }
        }
        closed
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn surface(&self) -> &Surface {
        &self.surface
    }
}

//=== Event Collection ====================================================

/// Waits up to one frame for events, then drains whatever else queued.
///
/// `WindowClosed` and a disconnected channel both surface to the scene
/// as `GameEvent::Quit`; the return value reports the closure so the
/// director can stop after this tick.
fn collect_events(
    receiver: &Receiver<PlatformEvent>,
    events: &mut Vec<GameEvent>,
    frame: Duration,
) -> bool {
    let mut closed = false;

    match receiver.recv_timeout(frame) {
        Ok(PlatformEvent::Inputs(batch)) => events.extend(batch),
        Ok(PlatformEvent::WindowClosed) | Err(RecvTimeoutError::Disconnected) => {
            events.push(GameEvent::Quit);
            closed = true;
        }
        Err(RecvTimeoutError::Timeout) => {}
    }

    while let Ok(event) = receiver.try_recv() {
        match event {
            PlatformEvent::Inputs(batch) => events.extend(batch),
            PlatformEvent::WindowClosed => {
                events.push(GameEvent::Quit);
                closed = true;
            }
        }
    }

    closed
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::color;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    //--- Scripted Scene ---------------------------------------------------
    //
    // Invalidates itself after a fixed number of updates, or on Quit.
    // Shares counters with the test so lifecycle calls can be verified.
    //
    #[derive(Default)]
    struct Counters {
        starts: AtomicUsize,
        updates: AtomicUsize,
        draws: AtomicUsize,
        ends: AtomicUsize,
    }

    struct ScriptedScene {
        counters: Arc<Counters>,
        updates_until_done: usize,
        valid: bool,
    }

    impl ScriptedScene {
        fn new(counters: Arc<Counters>, updates_until_done: usize) -> Self {
            Self { counters, updates_until_done, valid: true }
        }
    }

    impl Scene for ScriptedScene {
        fn start(&mut self, _mixer: &mut Mixer) {
            self.counters.starts.fetch_add(1, Ordering::SeqCst);
        }

        fn process_event(&mut self, event: &GameEvent, _mixer: &mut Mixer) {
            if matches!(event, GameEvent::Quit) {
                self.valid = false;
            }
        }

        fn update(&mut self) {
            let done = self.counters.updates.fetch_add(1, Ordering::SeqCst) + 1;
            if done >= self.updates_until_done {
                self.valid = false;
            }
        }

        fn draw(&self, surface: &mut Surface) {
            self.counters.draws.fetch_add(1, Ordering::SeqCst);
            surface.fill(color::WHITE);
        }

        fn end(&mut self, _mixer: &mut Mixer) {
            self.counters.ends.fetch_add(1, Ordering::SeqCst);
        }

        fn is_valid(&self) -> bool {
            self.valid
        }

        fn frame_rate(&self) -> u32 {
            // Fast ticks keep the tests quick.
            1000
        }
    }

    fn director(scenes: Vec<Box<dyn Scene>>) -> SceneDirector {
        SceneDirector::new(Surface::new(8, 8), Mixer::muted(), scenes)
    }

    #[test]
    fn scene_runs_full_lifecycle() {
        let counters = Arc::new(Counters::default());
        let scene = ScriptedScene::new(counters.clone(), 3);
        let (sender, receiver) = crossbeam_channel::unbounded();

        let outcome = director(vec![Box::new(scene)]).run(&receiver);
        drop(sender);

        assert_eq!(outcome, DirectorOutcome::Completed);
        assert_eq!(counters.starts.load(Ordering::SeqCst), 1);
        assert_eq!(counters.updates.load(Ordering::SeqCst), 3);
        assert_eq!(counters.draws.load(Ordering::SeqCst), 3, "One draw per update tick");
        assert_eq!(counters.ends.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn scenes_play_in_queue_order() {
        let first = Arc::new(Counters::default());
        let second = Arc::new(Counters::default());
        let (sender, receiver) = crossbeam_channel::unbounded();

        let outcome = director(vec![
            Box::new(ScriptedScene::new(first.clone(), 1)),
            Box::new(ScriptedScene::new(second.clone(), 2)),
        ])
        .run(&receiver);
        drop(sender);

        assert_eq!(outcome, DirectorOutcome::Completed);
        assert_eq!(first.ends.load(Ordering::SeqCst), 1);
        assert_eq!(second.starts.load(Ordering::SeqCst), 1);
        assert_eq!(second.updates.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn window_close_quits_current_scene_and_skips_the_rest() {
        let first = Arc::new(Counters::default());
        let rest = Arc::new(Counters::default());
        let (sender, receiver) = crossbeam_channel::unbounded();

        sender
            .send(PlatformEvent::WindowClosed)
            .expect("channel open");

        let outcome = director(vec![
            Box::new(ScriptedScene::new(first.clone(), 100)),
            Box::new(ScriptedScene::new(rest.clone(), 1)),
        ])
        .run(&receiver);

        assert_eq!(outcome, DirectorOutcome::PlatformClosed);
        assert_eq!(first.ends.load(Ordering::SeqCst), 1, "Interrupted scene still gets end()");
        assert_eq!(rest.starts.load(Ordering::SeqCst), 0, "Queued scenes are abandoned");
    }

    #[test]
    fn disconnected_channel_counts_as_platform_closed() {
        let counters = Arc::new(Counters::default());
        let (sender, receiver) = crossbeam_channel::unbounded::<PlatformEvent>();
        drop(sender);

        let outcome =
            director(vec![Box::new(ScriptedScene::new(counters.clone(), 100))]).run(&receiver);

        assert_eq!(outcome, DirectorOutcome::PlatformClosed);
        assert_eq!(counters.ends.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn input_batches_reach_the_scene() {
        let counters = Arc::new(Counters::default());
        let (sender, receiver) = crossbeam_channel::unbounded();

        // A Quit delivered as a normal input batch.
        sender
            .send(PlatformEvent::Inputs(vec![GameEvent::Quit]))
            .expect("channel open");

        let d = director(vec![Box::new(ScriptedScene::new(counters.clone(), 100))]);
        let outcome = d.run(&receiver);
        drop(sender);

        assert_eq!(outcome, DirectorOutcome::Completed, "Scene quit on its own terms");
        assert!(counters.updates.load(Ordering::SeqCst) <= 1);
    }

    #[test]
    fn draw_lands_on_the_director_surface() {
        let (sender, receiver) = crossbeam_channel::unbounded::<PlatformEvent>();

        // run() consumes the director, so tick one scene by hand.
        let mut d = director(Vec::new());
        let mut scene = ScriptedScene::new(Arc::new(Counters::default()), 1);
        d.play(&mut scene, &receiver);
        drop(sender);

        assert_eq!(d.surface().pixel(0, 0), color::WHITE.to_rgba());
    }
}
