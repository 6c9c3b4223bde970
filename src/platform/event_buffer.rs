//=========================================================================
// Event Buffer
//=========================================================================
//
// Per-frame accumulator between the Winit callbacks and the channel to
// the core thread. Events are delivered in arrival order; identical
// consecutive events (OS stutter) are collapsed.
//
// The buffer lives only for the current frame: it is drained on every
// `RedrawRequested` and the drained batch is sent as one message.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::event::GameEvent;

//=== EventBuffer =========================================================

pub(crate) struct EventBuffer {
    events: Vec<GameEvent>,
}

impl EventBuffer {
    pub fn new() -> Self {
        const BASE_CAPACITY: usize = 32;
        Self {
            events: Vec::with_capacity(BASE_CAPACITY),
        }
    }

    /// Appends an event, dropping exact consecutive duplicates.
    pub fn push(&mut self, event: GameEvent) {
        if self.events.last() != Some(&event) {
            self.events.push(event);
        }
    }

    /// Takes this frame's batch. Returns `None` when nothing queued so
    /// empty batches never cross the channel.
    pub fn drain(&mut self) -> Option<Vec<GameEvent>> {
        if self.events.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.events))
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
