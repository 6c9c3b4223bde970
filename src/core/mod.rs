//=========================================================================
// Core Systems
//=========================================================================
//
// Everything that runs on the logic (non-platform) thread:
// - `event`: platform-independent input events
// - `scene`: the scene lifecycle contract and shared state helper
// - `director`: the run loop that drives scenes at their frame rate
//
// The core thread owns the drawing surface and the audio mixer; the
// platform thread only ever sends events across the channel.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod director;
pub mod event;
pub mod scene;
