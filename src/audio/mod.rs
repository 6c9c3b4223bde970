//=========================================================================
// Audio Subsystem
//=========================================================================
//
// Fire-and-forget playback against the platform mixer (rodio).
//
// Two playback paths:
// - Soundtrack: one looping music sink, started at scene start and
//   faded out (500 ms, blocking the caller) at scene end.
// - Effects: short one-shot samples decoded from preloaded bytes and
//   detached onto the output stream.
//
// A `Mixer` may be muted: either explicitly (tests, headless CI) or
// because no output device could be acquired. All playback calls on a
// muted mixer are silent no-ops — audio ergonomics must never decide
// whether the game runs.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

//=== External Crates =====================================================

use log::{debug, info, warn};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

//=== Constants ===========================================================

/// Soundtrack fade-out duration at scene end.
const FADE_OUT: Duration = Duration::from_millis(500);

/// Number of volume steps used by the fade-out ramp.
const FADE_STEPS: u32 = 20;

/// Volume levels for the fade ramp, from just below the starting
/// volume down to silence.
fn fade_curve(start_volume: f32) -> impl Iterator<Item = f32> {
    (0..FADE_STEPS)
        .rev()
        .map(move |remaining| start_volume * remaining as f32 / FADE_STEPS as f32)
}

//=== AudioError ==========================================================

/// Errors from device acquisition, asset reading, or decoding.
#[derive(Debug)]
pub enum AudioError {
    /// No usable output device.
    Device(rodio::StreamError),

    /// Audio file could not be read.
    Io(std::io::Error),

    /// Audio data could not be decoded.
    Decode(rodio::decoder::DecoderError),

    /// Sink creation or playback submission failed.
    Play(rodio::PlayError),
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Device(e) => write!(f, "audio device unavailable: {}", e),
            Self::Io(e) => write!(f, "audio file read failed: {}", e),
            Self::Decode(e) => write!(f, "audio decode failed: {}", e),
            Self::Play(e) => write!(f, "audio playback failed: {}", e),
        }
    }
}

impl std::error::Error for AudioError {}

impl From<std::io::Error> for AudioError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<rodio::decoder::DecoderError> for AudioError {
    fn from(e: rodio::decoder::DecoderError) -> Self {
        Self::Decode(e)
    }
}

impl From<rodio::PlayError> for AudioError {
    fn from(e: rodio::PlayError) -> Self {
        Self::Play(e)
    }
}

//=== SoundEffect =========================================================

/// A one-shot sample, preloaded as raw file bytes.
///
/// Decoding happens at play time; loading (and therefore missing-file
/// detection) happens up front, where failures are still fatal.
#[derive(Clone, Debug)]
pub struct SoundEffect {
    bytes: Arc<[u8]>,
}

impl SoundEffect {
    /// Reads an effect file into memory.
    pub fn load(path: &Path) -> Result<Self, AudioError> {
        let bytes = std::fs::read(path)?;
        debug!(target: "audio", "Loaded effect {} ({} bytes)", path.display(), bytes.len());
        Ok(Self { bytes: bytes.into() })
    }

    /// Wraps raw bytes directly. Used by tests.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes: bytes.into() }
    }
}

//=== Mixer ===============================================================

/// Handle to the platform audio output.
///
/// Owned by the scene director and passed to scenes during lifecycle
/// calls. Not `Send`: the output stream is bound to the thread that
/// created it, which is the core thread.
pub struct Mixer {
    output: Option<AudioOutput>,
}

struct AudioOutput {
    // Kept alive for the duration of the mixer; dropping it kills playback.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    music: Option<Sink>,
}

impl Mixer {
    //--- Construction -----------------------------------------------------

    /// Acquires the default output device.
    pub fn new() -> Result<Self, AudioError> {
        let (stream, handle) = OutputStream::try_default().map_err(AudioError::Device)?;
        info!(target: "audio", "Audio output acquired");
        Ok(Self {
            output: Some(AudioOutput { _stream: stream, handle, music: None }),
        })
    }

    /// Creates a mixer that plays nothing. For tests and headless runs.
    pub fn muted() -> Self {
        Self { output: None }
    }

    pub fn is_muted(&self) -> bool {
        self.output.is_none()
    }

    //--- Soundtrack -------------------------------------------------------

    /// Loads a music file and loops it forever at the given volume.
    ///
    /// Replaces any soundtrack already playing.
    pub fn play_soundtrack(&mut self, path: &Path, volume: f32) -> Result<(), AudioError> {
        let Some(output) = self.output.as_mut() else {
            return Ok(());
        };

        let file = BufReader::new(File::open(path)?);
        let source = Decoder::new(file)?.repeat_infinite();

        let sink = Sink::try_new(&output.handle)?;
        sink.set_volume(volume);
        sink.append(source);

        info!(target: "audio", "Soundtrack started: {}", path.display());
        if let Some(old) = output.music.replace(sink) {
            old.stop();
        }
        Ok(())
    }

    /// Fades the soundtrack out over [`FADE_OUT`], then stops it.
    ///
    /// Blocks the caller for the full fade duration. Scene teardown
    /// runs on the core thread, so the ramp always completes before
    /// the next scene starts (or the process exits); the sink is moved
    /// out, so a new soundtrack can start immediately afterwards.
    pub fn fade_out_soundtrack(&mut self) {
        let Some(sink) = self.output.as_mut().and_then(|o| o.music.take()) else {
            return;
        };

        info!(target: "audio", "Fading soundtrack out over {:?}", FADE_OUT);
        let step = FADE_OUT / FADE_STEPS;
        for volume in fade_curve(sink.volume()) {
            sink.set_volume(volume);
            thread::sleep(step);
        }
        sink.stop();
    }

    /// Whether a soundtrack sink currently exists.
    pub fn soundtrack_playing(&self) -> bool {
        self.output
            .as_ref()
            .is_some_and(|o| o.music.as_ref().is_some_and(|s| !s.empty()))
    }

    //--- Effects ----------------------------------------------------------

    /// Plays a one-shot effect, detached.
    ///
    /// Decode or submission errors are logged and dropped; a failed
    /// click sound must not disturb the frame loop.
    pub fn play_effect(&self, effect: &SoundEffect) {
        let Some(output) = self.output.as_ref() else {
            return;
        };

        let cursor = Cursor::new(Arc::clone(&effect.bytes));
        match Decoder::new(cursor) {
            Ok(source) => {
                if let Err(e) = output.handle.play_raw(source.convert_samples()) {
                    warn!(target: "audio", "Effect playback failed: {}", e);
                }
            }
            Err(e) => warn!(target: "audio", "Effect decode failed: {}", e),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
