//=========================================================================
// Asset Loading
//=========================================================================
//
// Reads the sprite scene's assets from a fixed `data/` directory next
// to the executable:
//
//   data/soundtrack.ogg       looping scene music
//   data/explosion.ogg        one-shot click effect
//   data/explosion_00.png …   numbered animation frames
//
// Policy: any load failure here is fatal to the caller — the binary
// logs the reason and aborts. Fail-fast keeps a missing or renamed
// asset from surfacing as a silently broken scene.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

//=== External Crates =====================================================

use image::RgbaImage;
use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::audio::{AudioError, SoundEffect};
use crate::entities::FrameSequence;

//=== Constants ===========================================================

const DATA_DIR: &str = "data";
const SOUNDTRACK_FILE: &str = "soundtrack.ogg";
const EFFECT_FILE: &str = "explosion.ogg";

/// Number of explosion animation frames shipped in `data/`.
const FRAME_COUNT: u32 = 9;

//=== AssetError ==========================================================

/// Errors raised while reading the data directory.
#[derive(Debug)]
pub enum AssetError {
    /// An image file could not be read or decoded.
    Image { path: PathBuf, source: image::ImageError },

    /// An audio file could not be read.
    Audio(AudioError),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image { path, source } => {
                write!(f, "failed to load image {}: {}", path.display(), source)
            }
            Self::Audio(e) => write!(f, "failed to load audio: {}", e),
        }
    }
}

impl std::error::Error for AssetError {}

impl From<AudioError> for AssetError {
    fn from(e: AudioError) -> Self {
        Self::Audio(e)
    }
}

//=== Data Directory ======================================================

/// Resolves the data directory relative to the program's own location.
///
/// Falls back to `./data` when the executable path cannot be queried
/// (some sandboxed environments).
pub fn data_dir() -> PathBuf {
    let base = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join(DATA_DIR)
}

//=== SpriteAssets ========================================================

/// Everything the sprite scene needs from disk, loaded up front.
#[derive(Debug)]
pub struct SpriteAssets {
    pub frames: FrameSequence,
    pub effect: SoundEffect,
    pub soundtrack: PathBuf,
}

impl SpriteAssets {
    /// Loads all sprite-scene assets from the given directory.
    ///
    /// The soundtrack itself is only path-checked later, at scene
    /// start, where the mixer decodes it; frames and the effect are
    /// read eagerly here.
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        let frames = load_explosion_frames(dir)?;
        let effect = SoundEffect::load(&dir.join(EFFECT_FILE))?;
        info!(target: "assets", "Loaded {} explosion frames from {}", frames.len(), dir.display());
        Ok(Self {
            frames: Arc::new(frames),
            effect,
            soundtrack: dir.join(SOUNDTRACK_FILE),
        })
    }

    /// Builds assets from already-decoded pieces. Used by tests.
    pub fn from_parts(frames: Vec<RgbaImage>, effect: SoundEffect, soundtrack: PathBuf) -> Self {
        Self {
            frames: Arc::new(frames),
            effect,
            soundtrack,
        }
    }
}

//=== Frame Loading =======================================================

/// Reads the numbered explosion frame sequence, in order.
fn load_explosion_frames(dir: &Path) -> Result<Vec<RgbaImage>, AssetError> {
    let mut frames = Vec::with_capacity(FRAME_COUNT as usize);
    for index in 0..FRAME_COUNT {
        let path = dir.join(format!("explosion_{:02}.png", index));
        let frame = image::open(&path)
            .map_err(|source| AssetError::Image { path: path.clone(), source })?
            .to_rgba8();
        debug!(target: "assets", "Frame {}: {}x{}", index, frame.width(), frame.height());
        frames.push(frame);
    }
    Ok(frames)
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_ends_with_data() {
        assert!(data_dir().ends_with("data"));
    }

    #[test]
    fn missing_frames_report_path_in_error() {
        let err = SpriteAssets::load(Path::new("definitely/not/here")).unwrap_err();
        match err {
            AssetError::Image { path, .. } => {
                assert!(path.ends_with("explosion_00.png"), "First missing frame is reported");
            }
            other => panic!("Expected image error, got {}", other),
        }
    }

    #[test]
    fn from_parts_shares_frames() {
        let assets = SpriteAssets::from_parts(
            vec![RgbaImage::new(2, 2)],
            SoundEffect::from_bytes(vec![]),
            PathBuf::from("x.ogg"),
        );
        assert_eq!(assets.frames.len(), 1);
    }
}
