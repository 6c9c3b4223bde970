//=========================================================================
// Explosion Sprite & Render Group
//=========================================================================
//
// Transient sprite animation: a finite, non-restartable frame sequence
// anchored at the circle that spawned it.
//
// Ownership: the composing scene owns one `RenderGroup` and spawns
// explosions into it, receiving a `SpriteId` handle back. Each update
// tick advances every sprite; finished sprites are removed from the
// group in the same pass — no external destroy call exists.
//
// Timing: one animation frame is held for `TICKS_PER_FRAME` scheduler
// ticks, so a sequence of N frames lives exactly N × TICKS_PER_FRAME
// ticks.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::sync::Arc;

//=== External Crates =====================================================

use image::RgbaImage;
use log::debug;

//=== Internal Dependencies ===============================================

use crate::gfx::Surface;

//=== Constants ===========================================================

/// Scheduler ticks each animation frame is shown for.
pub const TICKS_PER_FRAME: u32 = 4;

//=== Frame Sequence ======================================================

/// Shared, ordered explosion frames. Every explosion in a scene blits
/// from the same decoded images.
pub type FrameSequence = Arc<Vec<RgbaImage>>;

//=== SpriteId ============================================================

/// Handle to a sprite inside a [`RenderGroup`]. Stable for the sprite's
/// lifetime; dangling after the sprite expires (queries just report the
/// sprite as absent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteId(u64);

impl SpriteId {
    #[cfg(test)]
    pub(crate) fn test_id(raw: u64) -> Self {
        Self(raw)
    }
}

//=== Explosion ===========================================================

/// One playing explosion animation.
pub struct Explosion {
    center_x: i32,
    center_y: i32,
    frames: FrameSequence,
    frame_index: usize,
    ticks_in_frame: u32,
}

impl Explosion {
    /// Creates an explosion anchored at a circle's center.
    ///
    /// The anchor position is copied out of the circle: it is immutable
    /// for the circle's whole life, so the sprite needs no reference
    /// back to it.
    pub fn new(anchor: (i32, i32), frames: FrameSequence) -> Self {
        Self {
            center_x: anchor.0,
            center_y: anchor.1,
            frames,
            frame_index: 0,
            ticks_in_frame: 0,
        }
    }

    /// `true` once every frame has been shown for its full duration.
    pub fn is_finished(&self) -> bool {
        self.frame_index >= self.frames.len()
    }

    /// Advances the per-frame timer by one tick, moving to the next
    /// frame when the current one has been held long enough.
    fn advance(&mut self) {
        if self.is_finished() {
            return;
        }
        self.ticks_in_frame += 1;
        if self.ticks_in_frame >= TICKS_PER_FRAME {
            self.ticks_in_frame = 0;
            self.frame_index += 1;
        }
    }

    /// Blits the current frame centered on the anchor.
    fn draw(&self, surface: &mut Surface) {
        let Some(frame) = self.frames.get(self.frame_index) else {
            return;
        };
        let left = self.center_x - frame.width() as i32 / 2;
        let top = self.center_y - frame.height() as i32 / 2;
        surface.blit(frame, left, top);
    }
}

//=== RenderGroup =========================================================

/// The scene-owned collection of active sprites, updated and drawn
/// together once per frame.
pub struct RenderGroup {
    next_id: u64,
    sprites: Vec<(SpriteId, Explosion)>,
}

impl RenderGroup {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            sprites: Vec::new(),
        }
    }

    //--- Membership -------------------------------------------------------

    /// Adds a sprite and returns its handle.
    pub fn spawn(&mut self, explosion: Explosion) -> SpriteId {
        let id = SpriteId(self.next_id);
        self.next_id += 1;
        self.sprites.push((id, explosion));
        id
    }

    pub fn contains(&self, id: SpriteId) -> bool {
        self.sprites.iter().any(|(sprite_id, _)| *sprite_id == id)
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    //--- Frame Step -------------------------------------------------------

    /// Advances every sprite one tick and drops the ones that finished.
    pub fn update(&mut self) {
        for (_, sprite) in self.sprites.iter_mut() {
            sprite.advance();
        }
        let before = self.sprites.len();
        self.sprites.retain(|(_, sprite)| !sprite.is_finished());
        let expired = before - self.sprites.len();
        if expired > 0 {
            debug!(target: "scene", "{} explosion(s) expired", expired);
        }
    }

    /// Draws all active sprites in spawn order.
    pub fn draw(&self, surface: &mut Surface) {
        for (_, sprite) in &self.sprites {
            sprite.draw(surface);
        }
    }
}

impl Default for RenderGroup {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    /// Builds a sequence of `count` solid single-color 4×4 frames, each
    /// a different shade so tests can tell them apart.
    fn frames(count: u8) -> FrameSequence {
        let images = (0..count)
            .map(|i| {
                RgbaImage::from_pixel(4, 4, Rgba([i + 1, 0, 0, 255]))
            })
            .collect();
        Arc::new(images)
    }

    #[test]
    fn frame_advances_every_ticks_per_frame() {
        let mut explosion = Explosion::new((10, 10), frames(3));

        for _ in 0..TICKS_PER_FRAME - 1 {
            explosion.advance();
        }
        assert_eq!(explosion.frame_index, 0, "Frame holds until the tick count is reached");

        explosion.advance();
        assert_eq!(explosion.frame_index, 1);
    }

    #[test]
    fn finishes_after_n_times_t_ticks() {
        let n = 3u32;
        let mut explosion = Explosion::new((0, 0), frames(n as u8));

        for tick in 0..n * TICKS_PER_FRAME {
            assert!(!explosion.is_finished(), "Finished early at tick {}", tick);
            explosion.advance();
        }
        assert!(explosion.is_finished());
    }

    #[test]
    fn empty_sequence_is_finished_immediately() {
        let explosion = Explosion::new((0, 0), frames(0));
        assert!(explosion.is_finished());
    }

    #[test]
    fn group_removes_expired_sprites() {
        let mut group = RenderGroup::new();
        let id = group.spawn(Explosion::new((5, 5), frames(2)));
        assert!(group.contains(id));
        assert_eq!(group.len(), 1);

        for _ in 0..2 * TICKS_PER_FRAME {
            group.update();
        }
        assert!(!group.contains(id), "Sprite must self-remove when its sequence ends");
        assert!(group.is_empty());
    }

    #[test]
    fn group_hands_out_distinct_ids() {
        let mut group = RenderGroup::new();
        let a = group.spawn(Explosion::new((0, 0), frames(1)));
        let b = group.spawn(Explosion::new((0, 0), frames(1)));
        assert_ne!(a, b);
    }

    #[test]
    fn draw_blits_current_frame_centered() {
        let mut group = RenderGroup::new();
        group.spawn(Explosion::new((8, 8), frames(2)));

        let mut surface = Surface::new(16, 16);
        group.draw(&mut surface);
        // 4×4 frame centered on (8,8) covers 6..10 in both axes.
        assert_eq!(surface.pixel(6, 6), Rgba([1, 0, 0, 255]));
        assert_eq!(surface.pixel(9, 9), Rgba([1, 0, 0, 255]));
        assert_eq!(surface.pixel(5, 5), Rgba([0, 0, 0, 0]), "Outside the frame stays untouched");
    }

    #[test]
    fn second_frame_shows_after_advancing() {
        let mut group = RenderGroup::new();
        group.spawn(Explosion::new((8, 8), frames(2)));

        for _ in 0..TICKS_PER_FRAME {
            group.update();
        }

        let mut surface = Surface::new(16, 16);
        group.draw(&mut surface);
        assert_eq!(surface.pixel(8, 8), Rgba([2, 0, 0, 255]));
    }
}
