//=========================================================================
// Sprite Scene
//=========================================================================
//
// Composition root of the game: a grid of colored circles sized to fill
// the window, wired so that clicking a circle spawns an explosion
// sprite and plays a one-shot effect.
//
// Layout:
//   circle width 100, gutter = width/8 = 12, step = 112
//   columns = ⌊W / step⌋ − 1, rows = ⌊H / step⌋ − 1
//   centers at (step·(j+1), step·(i+1))
//
// This leaves a one-step margin on every side and guarantees the
// bounding rects never touch (gutter > 0). Hit testing uses those
// bounding rects, not circular distance — see `Circle::rect`.
//
// The scene owns the render group; explosions register into it at
// spawn time and remove themselves when their frame sequence ends. A
// circle whose explosion has finished is simply never drawn again.
//
//=========================================================================

//=== External Crates =====================================================

use log::info;
use rand::Rng;

//=== Internal Dependencies ===============================================

use crate::assets::SpriteAssets;
use crate::audio::{Mixer, SoundEffect};
use crate::core::event::GameEvent;
use crate::core::scene::{Scene, SceneState};
use crate::entities::{Circle, Explosion, FrameSequence, RenderGroup};
use crate::gfx::color::{self, random_color};
use crate::gfx::Surface;

//=== Layout Constants ====================================================

const CIRCLE_WIDTH: u32 = 100;
const CIRCLE_RADIUS: u32 = CIRCLE_WIDTH / 2;
const GUTTER: u32 = CIRCLE_WIDTH / 8;
const STEP: u32 = CIRCLE_WIDTH + GUTTER;

//=== Grid Layout =========================================================

/// Lays out the circle grid for a window of the given size.
///
/// Deterministic placement, random palette colors. Public so the layout
/// properties can be checked without constructing a whole scene.
pub fn layout_circles<R: Rng + ?Sized>(width: u32, height: u32, rng: &mut R) -> Vec<Circle> {
    let columns = (width / STEP).saturating_sub(1);
    let rows = (height / STEP).saturating_sub(1);
    info!(target: "scene", "Grid: {} rows of {} circles", rows, columns);

    let mut circles = Vec::with_capacity((rows * columns) as usize);
    for i in 0..rows {
        for j in 0..columns {
            let center_x = (STEP * (j + 1)) as i32;
            let center_y = (STEP * (i + 1)) as i32;
            circles.push(Circle::new(
                center_x,
                center_y,
                CIRCLE_RADIUS,
                random_color(rng),
                format!("{}, {}", i + 1, j + 1),
            ));
        }
    }
    circles
}

//=== SpriteScene =========================================================

pub struct SpriteScene {
    state: SceneState,
    circles: Vec<Circle>,
    group: RenderGroup,
    frames: FrameSequence,
    effect: SoundEffect,
}

impl SpriteScene {
    /// Builds the scene for a window of the given size.
    ///
    /// Asset decoding has already happened in [`SpriteAssets`]; this
    /// only lays out the grid and wires ownership.
    pub fn new(width: u32, height: u32, assets: SpriteAssets) -> Self {
        let mut rng = rand::thread_rng();
        Self::with_rng(width, height, assets, &mut rng)
    }

    /// Like [`Self::new`] but with a caller-supplied RNG, so tests get
    /// reproducible colors.
    pub fn with_rng<R: Rng + ?Sized>(
        width: u32,
        height: u32,
        assets: SpriteAssets,
        rng: &mut R,
    ) -> Self {
        Self {
            state: SceneState::with_soundtrack(color::BLACK, assets.soundtrack),
            circles: layout_circles(width, height, rng),
            group: RenderGroup::new(),
            frames: assets.frames,
            effect: assets.effect,
        }
    }

    //--- Test / Inspection Accessors --------------------------------------

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn render_group(&self) -> &RenderGroup {
        &self.group
    }

    //--- Explosion Triggering ---------------------------------------------

    /// Tests every circle's bounding rect against a press coordinate.
    ///
    /// All matches are processed (the grid makes overlap impossible, so
    /// in practice at most one fires). An already-exploding circle is
    /// skipped: exactly one explosion per circle, ever.
    fn handle_pointer_press(&mut self, x: i32, y: i32, mixer: &mut Mixer) {
        for circle in &mut self.circles {
            if circle.is_exploding() || !circle.rect().contains(x, y) {
                continue;
            }
            let sprite = self
                .group
                .spawn(Explosion::new(circle.center(), self.frames.clone()));
            circle.ignite(sprite);
            info!(target: "scene", "Circle {} exploded", circle.name());
            mixer.play_effect(&self.effect);
        }
    }
}

impl Scene for SpriteScene {
    fn start(&mut self, mixer: &mut Mixer) {
        self.state.start_soundtrack(mixer);
    }

    fn process_event(&mut self, event: &GameEvent, mixer: &mut Mixer) {
        // Common rules, then the any-key extension, then this scene's own.
        self.state.handle_common_event(event);
        self.state.handle_any_key_exit(event);

        if let GameEvent::PointerDown { x, y, .. } = event {
            self.handle_pointer_press(*x, *y, mixer);
        }
    }

    fn update(&mut self) {
        self.group.update();
    }

    fn draw(&self, surface: &mut Surface) {
        surface.fill(self.state.background());
        for circle in &self.circles {
            if !circle.is_exploding() {
                circle.draw(surface);
            }
        }
        self.group.draw(surface);
    }

    fn end(&mut self, mixer: &mut Mixer) {
        self.state.end_soundtrack(mixer);
    }

    fn is_valid(&self) -> bool {
        self.state.is_valid()
    }

    fn frame_rate(&self) -> u32 {
        self.state.frame_rate()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::event::{KeyCode, PointerButton};
    use crate::entities::TICKS_PER_FRAME;
    use image::RgbaImage;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::path::PathBuf;

    fn test_assets(frame_count: u8) -> SpriteAssets {
        let frames = (0..frame_count).map(|_| RgbaImage::new(4, 4)).collect();
        SpriteAssets::from_parts(
            frames,
            SoundEffect::from_bytes(Vec::new()),
            PathBuf::from("test.ogg"),
        )
    }

    fn test_scene(width: u32, height: u32) -> SpriteScene {
        let mut rng = StdRng::seed_from_u64(1);
        SpriteScene::with_rng(width, height, test_assets(3), &mut rng)
    }

    fn press(x: i32, y: i32) -> GameEvent {
        GameEvent::PointerDown { button: PointerButton::Left, x, y }
    }

    //--- Layout Properties ------------------------------------------------

    #[test]
    fn layout_800x600_matches_worked_example() {
        let mut rng = StdRng::seed_from_u64(2);
        let circles = layout_circles(800, 600, &mut rng);

        // step = 112: 6 columns, 4 rows.
        assert_eq!(circles.len(), 24);
        assert_eq!(circles[0].center(), (112, 112));
        assert_eq!(circles[0].name(), "1, 1");
        assert_eq!(circles[23].center(), (6 * 112, 4 * 112));
        assert_eq!(circles[23].name(), "4, 6");
    }

    #[test]
    fn layout_rects_stay_inside_the_window() {
        let mut rng = StdRng::seed_from_u64(3);
        for &(w, h) in &[(800u32, 600u32), (1024, 768), (1920, 1080), (300, 300)] {
            for circle in layout_circles(w, h, &mut rng) {
                let rect = circle.rect();
                assert!(rect.left > 0 && rect.top > 0, "Rect starts inside {}x{}", w, h);
                assert!(
                    rect.right() < w as i32 && rect.bottom() < h as i32,
                    "Rect {:?} escapes {}x{}",
                    rect,
                    w,
                    h
                );
            }
        }
    }

    #[test]
    fn layout_rects_never_overlap() {
        let mut rng = StdRng::seed_from_u64(4);
        let circles = layout_circles(800, 600, &mut rng);
        for (i, a) in circles.iter().enumerate() {
            for b in circles.iter().skip(i + 1) {
                assert!(
                    !a.rect().overlaps(&b.rect()),
                    "Circles {} and {} overlap",
                    a.name(),
                    b.name()
                );
            }
        }
    }

    #[test]
    fn tiny_window_produces_empty_grid() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(layout_circles(100, 100, &mut rng).is_empty());
    }

    //--- Click Wiring -----------------------------------------------------

    #[test]
    fn click_inside_one_circle_spawns_one_explosion() {
        let mut mixer = Mixer::muted();
        let mut scene = test_scene(800, 600);

        scene.process_event(&press(112, 112), &mut mixer);

        assert!(scene.circles()[0].is_exploding());
        assert_eq!(scene.render_group().len(), 1);
        assert!(
            scene.circles()[1..].iter().all(|c| !c.is_exploding()),
            "Only the clicked circle reacts"
        );
        assert!(scene.is_valid(), "Clicking does not end the scene");
    }

    #[test]
    fn click_in_gutter_changes_nothing() {
        let mut mixer = Mixer::muted();
        let mut scene = test_scene(800, 600);

        // (50, 50) lies in the top-left margin, outside every rect.
        scene.process_event(&press(50, 50), &mut mixer);

        assert!(scene.circles().iter().all(|c| !c.is_exploding()));
        assert!(scene.render_group().is_empty());
    }

    #[test]
    fn corner_click_hits_by_rect_even_outside_the_disc() {
        let mut mixer = Mixer::muted();
        let mut scene = test_scene(800, 600);

        // Top-left corner of the first circle's bounding square: inside
        // the rect, outside the disc. The hit still fires; this is the
        // documented approximation.
        scene.process_event(&press(62, 62), &mut mixer);
        assert!(scene.circles()[0].is_exploding());
    }

    #[test]
    fn reclicking_an_exploding_circle_spawns_nothing_new() {
        let mut mixer = Mixer::muted();
        let mut scene = test_scene(800, 600);

        scene.process_event(&press(112, 112), &mut mixer);
        scene.process_event(&press(112, 112), &mut mixer);

        assert_eq!(scene.render_group().len(), 1, "One explosion per circle, ever");
    }

    #[test]
    fn explosion_expires_after_full_sequence() {
        let mut mixer = Mixer::muted();
        let mut scene = test_scene(800, 600);
        scene.process_event(&press(112, 112), &mut mixer);

        // 3 frames × TICKS_PER_FRAME ticks.
        for _ in 0..3 * TICKS_PER_FRAME {
            scene.update();
        }

        assert!(scene.render_group().is_empty());
        assert!(
            scene.circles()[0].is_exploding(),
            "The circle stays exploded; it is not resettable"
        );
    }

    //--- Exit Rules -------------------------------------------------------

    #[test]
    fn any_key_exits_the_sprite_scene() {
        let mut mixer = Mixer::muted();
        let mut scene = test_scene(800, 600);
        scene.process_event(&GameEvent::KeyDown(KeyCode::KeyG), &mut mixer);
        assert!(!scene.is_valid());
    }

    #[test]
    fn quit_and_escape_exit() {
        let mut mixer = Mixer::muted();

        let mut scene = test_scene(800, 600);
        scene.process_event(&GameEvent::Quit, &mut mixer);
        assert!(!scene.is_valid());

        let mut scene = test_scene(800, 600);
        scene.process_event(&GameEvent::KeyDown(KeyCode::Escape), &mut mixer);
        assert!(!scene.is_valid());
    }

    //--- Rendering --------------------------------------------------------

    #[test]
    fn exploding_circle_is_not_drawn() {
        let mut mixer = Mixer::muted();
        let mut scene = test_scene(800, 600);
        let first_color = scene.circles()[0].color();

        scene.process_event(&press(112, 112), &mut mixer);
        // Let the explosion expire so nothing covers the spot.
        for _ in 0..3 * TICKS_PER_FRAME {
            scene.update();
        }

        let mut surface = Surface::new(800, 600);
        scene.draw(&mut surface);
        assert_eq!(
            surface.pixel(112, 112),
            color::BLACK.to_rgba(),
            "Spot is empty after the explosion; the circle (was {:?}) never comes back",
            first_color
        );
    }

    #[test]
    fn idle_circles_are_drawn() {
        let scene = test_scene(800, 600);
        let mut surface = Surface::new(800, 600);
        scene.draw(&mut surface);
        for circle in scene.circles() {
            let (cx, cy) = circle.center();
            assert_eq!(
                surface.pixel(cx as u32, cy as u32),
                circle.color().to_rgba(),
                "Center of circle {} has its color",
                circle.name()
            );
        }
    }
}
