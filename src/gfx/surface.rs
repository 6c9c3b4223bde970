//=========================================================================
// Drawing Surface
//=========================================================================
//
// CPU-side RGBA pixel buffer scenes draw into each frame.
//
// This is the engine's only drawing target: scenes clear it, draw
// filled discs onto it, and blit sprite frames over it. There is no GPU
// presentation path; the surface is handed to scenes by the director
// and can be inspected pixel-by-pixel in tests.
//
//=========================================================================

//=== External Crates =====================================================

use image::{Rgba, RgbaImage};

//=== Internal Dependencies ===============================================

use super::color::Color;

//=== Surface =============================================================

/// A window-sized RGBA buffer with the primitive operations scenes need.
pub struct Surface {
    pixels: RgbaImage,
}

impl Surface {
    //--- Construction -----------------------------------------------------

    /// Creates a surface of the given size, cleared to transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    //--- Drawing Primitives -----------------------------------------------

    /// Fills the whole surface with a single color.
    pub fn fill(&mut self, color: Color) {
        let rgba = color.to_rgba();
        for pixel in self.pixels.pixels_mut() {
            *pixel = rgba;
        }
    }

    /// Draws a filled disc centered at `(cx, cy)`.
    ///
    /// Pixels outside the surface are clipped. The disc itself is exact
    /// (squared-distance test); only the *hit test* elsewhere uses the
    /// bounding-square approximation.
    pub fn draw_disc(&mut self, cx: i32, cy: i32, radius: u32, color: Color) {
        let rgba = color.to_rgba();
        let r = radius as i64;
        let r_sq = r * r;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy > r_sq {
                    continue;
                }
                let x = cx as i64 + dx;
                let y = cy as i64 + dy;
                if x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height() {
                    self.pixels.put_pixel(x as u32, y as u32, rgba);
                }
            }
        }
    }

    /// Blits an image with its top-left corner at `(left, top)`.
    ///
    /// Source pixels with zero alpha are skipped so sprite frames keep
    /// their transparent background. Off-surface pixels are clipped.
    pub fn blit(&mut self, sprite: &RgbaImage, left: i32, top: i32) {
        for (sx, sy, pixel) in sprite.enumerate_pixels() {
            if pixel[3] == 0 {
                continue;
            }
            let x = left + sx as i32;
            let y = top + sy as i32;
            if x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height() {
                self.pixels.put_pixel(x as u32, y as u32, *pixel);
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Reads a single pixel. Panics if out of bounds (test helper).
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.pixels.get_pixel(x, y)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
