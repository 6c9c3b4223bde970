//=========================================================================
// Color Utility
//=========================================================================
//
// Named RGBA colors and bounded-palette random selection.
//
// The palette is deliberately small and high-contrast; circle colors are
// always drawn from it so screenshots stay comparable between runs.
//
//=========================================================================

//=== External Crates =====================================================

use rand::Rng;

//=== Color ===============================================================

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Creates a fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Converts to the pixel format used by [`crate::gfx::Surface`].
    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, self.a])
    }
}

//=== Named Colors ========================================================

pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const WHITE: Color = Color::rgb(255, 255, 255);

/// Base palette for circle coloring. Update here only.
pub const PALETTE: [Color; 8] = [
    Color::rgb(230, 51, 64),   // red
    Color::rgb(51, 140, 230),  // blue
    Color::rgb(242, 191, 38),  // yellow
    Color::rgb(51, 204, 115),  // green
    Color::rgb(166, 115, 242), // purple
    Color::rgb(242, 128, 38),  // orange
    Color::rgb(38, 204, 204),  // teal
    Color::rgb(230, 102, 178), // pink
];

//=== Random Selection ====================================================

/// Picks a uniformly random color from the bounded palette.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> Color {
    PALETTE[rng.gen_range(0..PALETTE.len())]
}

//=========================================================================
// Unit Tests
//=========================================================================
