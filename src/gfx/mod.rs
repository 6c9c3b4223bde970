//=========================================================================
// Graphics Primitives
//=========================================================================
//
// Minimal 2D drawing support: colors, rectangles, and a CPU surface.
//
// Components:
// - `color`: named colors + bounded-palette random selection
// - `rect`: integer rectangles for bounding boxes and hit tests
// - `surface`: the RGBA buffer scenes draw into
//
//=========================================================================

//=== Module Declarations =================================================

pub mod color;
mod rect;
mod surface;

//=== Public API ==========================================================

pub use color::Color;
pub use rect::Rect;
pub use surface::Surface;
