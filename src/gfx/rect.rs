//=========================================================================
// Axis-Aligned Rectangle
//=========================================================================
//
// Integer rectangle used for circle bounding boxes and hit testing.
//
// Containment follows the half-open convention: left/top edges are
// inside, right/bottom edges are outside. This matches the behavior the
// circle hit test is calibrated against.
//
//=========================================================================

//=== Rect ================================================================

/// An axis-aligned rectangle with integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    pub const fn new(left: i32, top: i32, width: u32, height: u32) -> Self {
        Self { left, top, width, height }
    }

    /// One past the rightmost contained column.
    pub fn right(&self) -> i32 {
        self.left + self.width as i32
    }

    /// One past the bottommost contained row.
    pub fn bottom(&self) -> i32 {
        self.top + self.height as i32
    }

    /// Returns `true` if the point lies inside the rectangle.
    ///
    /// Left and top edges are inclusive, right and bottom exclusive.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right() && y >= self.top && y < self.bottom()
    }

    /// Returns `true` if the two rectangles share any point.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
