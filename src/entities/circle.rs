//=========================================================================
// Circle Entity
//=========================================================================
//
// Geometric value-with-identity: immutable center, radius, color, and
// debug label, plus a tiny per-circle state machine.
//
// State machine:
//   Idle ──ignite(handle)──► Exploding(handle)
//
// `Exploding` is terminal. The handle points at the explosion sprite in
// the scene's render group; once the sprite expires the circle simply
// stays exploded and is never drawn again.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::entities::explosion::SpriteId;
use crate::gfx::{Color, Rect, Surface};

//=== CircleState =========================================================

/// Lifecycle of a circle. Replaces a bare `is_exploding` flag so the
/// link to the explosion sprite is explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleState {
    Idle,
    Exploding(SpriteId),
}

//=== Circle ==============================================================

/// A colored disc on the grid. Equality is by identity (position in the
/// scene's vector); `name` is a debug label, not a key.
#[derive(Debug)]
pub struct Circle {
    center_x: i32,
    center_y: i32,
    radius: u32,
    color: Color,
    name: String,
    state: CircleState,
}

impl Circle {
    pub fn new(center_x: i32, center_y: i32, radius: u32, color: Color, name: String) -> Self {
        Self {
            center_x,
            center_y,
            radius,
            color,
            name,
            state: CircleState::Idle,
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn center(&self) -> (i32, i32) {
        (self.center_x, self.center_y)
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> CircleState {
        self.state
    }

    pub fn is_exploding(&self) -> bool {
        matches!(self.state, CircleState::Exploding(_))
    }

    /// Bounding rect: the axis-aligned square of side 2·radius centered
    /// on the circle. This is also the hit-test region — clicks in the
    /// square's corners count as hits even though they fall outside the
    /// disc. Known approximation, relied upon by calibration tests; do
    /// not tighten to a circular distance test.
    pub fn rect(&self) -> Rect {
        let side = 2 * self.radius;
        Rect::new(
            self.center_x - self.radius as i32,
            self.center_y - self.radius as i32,
            side,
            side,
        )
    }

    //--- State Transitions ------------------------------------------------

    /// Moves the circle to `Exploding`, recording the sprite handle.
    ///
    /// Only valid from `Idle`; a second ignition is ignored so exactly
    /// one explosion ever exists per circle.
    pub fn ignite(&mut self, sprite: SpriteId) {
        if self.state == CircleState::Idle {
            self.state = CircleState::Exploding(sprite);
        }
    }

    //--- Rendering --------------------------------------------------------

    /// Draws the filled disc. Callers skip circles that are exploding;
    /// their pixels belong to the explosion sprite from then on.
    pub fn draw(&self, surface: &mut Surface) {
        surface.draw_disc(self.center_x, self.center_y, self.radius, self.color);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
