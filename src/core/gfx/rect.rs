//=========================================================================
// Rectangle
//=========================================================================
//
// Floating-point rectangle used for sprite regions, draw destinations,
// and containment tests; converts to the integer `PixelRect` the surface
// blitter consumes.
//
//=========================================================================

//=== PixelRect ===========================================================

/// Integer draw rectangle in surface coordinates.
///
/// Origin may be negative (partially off-surface draws are clipped by
/// the blitter); extents are always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

//=== Rectangle ===========================================================

/// Axis-aligned rectangle with `f64` position and size.
///
/// `(x, y)` is the top-left corner; `w`/`h` extend right and down
/// (screen-space convention, top-left origin).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rectangle {
    //--- Construction -----------------------------------------------------

    /// Creates a rectangle from its top-left corner and size.
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Rectangle {
        Rectangle { x, y, w, h }
    }

    /// Creates a rectangle at the origin with the given size.
    pub fn with_size(w: f64, h: f64) -> Rectangle {
        Rectangle { x: 0.0, y: 0.0, w, h }
    }

    //--- Geometry ---------------------------------------------------------

    /// Returns `true` if `other` lies entirely within `self` (inclusive
    /// on all edges).
    ///
    /// A rectangle with negative extents describes no area and is never
    /// contained. Non-finite components fail the comparisons below on
    /// their own.
    pub fn contains(&self, other: Rectangle) -> bool {
        if other.w < 0.0 || other.h < 0.0 {
            return false;
        }

        let xmin = other.x;
        let xmax = xmin + other.w;
        let ymin = other.y;
        let ymax = ymin + other.h;

        xmin >= self.x
            && xmin <= self.x + self.w
            && xmax >= self.x
            && xmax <= self.x + self.w
            && ymin >= self.y
            && ymin <= self.y + self.h
            && ymax >= self.y
            && ymax <= self.y + self.h
    }

    /// Returns `true` if the point lies within the rectangle (inclusive).
    pub fn contains_point(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.x + self.w && py >= self.y && py <= self.y + self.h
    }

    /// Returns a copy shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Rectangle {
        Rectangle {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    //--- Conversion -------------------------------------------------------

    /// Converts to the integer draw rectangle used by the surface.
    ///
    /// Position is rounded to the nearest pixel; size is rounded to the
    /// nearest whole extent. Returns `None` when any component is
    /// non-finite or either extent is negative, since no sensible draw
    /// rectangle exists in those cases.
    pub fn to_pixels(&self) -> Option<PixelRect> {
        let finite = self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite();
        if !finite || self.w < 0.0 || self.h < 0.0 {
            return None;
        }

        Some(PixelRect {
            x: self.x.round() as i32,
            y: self.y.round() as i32,
            w: self.w.round() as u32,
            h: self.h.round() as u32,
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
