//=========================================================================
// Sprite
//=========================================================================
//
// A named sub-region of a shared image, drawable without duplicating
// pixel data.
//
// Architecture:
//   Arc<Image> ◄─── Sprite { image, src }
//                      │
//                      ├─ region() → Sprite (smaller src, same image)
//                      └─ draw()   → Surface::blit(image, src, dest)
//
// Invariant: `src` always lies within the backing image. `new()`
// establishes it and `region()` preserves it, so drawing never has to
// bounds-check the source side.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::sync::Arc;

//=== Internal Dependencies ===============================================

use super::image::Image;
use super::rect::Rectangle;
use super::surface::Surface;

//=== Sprite ==============================================================

/// Shared immutable image region.
///
/// Cloning a sprite clones the `Arc` and the region rectangle, never the
/// pixels, so sprites are cheap to copy around and store in views.
#[derive(Clone)]
pub struct Sprite {
    image: Arc<Image>,
    src: Rectangle,
}

impl Sprite {
    //--- Construction -----------------------------------------------------

    /// Creates a sprite covering the entire image.
    pub fn new(image: Arc<Image>) -> Sprite {
        let src = Rectangle::with_size(image.width() as f64, image.height() as f64);
        Sprite { image, src }
    }

    /// Derives a sprite for a sub-region of this one.
    ///
    /// `rect` is expressed relative to this sprite's own region: its
    /// origin is offset by the current region's origin before the
    /// containment check. Returns `None` when the requested rectangle
    /// does not fit inside the current region.
    ///
    /// # Examples
    ///
    /// Slicing a frame out of a horizontal sprite sheet:
    ///
    /// ```
    /// # use std::sync::Arc;
    /// # use vantage_engine::prelude::*;
    /// # let image = Arc::new(Image::from_pixels(64, 16, vec![0; 64 * 16 * 4]).unwrap());
    /// let sheet = Sprite::new(image);
    /// let frame = sheet.region(Rectangle::new(16.0, 0.0, 16.0, 16.0)).unwrap();
    /// assert_eq!(frame.size(), (16.0, 16.0));
    ///
    /// // Out of bounds: the sheet is only 64 pixels wide.
    /// assert!(sheet.region(Rectangle::new(56.0, 0.0, 16.0, 16.0)).is_none());
    /// ```
    pub fn region(&self, rect: Rectangle) -> Option<Sprite> {
        let absolute = rect.translated(self.src.x, self.src.y);

        if !self.src.contains(absolute) {
            return None;
        }

        Some(Sprite {
            image: Arc::clone(&self.image),
            src: absolute,
        })
    }

    //--- Accessors --------------------------------------------------------

    /// Size of the active region as `(w, h)`.
    pub fn size(&self) -> (f64, f64) {
        (self.src.w, self.src.h)
    }

    //--- Drawing ----------------------------------------------------------

    /// Draws the active region into `dest` on the surface.
    ///
    /// Scales to fit the destination rectangle and clips against the
    /// surface bounds.
    pub fn draw(&self, surface: &mut Surface, dest: Rectangle) {
        surface.blit(&self.image, self.src, dest);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gfx::Color;

    // 4x4 image: top half red, bottom half blue.
    fn halves() -> Arc<Image> {
        let mut pixels = Vec::with_capacity(4 * 4 * 4);
        for y in 0..4 {
            for _x in 0..4 {
                if y < 2 {
                    pixels.extend_from_slice(&[255, 0, 0, 255]);
                } else {
                    pixels.extend_from_slice(&[0, 0, 255, 255]);
                }
            }
        }
        Arc::new(Image::from_pixels(4, 4, pixels).unwrap())
    }

    //--- Construction -----------------------------------------------------

    #[test]
    fn new_covers_whole_image() {
        let sprite = Sprite::new(halves());
        assert_eq!(sprite.size(), (4.0, 4.0));
    }

    #[test]
    fn clone_shares_backing_image() {
        let image = halves();
        let sprite = Sprite::new(Arc::clone(&image));
        let copy = sprite.clone();
        drop(sprite);

        // image + copy
        assert_eq!(Arc::strong_count(&image), 2);
        assert_eq!(copy.size(), (4.0, 4.0));
    }

    //--- Region Derivation ------------------------------------------------

    #[test]
    fn region_within_bounds_succeeds() {
        let sprite = Sprite::new(halves());
        let top = sprite.region(Rectangle::new(0.0, 0.0, 4.0, 2.0)).unwrap();
        assert_eq!(top.size(), (4.0, 2.0));
    }

    #[test]
    fn region_out_of_bounds_fails() {
        let sprite = Sprite::new(halves());
        assert!(sprite.region(Rectangle::new(2.0, 2.0, 4.0, 4.0)).is_none());
        assert!(sprite.region(Rectangle::new(-1.0, 0.0, 2.0, 2.0)).is_none());
    }

    #[test]
    fn region_with_negative_extents_fails() {
        let sprite = Sprite::new(halves());
        assert!(sprite.region(Rectangle::new(2.0, 2.0, -1.0, -1.0)).is_none());
    }

    #[test]
    fn region_offsets_relative_to_parent() {
        let sprite = Sprite::new(halves());
        let bottom = sprite.region(Rectangle::new(0.0, 2.0, 4.0, 2.0)).unwrap();

        // Relative to `bottom`, (0,0) is the image's (0,2): still blue.
        let corner = bottom.region(Rectangle::new(0.0, 0.0, 2.0, 2.0)).unwrap();
        assert_eq!(corner.size(), (2.0, 2.0));

        // A further 2-row slice would poke out of `bottom`.
        assert!(bottom.region(Rectangle::new(0.0, 1.0, 4.0, 2.0)).is_none());
    }

    #[test]
    fn region_covering_parent_exactly_succeeds() {
        let sprite = Sprite::new(halves());
        let same = sprite.region(Rectangle::new(0.0, 0.0, 4.0, 4.0)).unwrap();
        assert_eq!(same.size(), (4.0, 4.0));
    }

    //--- Drawing ----------------------------------------------------------

    #[test]
    fn draw_blits_region_pixels() {
        let sprite = Sprite::new(halves());
        let bottom = sprite.region(Rectangle::new(0.0, 2.0, 4.0, 2.0)).unwrap();

        let mut surface = Surface::new(4, 2);
        bottom.draw(&mut surface, Rectangle::with_size(4.0, 2.0));

        assert_eq!(surface.pixel(0, 0), Some(Color::rgb(0, 0, 255)));
        assert_eq!(surface.pixel(3, 1), Some(Color::rgb(0, 0, 255)));
    }

    #[test]
    fn draw_handles_fractional_region_at_image_edge() {
        // 2.5 + 1.5 = 4.0 is contained, but the region rounds to x=3,
        // w=2, which overhangs the image by one column. Drawing must
        // stay within the backing pixels.
        let sprite = Sprite::new(halves());
        let edge = sprite.region(Rectangle::new(2.5, 0.0, 1.5, 4.0)).unwrap();

        let mut surface = Surface::new(4, 4);
        edge.draw(&mut surface, Rectangle::with_size(4.0, 4.0));

        assert_eq!(surface.pixel(0, 0), Some(Color::rgb(255, 0, 0)));
        assert_eq!(surface.pixel(0, 3), Some(Color::rgb(0, 0, 255)));
    }

    #[test]
    fn draw_scales_to_destination() {
        let sprite = Sprite::new(halves());
        let mut surface = Surface::new(8, 8);
        sprite.draw(&mut surface, Rectangle::with_size(8.0, 8.0));

        // Top half red, bottom half blue, now at double size.
        assert_eq!(surface.pixel(0, 0), Some(Color::rgb(255, 0, 0)));
        assert_eq!(surface.pixel(7, 3), Some(Color::rgb(255, 0, 0)));
        assert_eq!(surface.pixel(0, 4), Some(Color::rgb(0, 0, 255)));
        assert_eq!(surface.pixel(7, 7), Some(Color::rgb(0, 0, 255)));
    }
}
