//=========================================================================
// Surface
//=========================================================================
//
// CPU framebuffer the active view draws into each frame.
//
// Pixels are RGBA8, row-major, top-left origin. Draw operations clip
// against the surface bounds, so callers never need to pre-clamp their
// rectangles. How (or whether) the buffer reaches the screen is left to
// the rendering backend embedding the engine.
//
//=========================================================================

//=== External Crates =====================================================

use log::warn;

//=== Internal Dependencies ===============================================

use super::image::Image;
use super::rect::Rectangle;

//=== Color ===============================================================

/// RGBA8 color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Creates an opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 255 }
    }

    /// Creates a color with an explicit alpha component.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }
}

//=== Surface =============================================================

/// Owned RGBA8 pixel buffer with clipped draw operations.
///
/// Sized to the window by the platform layer and resized on window
/// resize. All coordinates are surface-space pixels, top-left origin.
pub struct Surface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Surface {
    //--- Construction -----------------------------------------------------

    /// Creates a surface of the given size, filled with opaque black.
    pub fn new(width: u32, height: u32) -> Surface {
        let len = (width as usize) * (height as usize) * 4;
        let mut pixels = vec![0u8; len];
        for px in pixels.chunks_exact_mut(4) {
            px[3] = 255;
        }
        Surface { width, height, pixels }
    }

    //--- Accessors --------------------------------------------------------

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 pixel data, row-major from the top-left corner.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns the RGBA color at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        Some(Color::rgba(
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ))
    }

    //--- Lifecycle --------------------------------------------------------

    /// Resizes the buffer, discarding previous contents.
    ///
    /// Called by the platform layer when the window size changes.
    pub(crate) fn resize(&mut self, width: u32, height: u32) {
        *self = Surface::new(width, height);
    }

    //--- Draw Operations --------------------------------------------------

    /// Fills the entire surface with a single color.
    pub fn clear(&mut self, color: Color) {
        for px in self.pixels.chunks_exact_mut(4) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
            px[3] = color.a;
        }
    }

    /// Fills a rectangle, clipped to the surface bounds.
    ///
    /// Rectangles that convert to no valid draw area (negative extents,
    /// non-finite values) are logged and skipped rather than panicking
    /// mid-frame.
    pub fn fill_rect(&mut self, rect: Rectangle, color: Color) {
        let Some(px_rect) = rect.to_pixels() else {
            warn!(target: "gfx", "fill_rect skipped degenerate rectangle {:?}", rect);
            return;
        };

        let Some((x0, y0, x1, y1)) =
            clip_rect(px_rect.x, px_rect.y, px_rect.w, px_rect.h, self.width, self.height)
        else {
            return;
        };

        for y in y0..y1 {
            for x in x0..x1 {
                let i = (y * (self.width as usize) + x) * 4;
                self.pixels[i] = color.r;
                self.pixels[i + 1] = color.g;
                self.pixels[i + 2] = color.b;
                self.pixels[i + 3] = color.a;
            }
        }
    }

    /// Copies a region of an image into a destination rectangle.
    ///
    /// Scales with nearest-neighbour sampling when source and destination
    /// sizes differ, and clips the destination against the surface.
    ///
    /// Rounding a fractional source rectangle to pixels can push it past
    /// the image edge even when the `f64` region is contained, so the
    /// rounded source is clamped to the image bounds before any sampling.
    pub(crate) fn blit(&mut self, image: &Image, src: Rectangle, dest: Rectangle) {
        let (Some(src_px), Some(dest_px)) = (src.to_pixels(), dest.to_pixels()) else {
            warn!(target: "gfx", "blit skipped degenerate rectangle (src {:?}, dest {:?})", src, dest);
            return;
        };

        if dest_px.w == 0 || dest_px.h == 0 {
            return;
        }

        let Some((x0, y0, x1, y1)) =
            clip_rect(dest_px.x, dest_px.y, dest_px.w, dest_px.h, self.width, self.height)
        else {
            return;
        };

        let Some((sx0, sy0, sx1, sy1)) =
            clip_rect(src_px.x, src_px.y, src_px.w, src_px.h, image.width(), image.height())
        else {
            return;
        };

        let (src_w, src_h) = ((sx1 - sx0) as u64, (sy1 - sy0) as u64);
        let img_w = image.width() as usize;
        let img_pixels = image.pixels();

        for y in y0..y1 {
            // Nearest-neighbour: map each destination pixel back into the
            // clamped source region.
            let v = (y as i64 - dest_px.y as i64) as u64 * src_h / dest_px.h as u64;
            let sy = sy0 + v as usize;

            for x in x0..x1 {
                let u = (x as i64 - dest_px.x as i64) as u64 * src_w / dest_px.w as u64;
                let sx = sx0 + u as usize;

                let si = (sy * img_w + sx) * 4;
                let di = (y * (self.width as usize) + x) * 4;
                self.pixels[di..di + 4].copy_from_slice(&img_pixels[si..si + 4]);
            }
        }
    }
}

//=== Internal Helpers ====================================================

// Intersects a draw rectangle with the bounds (0,0)-(bound_w,bound_h).
// Returns the clipped range as (x0, y0, x1, y1) in usize, or None when
// nothing remains inside the bounds.
fn clip_rect(
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    bound_w: u32,
    bound_h: u32,
) -> Option<(usize, usize, usize, usize)> {
    let x0 = x.max(0) as i64;
    let y0 = y.max(0) as i64;
    let x1 = (x as i64 + w as i64).min(bound_w as i64);
    let y1 = (y as i64 + h as i64).min(bound_h as i64);

    if x0 >= x1 || y0 >= y1 {
        return None;
    }

    Some((x0 as usize, y0 as usize, x1 as usize, y1 as usize))
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = Color::rgb(255, 0, 0);
    const BLUE: Color = Color::rgb(0, 0, 255);

    #[test]
    fn new_surface_is_opaque_black() {
        let surface = Surface::new(4, 4);
        assert_eq!(surface.pixel(0, 0), Some(Color::rgb(0, 0, 0)));
        assert_eq!(surface.pixel(3, 3), Some(Color::rgb(0, 0, 0)));
    }

    #[test]
    fn pixel_out_of_bounds_is_none() {
        let surface = Surface::new(4, 4);
        assert_eq!(surface.pixel(4, 0), None);
        assert_eq!(surface.pixel(0, 4), None);
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut surface = Surface::new(3, 2);
        surface.clear(RED);

        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(surface.pixel(x, y), Some(RED));
            }
        }
    }

    #[test]
    fn fill_rect_covers_exact_area() {
        let mut surface = Surface::new(10, 10);
        surface.fill_rect(Rectangle::new(2.0, 3.0, 4.0, 2.0), BLUE);

        assert_eq!(surface.pixel(2, 3), Some(BLUE));
        assert_eq!(surface.pixel(5, 4), Some(BLUE));
        assert_eq!(surface.pixel(1, 3), Some(Color::rgb(0, 0, 0)));
        assert_eq!(surface.pixel(6, 3), Some(Color::rgb(0, 0, 0)));
        assert_eq!(surface.pixel(2, 5), Some(Color::rgb(0, 0, 0)));
    }

    #[test]
    fn fill_rect_clips_against_bounds() {
        let mut surface = Surface::new(4, 4);
        surface.fill_rect(Rectangle::new(-2.0, -2.0, 4.0, 4.0), RED);

        assert_eq!(surface.pixel(0, 0), Some(RED));
        assert_eq!(surface.pixel(1, 1), Some(RED));
        assert_eq!(surface.pixel(2, 2), Some(Color::rgb(0, 0, 0)));
    }

    #[test]
    fn fill_rect_fully_outside_is_noop() {
        let mut surface = Surface::new(4, 4);
        surface.fill_rect(Rectangle::new(10.0, 10.0, 5.0, 5.0), RED);

        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(surface.pixel(x, y), Some(Color::rgb(0, 0, 0)));
            }
        }
    }

    #[test]
    fn fill_rect_ignores_degenerate_rectangle() {
        let mut surface = Surface::new(4, 4);
        surface.fill_rect(Rectangle::new(0.0, 0.0, -5.0, 5.0), RED);
        assert_eq!(surface.pixel(0, 0), Some(Color::rgb(0, 0, 0)));
    }

    #[test]
    fn resize_discards_contents() {
        let mut surface = Surface::new(2, 2);
        surface.clear(RED);
        surface.resize(3, 5);

        assert_eq!(surface.width(), 3);
        assert_eq!(surface.height(), 5);
        assert_eq!(surface.pixel(0, 0), Some(Color::rgb(0, 0, 0)));
    }

    //--- Blitting ---------------------------------------------------------

    // 2x2 test image: red, blue / blue, red
    fn checker() -> Image {
        let px = [
            255, 0, 0, 255, /**/ 0, 0, 255, 255, //
            0, 0, 255, 255, /**/ 255, 0, 0, 255, //
        ];
        Image::from_pixels(2, 2, px.to_vec()).unwrap()
    }

    #[test]
    fn blit_copies_unscaled() {
        let mut surface = Surface::new(4, 4);
        let image = checker();

        surface.blit(
            &image,
            Rectangle::with_size(2.0, 2.0),
            Rectangle::new(1.0, 1.0, 2.0, 2.0),
        );

        assert_eq!(surface.pixel(1, 1), Some(RED));
        assert_eq!(surface.pixel(2, 1), Some(BLUE));
        assert_eq!(surface.pixel(1, 2), Some(BLUE));
        assert_eq!(surface.pixel(2, 2), Some(RED));
        assert_eq!(surface.pixel(0, 0), Some(Color::rgb(0, 0, 0)));
    }

    #[test]
    fn blit_scales_with_nearest_neighbour() {
        let mut surface = Surface::new(4, 4);
        let image = checker();

        surface.blit(
            &image,
            Rectangle::with_size(2.0, 2.0),
            Rectangle::new(0.0, 0.0, 4.0, 4.0),
        );

        // Each source pixel covers a 2x2 block of the destination.
        assert_eq!(surface.pixel(0, 0), Some(RED));
        assert_eq!(surface.pixel(1, 1), Some(RED));
        assert_eq!(surface.pixel(2, 0), Some(BLUE));
        assert_eq!(surface.pixel(3, 3), Some(RED));
        assert_eq!(surface.pixel(0, 3), Some(BLUE));
    }

    #[test]
    fn blit_clamps_fractional_source_at_image_edge() {
        // 4x4 image, rightmost column green, everything else red. The
        // fractional source rounds to x=3, w=2, which reaches past the
        // image edge and must be clamped rather than sampled.
        let mut px = vec![0u8; 4 * 4 * 4];
        for y in 0..4 {
            for x in 0..4 {
                let i = (y * 4 + x) * 4;
                if x == 3 {
                    px[i + 1] = 255;
                } else {
                    px[i] = 255;
                }
                px[i + 3] = 255;
            }
        }
        let image = Image::from_pixels(4, 4, px).unwrap();

        let mut surface = Surface::new(4, 4);
        surface.blit(
            &image,
            Rectangle::new(2.5, 0.0, 1.5, 4.0),
            Rectangle::new(0.0, 0.0, 4.0, 4.0),
        );

        let green = Color::rgb(0, 255, 0);
        assert_eq!(surface.pixel(0, 0), Some(green));
        assert_eq!(surface.pixel(3, 3), Some(green));
    }

    #[test]
    fn blit_clips_destination() {
        let mut surface = Surface::new(2, 2);
        let image = checker();

        surface.blit(
            &image,
            Rectangle::with_size(2.0, 2.0),
            Rectangle::new(1.0, 1.0, 2.0, 2.0),
        );

        assert_eq!(surface.pixel(1, 1), Some(RED));
        assert_eq!(surface.pixel(0, 0), Some(Color::rgb(0, 0, 0)));
    }
}
