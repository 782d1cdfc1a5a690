//=========================================================================
// Integration Tests — Sprite Pipeline
//=========================================================================
//
// Exercises the full asset path an application takes: encode a PNG to
// disk, load it through the context's image cache, slice sprites out of
// it, and draw them onto the surface.
//
//=========================================================================

use vantage_engine::prelude::*;

//--- Helpers --------------------------------------------------------------

// Writes a 4x2 PNG: left 2x2 block green, right 2x2 block yellow.
fn write_sheet(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let mut pixels = Vec::with_capacity(4 * 2 * 4);
    for _y in 0..2 {
        pixels.extend_from_slice(&[0, 255, 0, 255]);
        pixels.extend_from_slice(&[0, 255, 0, 255]);
        pixels.extend_from_slice(&[255, 255, 0, 255]);
        pixels.extend_from_slice(&[255, 255, 0, 255]);
    }

    let path = dir.path().join("sheet.png");
    image::save_buffer(&path, &pixels, 4, 2, image::ColorType::Rgba8).unwrap();
    path
}

//--- Tests ----------------------------------------------------------------

#[test]
fn load_slice_and_draw_a_sprite_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sheet(&dir);

    let mut ctx = Context::new(8, 8);
    let sheet = Sprite::new(ctx.images.load(&path).unwrap());
    assert_eq!(sheet.size(), (4.0, 2.0));

    // Slice the two animation frames out of the sheet.
    let green = sheet.region(Rectangle::new(0.0, 0.0, 2.0, 2.0)).unwrap();
    let yellow = sheet.region(Rectangle::new(2.0, 0.0, 2.0, 2.0)).unwrap();

    green.draw(&mut ctx.surface, Rectangle::new(0.0, 0.0, 2.0, 2.0));
    yellow.draw(&mut ctx.surface, Rectangle::new(4.0, 4.0, 2.0, 2.0));

    assert_eq!(ctx.surface.pixel(0, 0), Some(Color::rgb(0, 255, 0)));
    assert_eq!(ctx.surface.pixel(1, 1), Some(Color::rgb(0, 255, 0)));
    assert_eq!(ctx.surface.pixel(4, 4), Some(Color::rgb(255, 255, 0)));
    assert_eq!(ctx.surface.pixel(5, 5), Some(Color::rgb(255, 255, 0)));

    // Untouched pixels keep the surface's base color.
    assert_eq!(ctx.surface.pixel(7, 0), Some(Color::rgb(0, 0, 0)));
}

#[test]
fn region_outside_sheet_fails_without_touching_the_surface() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sheet(&dir);

    let mut ctx = Context::new(4, 4);
    let sheet = Sprite::new(ctx.images.load(&path).unwrap());

    // The sheet is 4x2; a 3x3 slice cannot fit anywhere.
    assert!(sheet.region(Rectangle::new(0.0, 0.0, 3.0, 3.0)).is_none());
    assert!(sheet.region(Rectangle::new(3.0, 0.0, 2.0, 2.0)).is_none());

    assert_eq!(ctx.surface.pixel(0, 0), Some(Color::rgb(0, 0, 0)));
}

#[test]
fn cache_shares_backing_pixels_between_sprites() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_sheet(&dir);

    let mut ctx = Context::new(4, 4);
    let first = Sprite::new(ctx.images.load(&path).unwrap());
    let second = Sprite::new(ctx.images.load(&path).unwrap());

    assert_eq!(ctx.images.len(), 1, "same path must hit the cache");
    assert_eq!(first.size(), second.size());
}
