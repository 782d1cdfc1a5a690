//=========================================================================
// Graphics Primitives
//
// Platform-independent drawing building blocks.
//
// Architecture:
//   Rectangle ──to_pixels()──► PixelRect
//   ImageCache ──load()──► Arc<Image> ──Sprite::new()──► Sprite
//   Sprite ──draw()──► Surface (CPU framebuffer)
//
// Presenting the framebuffer to the OS window is a rendering backend
// concern and lives outside this crate; everything here stays pure CPU
// state and is fully testable without a window.
//
//=========================================================================

//=== Submodules ==========================================================

mod image;
mod rect;
mod sprite;
mod surface;

//=== Public API ==========================================================

pub use image::{AssetError, Image, ImageCache};
pub use rect::{PixelRect, Rectangle};
pub use sprite::Sprite;
pub use surface::{Color, Surface};
