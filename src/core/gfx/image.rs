//=========================================================================
// Image Loading
//=========================================================================
//
// Decoded image data and the cache that owns it.
//
// Images are immutable once decoded and shared via `Arc`, so any number
// of sprites can reference the same backing pixels without copying them.
// The `ImageCache` is the engine's optional image-loading subsystem: it
// lives inside the `Context` and is torn down with it.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

//=== External Crates =====================================================

use log::debug;

//=== AssetError ==========================================================

/// Errors produced while loading or constructing images.
#[derive(Debug)]
pub enum AssetError {
    /// Decoding or reading the file failed (I/O errors included).
    Decode(PathBuf, image::ImageError),

    /// Raw pixel data does not match the declared dimensions.
    Dimensions {
        width: u32,
        height: u32,
        actual_len: usize,
    },
}

//--- Trait Implementations -----------------------------------------------

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(path, e) => write!(f, "Failed to decode {}: {}", path.display(), e),
            Self::Dimensions { width, height, actual_len } => write!(
                f,
                "Pixel buffer of {} bytes does not fit {}x{} RGBA image",
                actual_len, width, height
            ),
        }
    }
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(_, e) => Some(e),
            Self::Dimensions { .. } => None,
        }
    }
}

//=== Image ===============================================================

/// Immutable decoded image: RGBA8 pixels, row-major, top-left origin.
///
/// Shared between sprites via `Arc<Image>`; never mutated after
/// construction.
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Image {
    //--- Construction -----------------------------------------------------

    /// Builds an image from raw RGBA8 pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Dimensions`] when the buffer length is not
    /// exactly `width * height * 4`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u8>) -> Result<Image, AssetError> {
        let expected = (width as usize) * (height as usize) * 4;
        if pixels.len() != expected {
            return Err(AssetError::Dimensions {
                width,
                height,
                actual_len: pixels.len(),
            });
        }

        Ok(Image { width, height, pixels })
    }

    /// Decodes an image file (PNG, JPEG, or BMP) into RGBA8.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Image, AssetError> {
        let path = path.as_ref();
        let decoded = image::open(path)
            .map_err(|e| AssetError::Decode(path.to_path_buf(), e))?
            .into_rgba8();

        debug!(
            target: "gfx::assets",
            "Decoded {} ({}x{})",
            path.display(),
            decoded.width(),
            decoded.height()
        );

        Ok(Image {
            width: decoded.width(),
            height: decoded.height(),
            pixels: decoded.into_raw(),
        })
    }

    //--- Accessors --------------------------------------------------------

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

//=== ImageCache ==========================================================

/// Path-keyed cache of decoded images.
///
/// Owned by the [`Context`] so its lifetime matches the rendering
/// surface it feeds. Loading the same path twice returns the same
/// shared `Arc<Image>` without touching the filesystem again.
///
/// [`Context`]: crate::core::context::Context
pub struct ImageCache {
    images: HashMap<PathBuf, Arc<Image>>,
}

impl ImageCache {
    //--- Construction -----------------------------------------------------

    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            images: HashMap::new(),
        }
    }

    //--- Loading ----------------------------------------------------------

    /// Loads an image from disk, or returns the cached copy.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Decode`] when the file cannot be read or
    /// decoded. Failed loads are not cached; a later call retries.
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<Arc<Image>, AssetError> {
        let path = path.as_ref();

        if let Some(image) = self.images.get(path) {
            return Ok(Arc::clone(image));
        }

        let image = Arc::new(Image::load(path)?);
        self.images.insert(path.to_path_buf(), Arc::clone(&image));
        Ok(image)
    }

    /// Number of images currently cached.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns `true` when nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Drops every cached image.
    ///
    /// Sprites holding an `Arc<Image>` keep their backing data alive;
    /// only the cache's own references are released.
    pub fn clear(&mut self) {
        self.images.clear();
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pixels_accepts_matching_buffer() {
        let image = Image::from_pixels(2, 3, vec![0; 2 * 3 * 4]).unwrap();
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 3);
        assert_eq!(image.pixels().len(), 24);
    }

    #[test]
    fn from_pixels_rejects_short_buffer() {
        match Image::from_pixels(2, 2, vec![0; 5]) {
            Err(AssetError::Dimensions { actual_len, .. }) => assert_eq!(actual_len, 5),
            other => panic!("Expected Dimensions error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn load_missing_file_reports_path() {
        let err = Image::load("definitely/not/here.png").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("not/here.png"), "message was: {}", msg);
    }

    #[test]
    fn asset_error_implements_error_trait() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<AssetError>();
    }

    //--- Cache ------------------------------------------------------------

    #[test]
    fn cache_returns_shared_instance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solid.png");
        image::save_buffer(&path, &[10u8, 20, 30, 255], 1, 1, image::ColorType::Rgba8).unwrap();

        let mut cache = ImageCache::new();
        let first = cache.load(&path).unwrap();
        let second = cache.load(&path).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        assert_eq!(first.pixels(), &[10, 20, 30, 255]);
    }

    #[test]
    fn cache_does_not_retain_failed_loads() {
        let mut cache = ImageCache::new();
        assert!(cache.load("missing.png").is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_releases_cache_references_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("solid.png");
        image::save_buffer(&path, &[1u8, 2, 3, 255], 1, 1, image::ColorType::Rgba8).unwrap();

        let mut cache = ImageCache::new();
        let image = cache.load(&path).unwrap();
        cache.clear();

        assert!(cache.is_empty());
        // The sprite-side reference still works after the cache lets go.
        assert_eq!(image.width(), 1);
    }
}
