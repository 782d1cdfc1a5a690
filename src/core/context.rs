//=========================================================================
// Frame Context
//=========================================================================
//
// Bundles everything the active view touches during a frame.
//
// Architecture:
//   Context
//     ├─ events:  Events      (per-frame input snapshot)
//     ├─ surface: Surface     (CPU framebuffer, sized to the window)
//     └─ images:  ImageCache  (image-loading subsystem)
//
// The context is created by the platform layer once the window exists
// and lives until the engine shuts down. Subsystems it owns (like the
// image cache) are initialized with it and torn down with it.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::gfx::{ImageCache, Surface};
use crate::core::input::Events;

//=== Context =============================================================

/// Shared frame state handed to the active view as `&mut Context`.
///
/// Views read input from `events`, draw into `surface`, and load assets
/// through `images`. Fields are public by design; the context is a
/// bundle, not an abstraction boundary.
pub struct Context {
    /// Input snapshot for the current frame, overwritten every poll cycle.
    pub events: Events,

    /// Framebuffer the view draws into. Resized with the window.
    pub surface: Surface,

    /// Image-loading subsystem; lifetime tied to the context itself.
    pub images: ImageCache,
}

impl Context {
    /// Creates a context backed by a surface of the given size.
    ///
    /// The engine constructs one automatically once the window exists;
    /// building one directly is mostly useful for headless tests.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            events: Events::new(),
            surface: Surface::new(width, height),
            images: ImageCache::new(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
