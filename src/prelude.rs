//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use vantage_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine core
pub use crate::engine::{Engine, EngineBuilder};

// Frame context
pub use crate::core::context::Context;

// Input system
pub use crate::core::input::{Events, KeyCode, MouseButton};

// View system
pub use crate::core::view::{View, ViewAction};

// Graphics primitives
pub use crate::core::gfx::{Color, Image, ImageCache, PixelRect, Rectangle, Sprite, Surface};
