//=========================================================================
// Input System
//
// Engine-side representation of user input.
//
// The platform layer converts Winit events into `RawInputEvent`s and
// batches them per frame. The `Events` snapshot digests each batch at the
// frame boundary and exposes the derived state (keys held, per-frame
// presses and releases, mouse position and delta, quit requests) that
// views query during `render`.
//
// Responsibilities:
// - Define stable, platform-independent event and key types
// - Maintain the per-frame input snapshot consumed by views
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;
mod events;

//=== Public API ==========================================================

pub use event::{KeyCode, MouseButton, RawInputEvent};
pub use events::Events;
