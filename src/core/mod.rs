//=========================================================================
// Core Systems
//
// Engine-facing systems and types that make up the frame loop's working
// set: input state, graphics primitives, view management, and the shared
// context handed to the active view every frame.
//
// Responsibilities:
// - Define the data model views operate on (`Events`, `Surface`, `Sprite`)
// - Manage the active view and its transitions (`ViewRunner`)
// - Stay platform-agnostic: nothing in here touches Winit or the window
//
// Notes:
// Everything in this module runs on the main thread. The platform layer
// feeds it one batch of input per frame and calls back into the view
// runner; there is no cross-thread communication.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod context;
pub mod gfx;
pub mod input;
pub mod view;
