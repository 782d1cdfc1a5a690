//=========================================================================
// View System
//=========================================================================
//
// Manages the active view and transitions between views.
//
// Architecture:
//   ViewRunner
//     └─ current: Box<dyn View>   (exclusively owned)
//
// Flow:
//   tick() → View::render() → ViewAction → apply (keep / replace / exit)
//
// A view is a replaceable unit of application state driving one phase of
// the game (menu, gameplay, pause). Exactly one view is active at a time;
// when it hands over to another view the old one is dropped immediately
// after its exit hook runs.
//
//=========================================================================

//=== Submodules ==========================================================

mod runner;

//=== Public API ==========================================================

pub use runner::{TickControl, ViewRunner};

//=== Internal Dependencies ===============================================

use crate::core::context::Context;

//=== ViewAction ==========================================================

/// Outcome of one frame of a view.
///
/// Returned from [`View::render`] and applied by the [`ViewRunner`] at
/// the frame boundary.
pub enum ViewAction {
    /// Keep the current view for the next frame.
    Continue,

    /// Hand control to another view.
    ///
    /// The current view's `on_exit` runs, then it is dropped; the new
    /// view's `on_enter` runs before its first frame.
    ChangeView(Box<dyn View>),

    /// Shut the engine down after this frame.
    Quit,
}

//=== View Trait ==========================================================

/// A polymorphic unit of game state, rendered and updated once per frame.
///
/// The main loop owns the active view exclusively and destroys it on
/// transition away, so views are free to hold their phase's entire state
/// without sharing concerns.
///
/// # Minimal Implementation
///
/// Only `render()` is required. Lifecycle hooks have default empty
/// implementations:
///
/// ```
/// use vantage_engine::prelude::*;
///
/// struct Gameplay;
///
/// impl View for Gameplay {
///     fn render(&mut self, ctx: &mut Context, _elapsed: f64) -> ViewAction {
///         if ctx.events.quit_requested() {
///             return ViewAction::Quit;
///         }
///         ctx.surface.clear(Color::rgb(0, 0, 0));
///         ViewAction::Continue
///     }
/// }
/// ```
pub trait View {
    /// Called once when the view becomes active.
    ///
    /// Default implementation does nothing. Override to acquire assets
    /// or reset per-activation state.
    fn on_enter(&mut self, _ctx: &mut Context) {}

    /// Called once when the view stops being active, just before it is
    /// dropped.
    ///
    /// Default implementation does nothing. Override to release
    /// resources that outlive the view (the view's own fields are
    /// dropped anyway).
    fn on_exit(&mut self, _ctx: &mut Context) {}

    /// Updates and renders one frame.
    ///
    /// `elapsed` is the measured time since the previous frame, in
    /// seconds. The view reads input from `ctx.events`, draws into
    /// `ctx.surface`, and reports what should happen next.
    fn render(&mut self, ctx: &mut Context, elapsed: f64) -> ViewAction;
}
