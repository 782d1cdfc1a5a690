//=========================================================================
// View Runner
//=========================================================================
//
// Drives the active view and applies its transitions.
//
// Unlike a keyed scene registry, the runner owns exactly one view at a
// time. A transition destroys the outgoing view after its exit hook, so
// no view state survives a change except what the new view was
// constructed with.
//
//=========================================================================

//=== External Crates =====================================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::{View, ViewAction};
use crate::core::context::Context;

//=== TickControl =========================================================

/// Control flow signal for the frame loop.
///
/// Each tick either continues into the next frame or terminates the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== ViewRunner ==========================================================

/// Owns the active view and runs its frame lifecycle.
///
/// Construction calls `on_enter` on the initial view; every tick renders
/// the view and applies the [`ViewAction`] it returns.
pub struct ViewRunner {
    current: Box<dyn View>,
}

impl ViewRunner {
    //--- Construction -----------------------------------------------------

    /// Creates a runner around the initial view and enters it.
    pub fn new(mut initial: Box<dyn View>, ctx: &mut Context) -> Self {
        debug!(target: "view", "Entering initial view");
        initial.on_enter(ctx);
        Self { current: initial }
    }

    //--- Frame Loop -------------------------------------------------------

    /// Runs one frame of the active view.
    ///
    /// Renders the view with the measured `elapsed` seconds, then applies
    /// the returned action:
    ///
    /// - `Continue`: nothing changes.
    /// - `ChangeView`: exit hook on the old view, drop it, enter hook on
    ///   the new one. The next tick renders the new view.
    /// - `Quit`: exit hook on the current view, loop terminates.
    pub fn tick(&mut self, ctx: &mut Context, elapsed: f64) -> TickControl {
        match self.current.render(ctx, elapsed) {
            ViewAction::Continue => TickControl::Continue,

            ViewAction::ChangeView(next) => {
                debug!(target: "view", "View transition requested");
                self.current.on_exit(ctx);

                // Dropping the old view here enforces exclusive ownership:
                // nothing can hold on to a view that is no longer active.
                self.current = next;
                self.current.on_enter(ctx);

                TickControl::Continue
            }

            ViewAction::Quit => {
                info!(target: "view", "Active view requested shutdown");
                self.current.on_exit(ctx);
                TickControl::Exit
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
