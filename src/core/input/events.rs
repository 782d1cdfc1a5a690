//=========================================================================
// Events Snapshot
//=========================================================================
//
// Per-frame input snapshot with persistent state and frame deltas.
//
// Architecture:
//   RawInputEvent batch → pump() → HashSet (keys/buttons held) → query
//
// Frame lifecycle: pump(batch, quit) at the frame boundary, then queries
// from the active view. Every pump overwrites the previous frame's deltas.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{KeyCode, MouseButton, RawInputEvent};

//=== Events ==============================================================

/// Frame-scoped input state queried by views during `render`.
///
/// Tracks persistent state (keys held, mouse position) and per-frame
/// deltas (keys pressed/released this frame). The platform pumps one
/// batch of events per frame; deltas never survive past the next pump.
pub struct Events {
    //--- Persistent State (survives frame boundary) ----------------------
    keys_down: HashSet<KeyCode>,
    mouse_buttons_down: HashSet<MouseButton>,
    mouse_position: (f32, f32),
    quit_requested: bool,

    //--- Frame Deltas (reset by every pump) ------------------------------
    keys_pressed_this_frame: HashSet<KeyCode>,
    keys_released_this_frame: HashSet<KeyCode>,
    mouse_buttons_pressed_this_frame: HashSet<MouseButton>,
    mouse_buttons_released_this_frame: HashSet<MouseButton>,

    //--- Continuous Input (accumulated/calculated) -----------------------
    mouse_delta: (f32, f32),
    last_mouse_position: (f32, f32),
}

impl Events {
    /// Creates a new snapshot with empty state.
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            mouse_buttons_down: HashSet::new(),
            mouse_position: (0.0, 0.0),
            quit_requested: false,
            keys_pressed_this_frame: HashSet::new(),
            keys_released_this_frame: HashSet::new(),
            mouse_buttons_pressed_this_frame: HashSet::new(),
            mouse_buttons_released_this_frame: HashSet::new(),
            mouse_delta: (0.0, 0.0),
            last_mouse_position: (0.0, 0.0),
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Digests one frame's worth of input.
    ///
    /// Clears the previous frame's deltas, applies the batch, and
    /// finalizes the mouse delta. `quit` records whether the platform saw
    /// a window close request since the last pump; once set it stays set,
    /// the active view decides how to react.
    ///
    /// The platform calls this at every frame boundary. Calling it
    /// directly is only useful when driving views headlessly (tests,
    /// input replays).
    pub fn pump(&mut self, batch: &[RawInputEvent], quit: bool) {
        self.clear_deltas();

        for event in batch {
            self.process_event(event);
        }

        self.quit_requested |= quit;

        self.mouse_delta = (
            self.mouse_position.0 - self.last_mouse_position.0,
            self.mouse_position.1 - self.last_mouse_position.1,
        );
    }

    //--- Internal Helpers -------------------------------------------------

    fn clear_deltas(&mut self) {
        self.keys_pressed_this_frame.clear();
        self.keys_released_this_frame.clear();
        self.mouse_buttons_pressed_this_frame.clear();
        self.mouse_buttons_released_this_frame.clear();
        self.last_mouse_position = self.mouse_position;
    }

    fn process_event(&mut self, event: &RawInputEvent) {
        match *event {
            RawInputEvent::KeyDown(key) => {
                // Only mark as pressed if it wasn't already down
                // (OS key repeat must not re-arm the delta).
                if self.keys_down.insert(key) {
                    self.keys_pressed_this_frame.insert(key);
                }
            }

            RawInputEvent::KeyUp(key) => {
                // Only mark as released if it was actually down
                if self.keys_down.remove(&key) {
                    self.keys_released_this_frame.insert(key);
                }
            }

            RawInputEvent::MouseButtonDown(button) => {
                if self.mouse_buttons_down.insert(button) {
                    self.mouse_buttons_pressed_this_frame.insert(button);
                }
            }

            RawInputEvent::MouseButtonUp(button) => {
                if self.mouse_buttons_down.remove(&button) {
                    self.mouse_buttons_released_this_frame.insert(button);
                }
            }

            RawInputEvent::MouseMoved { x, y } => {
                self.mouse_position = (x, y);
            }

            RawInputEvent::Unidentified => {
                // Ignore unrecognized events
            }
        }
    }

    //=====================================================================
    // Query API - Keyboard
    //=====================================================================

    /// Returns `true` if key transitioned UP → DOWN this frame.
    ///
    /// Use for discrete actions like jumping or switching views.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed_this_frame.contains(&key)
    }

    /// Returns `true` while key is held.
    ///
    /// Use for continuous actions like movement or charging.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` if key transitioned DOWN → UP this frame.
    ///
    /// Use for release-dependent actions like ending a charge attack.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released_this_frame.contains(&key)
    }

    //=====================================================================
    // Query API - Mouse
    //=====================================================================

    /// Like [`is_key_pressed`](Self::is_key_pressed) but for mouse buttons.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons_pressed_this_frame.contains(&button)
    }

    /// Like [`is_key_down`](Self::is_key_down) but for mouse buttons.
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons_down.contains(&button)
    }

    /// Like [`is_key_released`](Self::is_key_released) but for mouse buttons.
    pub fn is_button_released(&self, button: MouseButton) -> bool {
        self.mouse_buttons_released_this_frame.contains(&button)
    }

    /// Returns mouse position in screen coordinates (pixels, top-left origin).
    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }

    /// Returns mouse movement delta since the previous frame (0,0 if none).
    ///
    /// Useful for camera control, drag operations, etc.
    pub fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    //=====================================================================
    // Query API - Lifecycle
    //=====================================================================

    /// Returns `true` once the user has asked to close the window.
    ///
    /// Set when the window X button is clicked or the OS requests
    /// shutdown. The engine does not exit on its own; the active view
    /// is expected to notice and return [`ViewAction::Quit`].
    ///
    /// [`ViewAction::Quit`]: crate::core::view::ViewAction::Quit
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for Events {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
