//=========================================================================
// System Event Types
//
// Defines the internal representation of low-level input events.
//
// This module abstracts away platform-specific input (e.g. Winit, SDL)
// into a unified, engine-friendly format used by the input subsystem.
//
// Responsibilities:
// - Represent keyboard and mouse inputs in a stable, portable way
// - Provide equality and hashing semantics for deduplication
// - Enable event coalescing (e.g., multiple MouseMoved → last position)
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    RawInputEvent (this module)
//         ↓
//    Events snapshot (digests per frame)
//         ↓
//    View queries (is_key_pressed, mouse_position, ...)
// ```
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::hash::{Hash, Hasher};

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// Abstracts platform-specific button representations (e.g., Winit's
/// `MouseButton`, SDL's button codes) into a stable, portable enum.
///
/// The `Other` variant covers side buttons, macro buttons, and any
/// non-standard inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button (side buttons, thumb buttons, macro keys).
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// For example, `KeyA` is always the same physical key regardless of
/// keyboard layout (QWERTY vs AZERTY).
///
/// Coverage:
/// - Alphanumeric keys (A-Z, 0-9)
/// - Arrow keys
/// - Common special keys (Space, Enter, Escape, etc.)
///
/// Additional keys can be added as needed without breaking existing code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------

    /// Number row: 0-9
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys: A-Z (physical location, not character)
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------

    /// Directional navigation keys
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    /// Spacebar
    Space,

    /// Return/Enter key
    Enter,

    /// Escape key
    Escape,

    /// Tab key
    Tab,

    /// Backspace key
    Backspace,

    /// Delete key
    Delete,

    /// Fallback for keys not explicitly mapped by the input layer.
    ///
    /// Used when the platform reports a key that isn't in the enum.
    /// Typically rare, as most common keys are covered.
    Unidentified,
}

//=== RawInputEvent =======================================================

/// Low-level input event from the platform layer.
///
/// Events carry both the input type (key/button/mouse) and associated
/// data (which key, which button, cursor position).
///
/// # Equality & Hashing Semantics
///
/// Events are compared by type + payload. Special case: `MouseMoved`
/// events are equal regardless of coordinates, allowing efficient
/// coalescing in the per-frame buffer (last position wins).
///
/// ```text
/// Equality Rules:
/// KeyDown(A)       == KeyDown(A)        ✓
/// KeyDown(A)       == KeyDown(B)        ✗ (different key)
/// KeyDown(A)       == KeyUp(A)          ✗ (different type)
/// MouseMoved{...}  == MouseMoved{...}   ✓ (always equal)
/// ```
#[derive(Debug, Clone, Copy)]
pub enum RawInputEvent {
    /// Key pressed down.
    KeyDown(KeyCode),

    /// Key released.
    KeyUp(KeyCode),

    /// Mouse button pressed.
    MouseButtonDown(MouseButton),

    /// Mouse button released.
    MouseButtonUp(MouseButton),

    /// Mouse cursor moved to new position.
    ///
    /// Coordinates are in screen space (pixels, top-left origin).
    /// Multiple consecutive MouseMoved events are coalesced by the
    /// platform layer before reaching the input snapshot.
    MouseMoved { x: f32, y: f32 },

    /// Unrecognized or unsupported event.
    ///
    /// These are silently ignored by the input system. Used for forward
    /// compatibility when new platform events are added.
    Unidentified,
}

//--- Trait Implementations -----------------------------------------------

impl PartialEq for RawInputEvent {
    fn eq(&self, other: &Self) -> bool {
        use RawInputEvent::*;
        match (self, other) {
            (KeyDown(a), KeyDown(b)) => a == b,
            (KeyUp(a), KeyUp(b)) => a == b,
            (MouseButtonDown(a), MouseButtonDown(b)) => a == b,
            (MouseButtonUp(a), MouseButtonUp(b)) => a == b,
            // Coalescing: position is payload, not identity.
            (MouseMoved { .. }, MouseMoved { .. }) => true,
            (Unidentified, Unidentified) => true,
            _ => false,
        }
    }
}

impl Eq for RawInputEvent {}

impl Hash for RawInputEvent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        use RawInputEvent::*;
        // Discriminant first so KeyDown(A) and KeyUp(A) never collide.
        std::mem::discriminant(self).hash(state);
        match self {
            KeyDown(key) | KeyUp(key) => key.hash(state),
            MouseButtonDown(btn) | MouseButtonUp(btn) => btn.hash(state),
            // MouseMoved hashes by discriminant only, matching eq().
            MouseMoved { .. } => {}
            Unidentified => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
