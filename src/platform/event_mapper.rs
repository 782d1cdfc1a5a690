//=========================================================================
// Platform Event Mapper
//
// Converts Winit input events to engine-level `RawInputEvent` types.
// Provides a clean separation between OS-specific input and the
// engine's internal event representation.
//
// Responsibilities:
// - Translate keyboard and mouse events
// - Ignore unsupported or irrelevant Winit events
// - Provide fallbacks (`Unidentified`) for unmapped inputs
//
//=========================================================================

use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::KeyCode as WinitKeyCode;
use winit::keyboard::PhysicalKey;

use crate::core::input::event::{KeyCode, MouseButton, RawInputEvent};

//=== Key Conversion ======================================================
//
// Maps `WinitKeyCode` values to the engine's internal `KeyCode` enum.
// Only a subset of codes is supported; all others map to `Unidentified`.
//

impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Numeric keys -----------------------------------------------------
            Digit0 => KeyCode::Digit0, Digit1 => KeyCode::Digit1,
            Digit2 => KeyCode::Digit2, Digit3 => KeyCode::Digit3,
            Digit4 => KeyCode::Digit4, Digit5 => KeyCode::Digit5,
            Digit6 => KeyCode::Digit6, Digit7 => KeyCode::Digit7,
            Digit8 => KeyCode::Digit8, Digit9 => KeyCode::Digit9,

            //--- Alphabetic keys --------------------------------------------------
            KeyA => KeyCode::KeyA, KeyB => KeyCode::KeyB, KeyC => KeyCode::KeyC,
            KeyD => KeyCode::KeyD, KeyE => KeyCode::KeyE, KeyF => KeyCode::KeyF,
            KeyG => KeyCode::KeyG, KeyH => KeyCode::KeyH, KeyI => KeyCode::KeyI,
            KeyJ => KeyCode::KeyJ, KeyK => KeyCode::KeyK, KeyL => KeyCode::KeyL,
            KeyM => KeyCode::KeyM, KeyN => KeyCode::KeyN, KeyO => KeyCode::KeyO,
            KeyP => KeyCode::KeyP, KeyQ => KeyCode::KeyQ, KeyR => KeyCode::KeyR,
            KeyS => KeyCode::KeyS, KeyT => KeyCode::KeyT, KeyU => KeyCode::KeyU,
            KeyV => KeyCode::KeyV, KeyW => KeyCode::KeyW, KeyX => KeyCode::KeyX,
            KeyY => KeyCode::KeyY, KeyZ => KeyCode::KeyZ,

            //--- Arrow keys -------------------------------------------------------
            ArrowDown => KeyCode::ArrowDown, ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight, ArrowUp => KeyCode::ArrowUp,

            //--- Special keys -----------------------------------------------------
            Space => KeyCode::Space,
            Enter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            Tab => KeyCode::Tab,
            Backspace => KeyCode::Backspace,
            Delete => KeyCode::Delete,

            //--- Fallback ---------------------------------------------------------
            _ => KeyCode::Unidentified,
        }
    }
}

//=== Mouse Conversion ====================================================
//
// Maps Winit mouse button identifiers to internal mouse button types.
//

impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=== Window Event Conversion =============================================
//
// Extracts a `RawInputEvent` from a `WindowEvent` when the event carries
// input the engine cares about. Lifecycle events (resize, close, redraw)
// are handled by the platform itself and yield `None` here.
//

pub(super) fn map_window_event(event: &WindowEvent) -> Option<RawInputEvent> {
    match event {
        //--- Keyboard Input ------------------------------------------
        WindowEvent::KeyboardInput { event: key_event, .. } => {
            let key = match key_event.physical_key {
                PhysicalKey::Code(code) => KeyCode::from(code),
                _ => KeyCode::Unidentified,
            };

            Some(match key_event.state {
                ElementState::Pressed => RawInputEvent::KeyDown(key),
                ElementState::Released => RawInputEvent::KeyUp(key),
            })
        }

        //--- Mouse Button Input --------------------------------------
        WindowEvent::MouseInput { state, button, .. } => {
            let btn = MouseButton::from(*button);
            Some(match state {
                ElementState::Pressed => RawInputEvent::MouseButtonDown(btn),
                ElementState::Released => RawInputEvent::MouseButtonUp(btn),
            })
        }

        //--- Mouse Movement ------------------------------------------
        WindowEvent::CursorMoved { position, .. } => Some(RawInputEvent::MouseMoved {
            x: position.x as f32,
            y: position.y as f32,
        }),

        //--- Non-Input Events ----------------------------------------
        _ => None,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_keys_map_to_engine_codes() {
        assert_eq!(KeyCode::from(WinitKeyCode::KeyW), KeyCode::KeyW);
        assert_eq!(KeyCode::from(WinitKeyCode::Digit7), KeyCode::Digit7);
    }

    #[test]
    fn special_keys_map_to_engine_codes() {
        assert_eq!(KeyCode::from(WinitKeyCode::Space), KeyCode::Space);
        assert_eq!(KeyCode::from(WinitKeyCode::Escape), KeyCode::Escape);
        assert_eq!(KeyCode::from(WinitKeyCode::Enter), KeyCode::Enter);
    }

    #[test]
    fn unmapped_keys_fall_back_to_unidentified() {
        assert_eq!(KeyCode::from(WinitKeyCode::F24), KeyCode::Unidentified);
        assert_eq!(KeyCode::from(WinitKeyCode::NumLock), KeyCode::Unidentified);
    }

    #[test]
    fn mouse_buttons_map_with_fallback() {
        assert_eq!(MouseButton::from(WinitMouseButton::Left), MouseButton::Left);
        assert_eq!(MouseButton::from(WinitMouseButton::Middle), MouseButton::Middle);
        assert_eq!(MouseButton::from(WinitMouseButton::Back), MouseButton::Other);
    }

    #[test]
    fn non_input_window_events_map_to_none() {
        assert!(map_window_event(&WindowEvent::CloseRequested).is_none());
        assert!(map_window_event(&WindowEvent::RedrawRequested).is_none());
    }
}
