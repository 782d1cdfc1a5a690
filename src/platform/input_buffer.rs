//=========================================================================
// Input Buffer
//
// Collects and normalizes raw input events (keyboard, mouse, etc.)
// into two categories: discrete and continuous. Acts as a transient
// event aggregator between the Winit callbacks and the frame boundary.
//
// Responsibilities:
// - Store incoming platform events for the current frame
// - Deduplicate repeated discrete inputs (e.g., KeyDown)
// - Coalesce continuous inputs (e.g., MouseMoved)
// - Provide unified access to collected events via `drain()`
//
// Notes:
// The InputBuffer exists only for the current frame and is reset
// after being drained into the `Events` snapshot.
//=========================================================================

//=== Standard Library Imports ============================================
use std::collections::HashSet;

//=== Internal Modules ====================================================
use crate::core::input::event::RawInputEvent;

//=== InputBuffer Struct ==================================================
//
// Represents the transient event store for one frame of input.
//
// Internally maintains:
// - `discrete`: unique, one-shot inputs (e.g., KeyDown)
// - `continuous`: last-known state of continuous inputs (e.g., MouseMoved)
//
pub struct InputBuffer {
    discrete: Vec<RawInputEvent>,
    continuous: HashSet<RawInputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    //
    // Creates a new input buffer with preallocated capacity to minimize
    // reallocations under typical gameplay conditions.
    //
    pub fn new() -> Self {
        const DISCRETE_BASE: usize = 128;
        const CONTINUOUS_BASE: usize = 16;

        Self {
            discrete: Vec::with_capacity(DISCRETE_BASE),
            continuous: HashSet::with_capacity(CONTINUOUS_BASE),
        }
    }

    //--- Continuous Event Handling ---------------------------------------
    //
    // Inserts or replaces a continuous input (e.g., mouse movement).
    // The latest event always replaces any previous one of the same type.
    //
    pub fn push_continuous(&mut self, event: RawInputEvent) {
        self.continuous.replace(event);
    }

    //--- Discrete Event Handling -----------------------------------------
    //
    // Appends a discrete input (e.g., key press, button click).
    // Duplicate consecutive events are ignored to prevent flooding.
    //
    pub fn push_discrete(&mut self, event: RawInputEvent) {
        if self.discrete.last() != Some(&event) {
            self.discrete.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns all collected events for this frame and clears the buffer.
    // Combines both discrete and continuous events into a single vector;
    // discrete events keep their arrival order.
    //
    pub fn drain(&mut self) -> Vec<RawInputEvent> {
        let mut events = std::mem::take(&mut self.discrete);
        events.extend(self.continuous.drain());
        events
    }

    //--- Utilities --------------------------------------------------------
    pub fn len(&self) -> usize {
        self.discrete.len() + self.continuous.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discrete.is_empty() && self.continuous.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
