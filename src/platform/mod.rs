//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the engine's frame loop.
//
// Architecture:
// ```text
//  Main Thread (only thread):
//  ┌──────────────────────────────────────┐
//  │  Winit Event Loop                    │
//  │   ↓                                  │
//  │  event_mapper                        │
//  │   ├─ Converts Winit → RawInputEvent  │
//  │   ↓                                  │
//  │  InputBuffer                         │
//  │   ├─ discrete: Vec<>                 │
//  │   └─ continuous: HashSet<>           │
//  │   ↓                                  │
//  │  RedrawRequested (frame boundary)    │
//  │   ├─ Events::pump(batch)             │
//  │   ├─ ViewRunner::tick(ctx, elapsed)  │
//  │   └─ pace to target fps, next redraw │
//  └──────────────────────────────────────┘
// ```
//
// Key Design Decisions:
// - **RedrawRequested = frame boundary**: All input buffered since the
//   last frame is digested in one batch, keeping event order stable
//   within the frame
// - **Single-threaded**: The frame loop runs inside the Winit callbacks;
//   there is no logic thread and no channel to cross
// - **View-decides-quit**: A window close request only raises the quit
//   flag in `Events`; the active view must return `ViewAction::Quit`
//   for the loop to exit
// - **Main thread requirement**: Winit mandates main thread on
//   macOS/iOS, so this runs on the thread that called `Engine::run()`
//
// Responsibilities:
// - Create and manage the OS window and the frame `Context`
// - Convert Winit events → engine RawInputEvents
// - Buffer input until the frame boundary
// - Measure elapsed time and pace the loop to the target frame rate
//
//=========================================================================

//=== Submodules ==========================================================

mod event_mapper;
mod input_buffer;

//=== Standard Library Imports ============================================

use std::time::{Duration, Instant};

//=== External Crates =====================================================

use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::context::Context;
use crate::core::input::RawInputEvent;
use crate::core::view::{TickControl, View, ViewRunner};
use event_mapper::map_window_event;
use input_buffer::InputBuffer;

//=== ViewFactory =========================================================

/// Deferred constructor for the initial view.
///
/// The context only exists once the window does, so the application hands
/// the engine a factory instead of a finished view. Invoked exactly once,
/// inside `resumed()`.
pub(crate) type ViewFactory = Box<dyn FnOnce(&mut Context) -> Box<dyn View>>;

//=== PlatformConfig ======================================================

/// Window and pacing parameters, filled in by `EngineBuilder`.
#[derive(Debug, Clone)]
pub(crate) struct PlatformConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fps: f64,
}

//=== PlatformError =======================================================

/// Platform initialization and runtime errors.
///
/// These are typically fatal - if the event loop can't be created,
/// the engine cannot run.
#[derive(Debug)]
pub(crate) enum PlatformError {
    /// Failed to create event loop (rare, indicates OS-level issue).
    EventLoopCreation(winit::error::EventLoopError),

    /// Event loop execution error (rare, indicates corruption).
    EventLoopExecution(winit::error::EventLoopError),
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EventLoopCreation(e) => write!(f, "Event loop creation failed: {}", e),
            Self::EventLoopExecution(e) => write!(f, "Event loop error: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}

//=== Platform ============================================================

/// Window manager and frame loop driver.
///
/// Runs on the main thread (Winit requirement on macOS/iOS) and drives
/// the whole engine from inside the Winit callbacks.
///
/// # Lifecycle
///
/// 1. **Construction**: `Platform::new(config, factory)`
/// 2. **Execution**: `platform.run()` - starts the event loop
/// 3. **Startup**: `resumed()` creates window, context, and initial view
/// 4. **Frames**: every `RedrawRequested` pumps input and ticks the view
/// 5. **Shutdown**: the view returns `Quit` → loop exits
///
/// # Fields
///
/// - `window`: Created lazily in `resumed()` (mobile compatibility)
/// - `context`/`runner`: Created alongside the window
/// - `buffer`: Accumulates events until `RedrawRequested`
/// - `last_frame`: Timestamp of the previous frame for elapsed measurement
pub(crate) struct Platform {
    config: PlatformConfig,

    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    /// Frame state handed to the active view (None until the window exists).
    context: Option<Context>,

    /// Owns the active view (None until the factory has run).
    runner: Option<ViewRunner>,

    /// Constructor for the initial view; consumed in `resumed()`.
    factory: Option<ViewFactory>,

    /// Buffers discrete/continuous input until the frame boundary.
    buffer: InputBuffer,

    /// Close was requested since the last frame; surfaced to the view
    /// through `Events::quit_requested`.
    quit_pending: bool,

    /// Previous frame's start time; None before the first frame.
    last_frame: Option<Instant>,

    /// Target duration of one frame, derived from the configured fps.
    frame_budget: Duration,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates a new platform instance.
    ///
    /// Does not create the window yet - that happens lazily in `resumed()`.
    pub fn new(config: PlatformConfig, factory: ViewFactory) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        let frame_budget = Duration::from_secs_f64(1.0 / config.fps);

        Self {
            config,
            window: None,
            context: None,
            runner: None,
            factory: Some(factory),
            buffer: InputBuffer::new(),
            quit_pending: false,
            last_frame: None,
            frame_budget,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Starts the event loop and blocks until the active view quits.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread (macOS/iOS Winit requirement).
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Runs one frame at the `RedrawRequested` boundary.
    ///
    /// Measures elapsed wall time, pumps buffered input into the events
    /// snapshot, ticks the view runner, and paces the loop by sleeping
    /// out the remainder of the frame budget before requesting the next
    /// redraw.
    fn run_frame(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(context), Some(runner)) = (self.context.as_mut(), self.runner.as_mut()) else {
            return;
        };

        let frame_start = Instant::now();
        let elapsed = match self.last_frame.replace(frame_start) {
            Some(previous) => (frame_start - previous).as_secs_f64(),
            None => 0.0,
        };

        //--- Step 1: Digest this frame's input ---------------------------
        let batch: Vec<RawInputEvent> = self.buffer.drain();
        let quit = std::mem::take(&mut self.quit_pending);

        if !batch.is_empty() {
            trace!(target: "platform::input", "Pumping {} input events", batch.len());
        }
        context.events.pump(&batch, quit);

        //--- Step 2: Tick the active view --------------------------------
        if let TickControl::Exit = runner.tick(context, elapsed) {
            info!(target: "platform", "Frame loop exiting");
            event_loop.exit();
            return;
        }

        //--- Step 3: Maintain pacing -------------------------------------
        let frame_time = frame_start.elapsed();
        if frame_time < self.frame_budget {
            std::thread::sleep(self.frame_budget - frame_time);
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Called when app becomes active (startup or mobile resume).
    ///
    /// Creates the window, the frame context, and the initial view if
    /// they don't exist yet. On mobile, this may be called multiple times
    /// (suspend/resume cycle).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(self.config.width, self.config.height));

        let window = match event_loop.create_window(attrs) {
            Ok(window) => window,
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        info!(
            target: "platform",
            "Window created: {}x{} @ {}x DPI",
            size.width,
            size.height,
            window.scale_factor()
        );

        let mut context = Context::new(size.width, size.height);

        // The factory runs exactly once; resumed() guards on window
        // existence above, so take() cannot find an empty slot here.
        if let Some(factory) = self.factory.take() {
            let initial = factory(&mut context);
            self.runner = Some(ViewRunner::new(initial, &mut context));
        }

        self.context = Some(context);
        window.request_redraw();
        self.window = Some(window);
    }

    /// Handles per-window events.
    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                // The view decides: raise the flag and let it return Quit.
                self.quit_pending = true;
            }

            WindowEvent::Resized(size) => {
                debug!(target: "platform", "Window resized to {}x{}", size.width, size.height);
                if let Some(context) = self.context.as_mut() {
                    context.surface.resize(size.width, size.height);
                }
            }

            WindowEvent::CursorMoved { .. } => {
                if let Some(raw) = map_window_event(&event) {
                    self.buffer.push_continuous(raw);
                }
            }

            WindowEvent::KeyboardInput { .. } | WindowEvent::MouseInput { .. } => {
                if let Some(raw) = map_window_event(&event) {
                    self.buffer.push_discrete(raw);
                } else {
                    trace!(target: "platform::input", "Unmapped input ignored");
                }
            }

            WindowEvent::RedrawRequested => {
                // Frame boundary: digest input, tick the view, pace.
                self.run_frame(event_loop);
            }

            _ => {
                // Ignore: Focused, Moved, etc. (not needed for the loop)
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
