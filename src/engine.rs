//=========================================================================
// Vantage Engine
//
// Main entry point and coordinator for the engine.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run(view)──>  [Runtime]
//         │                          │
//         ├─ with_title()            └─ creates the platform
//         ├─ with_size()               runs the frame loop
//         └─ with_fps()                blocks until the view quits
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::context::Context;
use crate::core::view::View;
use crate::platform::{Platform, PlatformConfig};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// Provides a fluent API for setting engine parameters before
/// construction.
///
/// # Default Values
///
/// - **Title**: "Vantage Engine"
/// - **Size**: 800x600 logical pixels
/// - **FPS**: 60.0 (frame rate cap for the main loop)
///
/// # Examples
///
/// Simple usage with defaults:
/// ```no_run
/// use vantage_engine::prelude::*;
///
/// struct MainMenu;
///
/// impl View for MainMenu {
///     fn render(&mut self, ctx: &mut Context, _elapsed: f64) -> ViewAction {
///         if ctx.events.quit_requested() {
///             return ViewAction::Quit;
///         }
///         ViewAction::Continue
///     }
/// }
///
/// EngineBuilder::new().build().run(|_ctx| Box::new(MainMenu));
/// ```
///
/// Advanced configuration:
/// ```no_run
/// # use vantage_engine::prelude::*;
/// # struct MainMenu;
/// # impl View for MainMenu {
/// #     fn render(&mut self, _ctx: &mut Context, _elapsed: f64) -> ViewAction {
/// #         ViewAction::Quit
/// #     }
/// # }
///
/// EngineBuilder::new()
///     .with_title("Asteroid Drift")
///     .with_size(1280, 720)
///     .with_fps(120.0)              // High refresh rate
///     .build()
///     .run(|_ctx| Box::new(MainMenu));
/// ```
pub struct EngineBuilder {
    title: String,
    width: u32,
    height: u32,
    fps: f64,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            title: "Vantage Engine".to_string(),
            width: 800,
            height: 600,
            fps: 60.0,
        }
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial window size in logical pixels.
    ///
    /// The frame surface follows the actual window size at runtime, so
    /// this only controls the starting dimensions.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Window size must be positive, got {}x{}", width, height);
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the target frame rate for the main loop.
    ///
    /// The loop sleeps out the remainder of each frame's budget, so
    /// higher values reduce input latency but increase CPU usage. Views
    /// still receive the measured elapsed time; frame pacing never
    /// changes simulation semantics.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `fps <= 0.0`.
    pub fn with_fps(mut self, fps: f64) -> Self {
        assert!(fps > 0.0, "FPS must be positive, got {}", fps);
        self.fps = fps;
        self
    }

    /// Builds the engine instance.
    ///
    /// Consumes the builder and produces a configured [`Engine`] ready
    /// for execution via [`Engine::run`].
    pub fn build(self) -> Engine {
        info!("Building engine ({}x{} @ {} fps)", self.width, self.height, self.fps);

        Engine {
            config: PlatformConfig {
                title: self.title,
                width: self.width,
                height: self.height,
                fps: self.fps,
            },
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Vantage Engine runtime.
///
/// The engine owns the frame loop and manages the active view. Create
/// via [`EngineBuilder`] with `EngineBuilder::new().build()`.
///
/// # Architecture
///
/// ```text
/// Engine (Main Thread)
///   └─► Platform (Winit Event Loop)
///         ├─► Window, Input Buffering
///         └─► Context + ViewRunner (per-frame tick)
/// ```
///
/// Everything runs synchronously on the calling thread: each frame polls
/// input, renders the active view, and paces to the target frame rate.
pub struct Engine {
    config: PlatformConfig,
}

impl Engine {
    //--- Execution --------------------------------------------------------

    /// Starts the engine runtime and blocks until the application exits.
    ///
    /// `initial` constructs the first view once the window and [`Context`]
    /// exist; the engine owns the view from then on and destroys it when
    /// it transitions away or quits.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the Winit event loop and window
    /// 2. Builds the frame context and the initial view
    /// 3. Runs the frame loop (blocks here)
    /// 4. Returns when the active view returns `ViewAction::Quit`
    ///
    /// Platform failures (no display, event loop errors) are logged and
    /// cause an early return.
    pub fn run<F>(self, initial: F)
    where
        F: FnOnce(&mut Context) -> Box<dyn View> + 'static,
    {
        info!(
            "Starting engine runtime (\"{}\", {} fps)",
            self.config.title, self.config.fps
        );

        let platform = Platform::new(self.config, Box::new(initial));
        info!("Platform initialized, entering frame loop");

        if let Err(e) = platform.run() {
            error!("Platform error: {}", e);
        }

        info!("Engine shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.title, "Vantage Engine");
        assert_eq!((builder.width, builder.height), (800, 600));
        assert_eq!(builder.fps, 60.0);
    }

    #[test]
    fn builder_with_title() {
        let builder = EngineBuilder::new().with_title("Asteroid Drift");
        assert_eq!(builder.title, "Asteroid Drift");
    }

    #[test]
    fn builder_with_size() {
        let builder = EngineBuilder::new().with_size(1280, 720);
        assert_eq!((builder.width, builder.height), (1280, 720));
    }

    #[test]
    #[should_panic(expected = "Window size must be positive")]
    fn builder_with_size_panics_on_zero() {
        EngineBuilder::new().with_size(0, 600);
    }

    #[test]
    fn builder_with_fps() {
        let builder = EngineBuilder::new().with_fps(120.0);
        assert_eq!(builder.fps, 120.0);
    }

    #[test]
    #[should_panic(expected = "FPS must be positive")]
    fn builder_with_fps_panics_on_zero() {
        EngineBuilder::new().with_fps(0.0);
    }

    #[test]
    #[should_panic(expected = "FPS must be positive")]
    fn builder_with_fps_panics_on_negative() {
        EngineBuilder::new().with_fps(-60.0);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let engine = EngineBuilder::new()
            .with_title("Chained")
            .with_size(640, 480)
            .with_fps(30.0)
            .build();

        assert_eq!(engine.config.title, "Chained");
        assert_eq!((engine.config.width, engine.config.height), (640, 480));
        assert_eq!(engine.config.fps, 30.0);
    }
}
