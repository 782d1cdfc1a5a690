//=========================================================================
// Logging Setup
//=========================================================================
//
// Thin wrapper around `env_logger` for applications built on the engine.
//
// The engine itself only emits through the `log` facade; binaries decide
// whether and how records are rendered. Calling `init()` early in `main`
// wires the facade to stderr with `RUST_LOG` filtering.
//
//=========================================================================

//=== External Crates =====================================================

use env_logger::Env;

//=== Initialization ======================================================

/// Initializes the global logger for the host application.
///
/// Reads the `RUST_LOG` environment variable for filter directives and
/// defaults to `info` level when unset. Safe to call exactly once per
/// process; later calls are ignored.
///
/// # Examples
///
/// ```
/// vantage_engine::logging::init();
/// log::info!("engine logging ready");
/// ```
pub fn init() {
    let env = Env::default().default_filter_or("info");
    // try_init: tests and embedding applications may have installed
    // their own logger already.
    let _ = env_logger::Builder::from_env(env).try_init();
}

//=========================================================================
// Unit Tests
//=========================================================================
