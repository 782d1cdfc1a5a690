//=========================================================================
// Vantage Engine — Library Root
//
// This crate defines the public API surface of the Vantage Engine.
//
// Responsibilities:
// - Expose the core engine interface (`Engine`, `EngineBuilder`)
// - Keep internal modules (like `platform`) hidden from end users
// - Provide clean separation between the high-level engine facade
//   and lower-level subsystems (input, views, graphics, OS integration)
//
// Typical usage:
// ```no_run
// use vantage_engine::prelude::*;
//
// struct MainMenu;
//
// impl View for MainMenu {
//     fn render(&mut self, ctx: &mut Context, _elapsed: f64) -> ViewAction {
//         if ctx.events.quit_requested() || ctx.events.is_key_pressed(KeyCode::Escape) {
//             return ViewAction::Quit;
//         }
//         ctx.surface.clear(Color::rgb(0, 0, 0));
//         ViewAction::Continue
//     }
// }
//
// fn main() {
//     EngineBuilder::new()
//         .with_title("My Game")
//         .build()
//         .run(|_ctx| Box::new(MainMenu));
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains all engine-facing systems and types (input, views,
// graphics primitives, the shared frame context). It is exposed publicly
// for engine-level extensibility, but normal application code will mostly
// use the top-level `Engine` facade and the `prelude`.
//
pub mod core;
pub mod logging;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains OS-specific logic (window, Winit integration,
// event loop, frame pacing) and is kept private, as it is not part of
// the public API surface.
//
// `engine` defines the main engine entry point and configuration.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the `Engine` types as the main entry point for applications.
// This allows users to simply `use vantage_engine::Engine;` without having
// to know the internal module structure.
//
pub use engine::{Engine, EngineBuilder};
