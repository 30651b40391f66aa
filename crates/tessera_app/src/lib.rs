//! Interactive viewer that lays out a string as cubic Bézier patches and
//! draws them with the tessellating patch renderer.
//!
//! ```rust,ignore
//! use tessera_app::App;
//!
//! fn main() -> anyhow::Result<()> {
//!     App::new().with_text("Hello").run()
//! }
//! ```
//!
//! Arrow up/down changes the scale, arrow left/right the horizontal offset.

pub mod builder;
pub mod config;
pub mod controls;
mod graphics;
pub mod logging;
mod runner;

pub use builder::App;
pub use config::AppConfig;
pub use controls::{ControlDelta, LayoutControls};

pub use tessera_core::{InputState, KeyCode, Time, TimeClock};
