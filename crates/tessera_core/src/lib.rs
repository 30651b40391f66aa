// tessera_core: shared context, input and timing types

// the math types used by every other crate in the workspace
pub use glam;

// wgpu device/queue container
#[cfg(feature = "gpu")]
pub mod context;

// input helper for keyboard state
#[cfg(feature = "input")]
pub mod input;

pub mod time;

// re-export common input types so callers don't need to depend on winit
#[cfg(feature = "input")]
pub use input::{InputState, KeyCode};
pub use time::{Time, TimeClock};
