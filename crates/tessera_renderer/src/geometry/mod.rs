pub mod patch;

pub use patch::{PatchInstance, PatchStyle};
