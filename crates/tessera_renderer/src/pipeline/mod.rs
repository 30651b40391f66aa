pub mod layout;
pub mod patch;

pub use layout::PipelineLayouts;
pub use patch::PatchPipeline;
