pub mod buffer;
pub mod patch_buffer;

pub use patch_buffer::GpuPatchBuffer;
