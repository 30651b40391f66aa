/// Device-side copy of a [`VertexBuffer`].
///
/// The host buffer is rebuilt every frame; `upload` copies it into a
/// persistent `VERTEX | COPY_DST` buffer.  Writes go through
/// `queue.write_buffer`, which the queue applies before the next submitted
/// command buffer, so a draw never observes a partially written frame.
/// When the new data does not fit, a larger buffer replaces the old one
/// outright.
use std::sync::Arc;

use log::debug;
use tessera_assets::{VertexBuffer, PATCH_VERTICES};

use crate::resources::buffer;

/// Initial allocation: room for 64 patches.
const MIN_CAPACITY: wgpu::BufferAddress = 64 * 32;

pub struct GpuPatchBuffer {
    buffer: Arc<wgpu::Buffer>,
    capacity: wgpu::BufferAddress,
    /// bytes currently valid
    len: wgpu::BufferAddress,
    /// draw count as reported by the host buffer (points, not patches)
    patch_count: u32,
}

impl GpuPatchBuffer {
    pub fn new(device: &wgpu::Device) -> Self {
        Self {
            buffer: buffer::create_dynamic_vertex(device, "Patch Vertex Buffer", MIN_CAPACITY),
            capacity: MIN_CAPACITY,
            len: 0,
            patch_count: 0,
        }
    }

    /// Replaces the device contents with `data`.
    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, data: &VertexBuffer) {
        let bytes: &[u8] = bytemuck::cast_slice(data.as_slice());
        let needed = bytes.len() as wgpu::BufferAddress;

        if needed > self.capacity {
            let capacity = buffer::grow_size(needed, MIN_CAPACITY);
            debug!("growing patch buffer {} -> {capacity} bytes", self.capacity);
            self.buffer = buffer::create_dynamic_vertex(device, "Patch Vertex Buffer", capacity);
            self.capacity = capacity;
        }

        if !bytes.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytes);
        }
        self.len = needed;
        self.patch_count = data.patch_count();
    }

    pub fn buffer(&self) -> &Arc<wgpu::Buffer> {
        &self.buffer
    }

    /// Bytes holding the current frame's patches.
    pub fn slice_len(&self) -> wgpu::BufferAddress {
        self.len
    }

    /// Count in the host buffer's convention (floats / 2).
    pub fn patch_count(&self) -> u32 {
        self.patch_count
    }

    /// Number of instances to draw.
    pub fn instances(&self) -> u32 {
        self.patch_count / PATCH_VERTICES
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> wgpu::BufferAddress {
        self.capacity
    }
}
