/// Thin wrappers over `wgpu::Buffer` creation that enforce common usage
/// patterns and remove boilerplate from higher-level modules.
use std::sync::Arc;
use wgpu::util::DeviceExt;

/// Creates a GPU uniform buffer initialised with `data` and returns it
/// wrapped in an `Arc` so ownership can be shared between CPU-side code and
/// the bind groups that reference it.
///
/// The buffer is created with `UNIFORM | COPY_DST` usages, which is the
/// correct combination for a uniform that will be updated at runtime.
pub fn create_uniform<T: bytemuck::Pod>(
    device: &wgpu::Device,
    label: &str,
    data: &T,
) -> Arc<wgpu::Buffer> {
    Arc::new(
        device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::bytes_of(data),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        }),
    )
}

/// Creates an empty, writable vertex buffer of `size` bytes.
///
/// `COPY_DST` lets the contents be replaced with `queue.write_buffer` every
/// frame without reallocating.
pub fn create_dynamic_vertex(
    device: &wgpu::Device,
    label: &str,
    size: wgpu::BufferAddress,
) -> Arc<wgpu::Buffer> {
    Arc::new(device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    }))
}

/// Writes `data` to an existing uniform buffer.
pub fn update_uniform<T: bytemuck::Pod>(queue: &wgpu::Queue, buffer: &wgpu::Buffer, data: &T) {
    queue.write_buffer(buffer, 0, bytemuck::bytes_of(data));
}

/// Smallest buffer size that holds `needed` bytes: a power of two, at least
/// `min`, rounded to `COPY_BUFFER_ALIGNMENT`.
pub fn grow_size(needed: wgpu::BufferAddress, min: wgpu::BufferAddress) -> wgpu::BufferAddress {
    let size = needed.max(min).next_power_of_two();
    wgpu::util::align_to(size, wgpu::COPY_BUFFER_ALIGNMENT)
}
