/// GPU-side view of the patch buffer and the style uniform.
///
/// The vertex buffer holds the layout builder's floats unchanged.  Each
/// 32-byte patch is read as one instance with four `vec2<f32>` attributes,
/// the first of which is the `"v"` attribute at location 0.
use tessera_assets::{PATCH_VERTICES, POSITION_ATTRIBUTE};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PatchInstance {
    pub points: [[f32; 2]; PATCH_VERTICES as usize],
}

const POINT_SIZE: wgpu::BufferAddress = std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress;

const ATTRIBUTES: [wgpu::VertexAttribute; PATCH_VERTICES as usize] = [
    // @location(0) p0, the "v" attribute
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x2,
        offset: 0,
        shader_location: POSITION_ATTRIBUTE.location,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x2,
        offset: POINT_SIZE,
        shader_location: POSITION_ATTRIBUTE.location + 1,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x2,
        offset: POINT_SIZE * 2,
        shader_location: POSITION_ATTRIBUTE.location + 2,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x2,
        offset: POINT_SIZE * 3,
        shader_location: POSITION_ATTRIBUTE.location + 3,
    },
];

impl PatchInstance {
    /// Returns the instance-rate `VertexBufferLayout` matching this struct.
    pub fn layout<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PatchInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Uniform at group(0) binding(0): stroke color and curve resolution.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PatchStyle {
    pub color: [f32; 4],
    /// Line segments per patch; the strip has `segments + 1` vertices.
    pub segments: u32,
    _pad: [u32; 3],
}

impl PatchStyle {
    pub fn new(color: [f32; 4], segments: u32) -> Self {
        Self {
            color,
            segments: segments.max(1),
            _pad: [0; 3],
        }
    }

    /// Vertices drawn per patch instance.
    pub fn strip_vertices(&self) -> u32 {
        self.segments + 1
    }
}

impl Default for PatchStyle {
    fn default() -> Self {
        Self::new([1.0, 1.0, 1.0, 1.0], 16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_assets::{BezierPatch, VertexBuffer, FLOATS_PER_PATCH};

    #[test]
    fn instance_stride_matches_vertex_buffer_patch() {
        assert_eq!(
            std::mem::size_of::<PatchInstance>(),
            FLOATS_PER_PATCH * std::mem::size_of::<f32>()
        );
        let layout = PatchInstance::layout();
        assert_eq!(layout.array_stride, 32);
        assert_eq!(layout.step_mode, wgpu::VertexStepMode::Instance);
        assert_eq!(layout.attributes[0].shader_location, 0);
        assert_eq!(layout.attributes[3].offset, 24);
    }

    #[test]
    fn buffer_floats_reinterpret_as_instances() {
        let mut buffer = VertexBuffer::new();
        buffer.push_patch(&BezierPatch::line(
            tessera_core::glam::Vec2::new(0.0, 0.0),
            tessera_core::glam::Vec2::new(4.0, 8.0),
        ));
        let instances: &[PatchInstance] = bytemuck::cast_slice(buffer.as_slice());
        assert_eq!(instances.len(), 1);
        assert_eq!(
            instances[0].points,
            [[0.0, 0.0], [1.0, 2.0], [3.0, 6.0], [4.0, 8.0]]
        );
    }

    #[test]
    fn style_matches_wgsl_uniform_size() {
        // vec4<f32> + u32, rounded up to the 16-byte struct alignment
        assert_eq!(std::mem::size_of::<PatchStyle>(), 32);
        assert_eq!(PatchStyle::new([0.0; 4], 0).segments, 1);
        assert_eq!(PatchStyle::default().strip_vertices(), 17);
    }
}
