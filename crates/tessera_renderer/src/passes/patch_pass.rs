/// Glyph outline pass.
///
/// Clears the target, binds the style uniform and draws every patch as one
/// instance of a `segments + 1` vertex line strip.
use std::sync::Arc;

use wgpu::{
    CommandEncoder, Device, LoadOp, Operations, Queue, RenderPassColorAttachment,
    RenderPassDescriptor, StoreOp, TextureView,
};

use crate::geometry::PatchStyle;
use crate::graph::{FramePacket, RenderPass};
use crate::pipeline::PatchPipeline;
use crate::resources::buffer;

pub struct PatchPass {
    pipeline: PatchPipeline,
    style: PatchStyle,
    style_buffer: Arc<wgpu::Buffer>,
    style_bind_group: Arc<wgpu::BindGroup>,
    style_dirty: bool,
}

impl PatchPass {
    pub fn new(device: &Device, pipeline: PatchPipeline, style: PatchStyle) -> Self {
        let style_buffer = buffer::create_uniform(device, "Patch Style Uniform", &style);
        let style_bind_group = Arc::new(device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Patch Style Bind Group"),
            layout: &pipeline.layouts.style,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: style_buffer.as_entire_binding(),
            }],
        }));

        Self {
            pipeline,
            style,
            style_buffer,
            style_bind_group,
            style_dirty: false,
        }
    }

    pub fn style(&self) -> PatchStyle {
        self.style
    }

    /// Takes effect on the next `prepare`.
    pub fn set_style(&mut self, style: PatchStyle) {
        if style != self.style {
            self.style = style;
            self.style_dirty = true;
        }
    }
}

impl RenderPass for PatchPass {
    fn name(&self) -> &str {
        "Glyph Patch Pass"
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }

    fn prepare(&mut self, _device: &Device, queue: &Queue, _packet: &FramePacket) {
        if self.style_dirty {
            buffer::update_uniform(queue, &self.style_buffer, &self.style);
            self.style_dirty = false;
        }
    }

    fn execute(
        &mut self,
        _device: &Device,
        _queue: &Queue,
        encoder: &mut CommandEncoder,
        color_view: &TextureView,
        packet: &FramePacket,
    ) {
        let mut rpass = encoder.begin_render_pass(&RenderPassDescriptor {
            label: Some(self.name()),
            color_attachments: &[Some(RenderPassColorAttachment {
                view: color_view,
                resolve_target: None,
                ops: Operations {
                    load: LoadOp::Clear(packet.clear_color),
                    store: StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            occlusion_query_set: None,
            timestamp_writes: None,
        });

        let Some(draw) = &packet.patches else {
            return;
        };
        if draw.instances == 0 {
            return;
        }

        if let Some(vp) = &packet.viewport {
            if vp.is_empty() {
                return;
            }
            rpass.set_viewport(
                vp.x as f32,
                vp.y as f32,
                vp.width as f32,
                vp.height as f32,
                0.0,
                1.0,
            );
            rpass.set_scissor_rect(vp.x, vp.y, vp.width, vp.height);
        }

        rpass.set_pipeline(&self.pipeline.inner);
        rpass.set_bind_group(0, &*self.style_bind_group, &[]);
        rpass.set_vertex_buffer(0, draw.vertex_buffer.slice(..draw.byte_len));
        rpass.draw(0..self.style.strip_vertices(), 0..draw.instances);
    }
}
