//! `tessera_renderer` uploads laid-out glyph patches and draws them.
//!
//! # Module layout
//!
//! | Module      | Responsibility                                          |
//! |-------------|---------------------------------------------------------|
//! | `context`   | Re-exports `EngineContext`; device/queue accessors      |
//! | `resources` | Buffer helpers, the device-side `GpuPatchBuffer`        |
//! | `geometry`  | `PatchInstance` vertex layout, `PatchStyle` uniform     |
//! | `pipeline`  | Bind-group layouts + compiled `PatchPipeline`           |
//! | `graph`     | `RenderPass` trait + `FramePacket`                      |
//! | `passes`    | Built-in `PatchPass`                                    |
pub mod context;
pub mod geometry;
pub mod graph;
pub mod passes;
pub mod pipeline;
pub mod resources;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use geometry::{PatchInstance, PatchStyle};
pub use graph::{FramePacket, PatchDraw, RenderPass, Viewport};
pub use passes::PatchPass;
pub use resources::GpuPatchBuffer;

use tessera_assets::VertexBuffer;

use pipeline::{PatchPipeline, PipelineLayouts};

// ── Renderer ──────────────────────────────────────────────────────────────────

/// Top-level renderer.
///
/// Owns the device-side patch buffer and runs a list of [`RenderPass`]
/// stages each frame using the **prepare → execute** pattern.  The built-in
/// [`PatchPass`] is registered during construction.
pub struct Renderer {
    pub context: context::EngineContext,
    /// Ordered list of passes executed every frame.
    pub passes: Vec<Box<dyn RenderPass>>,
    patches: GpuPatchBuffer,
    pub viewport: Viewport,
    clear_color: wgpu::Color,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(
        context: context::EngineContext,
        width: u32,
        height: u32,
        format: wgpu::TextureFormat,
        style: PatchStyle,
    ) -> Self {
        let device = &context.device;

        let layouts = PipelineLayouts::new(device);
        let pipeline = PatchPipeline::new(device, format, layouts);
        let patch_pass = PatchPass::new(device, pipeline, style);
        let patches = GpuPatchBuffer::new(device);

        let passes: Vec<Box<dyn RenderPass>> = vec![Box::new(patch_pass)];

        Self {
            context,
            passes,
            patches,
            viewport: Viewport::centered_square(width, height),
            clear_color: wgpu::Color::BLACK,
            width,
            height,
        }
    }

    // ── Frame API ─────────────────────────────────────────────────────────────

    /// Allocates a fresh `CommandEncoder` for the current frame.
    pub fn begin_frame(&self) -> wgpu::CommandEncoder {
        self.context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            })
    }

    /// Copies this frame's patches to the GPU.  Call before
    /// [`render_to_view`](Self::render_to_view).
    pub fn upload(&mut self, data: &VertexBuffer) {
        self.patches.upload(
            context::device(&self.context),
            context::queue(&self.context),
            data,
        );
    }

    /// The device-side buffer of the last upload.
    pub fn patches(&self) -> &GpuPatchBuffer {
        &self.patches
    }

    /// Renders into an external `TextureView` (e.g. a swapchain frame).
    pub fn render_to_view(&mut self, encoder: &mut wgpu::CommandEncoder, view: &wgpu::TextureView) {
        let packet = self.build_packet();
        for pass in &mut self.passes {
            pass.prepare(&self.context.device, &self.context.queue, &packet);
            pass.execute(
                &self.context.device,
                &self.context.queue,
                encoder,
                view,
                &packet,
            );
        }
    }

    // ── Pass management ───────────────────────────────────────────────────────

    /// Appends a custom pass.  Passes execute in insertion order.
    pub fn add_pass(&mut self, pass: Box<dyn RenderPass>) {
        self.passes.push(pass);
    }

    // ── Appearance ────────────────────────────────────────────────────────────

    pub fn set_clear_color(&mut self, color: wgpu::Color) {
        self.clear_color = color;
    }

    /// Restyles every registered [`PatchPass`].
    pub fn set_style(&mut self, style: PatchStyle) {
        for pass in &mut self.passes {
            if let Some(patch_pass) = pass.as_any_mut().downcast_mut::<PatchPass>() {
                patch_pass.set_style(style);
            }
        }
    }

    // ── Resize / viewport ─────────────────────────────────────────────────────

    /// Re-centres the viewport and notifies every pass.
    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width == self.width && new_height == self.height {
            return;
        }
        self.width = new_width;
        self.height = new_height;
        self.viewport = Viewport::centered_square(new_width, new_height);

        for pass in &mut self.passes {
            pass.on_resize(&self.context.device, &self.context.queue, new_width, new_height);
        }
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    fn build_packet(&self) -> FramePacket {
        let patches = (!self.patches.is_empty()).then(|| PatchDraw {
            vertex_buffer: self.patches.buffer().clone(),
            byte_len: self.patches.slice_len(),
            instances: self.patches.instances(),
        });

        FramePacket {
            viewport: Some(self.viewport),
            patches,
            clear_color: self.clear_color,
        }
    }
}
