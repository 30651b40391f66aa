/// The `RenderPass` trait: every stage the renderer runs implements this.
///
/// ## Two-phase design
/// `prepare` → `execute` lets passes upload GPU data **before** opening a
/// `wgpu::RenderPass`, which is required because `write_buffer` is not allowed
/// while an encoder is recording a render pass.
use wgpu::{CommandEncoder, Device, Queue, TextureView};

use crate::graph::FramePacket;

pub trait RenderPass: Send + Sync + 'static {
    /// Short human-readable label used as the WGPU debug label.
    fn name(&self) -> &str;

    /// Lets the renderer reach a concrete pass, e.g. to restyle it.
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;

    /// Called whenever the render target dimensions change.
    #[allow(unused_variables)]
    fn on_resize(&mut self, device: &Device, queue: &Queue, width: u32, height: u32) {}

    /// Upload GPU data.  Called **before** `execute` each frame.
    fn prepare(&mut self, device: &Device, queue: &Queue, packet: &FramePacket);

    /// Record draw commands into `encoder`.
    fn execute(
        &mut self,
        device: &Device,
        queue: &Queue,
        encoder: &mut CommandEncoder,
        color_view: &TextureView,
        packet: &FramePacket,
    );
}
