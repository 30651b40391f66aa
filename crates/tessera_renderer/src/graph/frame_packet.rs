/// Data bundle assembled once per frame and passed immutably to every
/// `RenderPass`.
///
/// Passes only see resolved GPU handles and counts, never the layout
/// builder or the host-side buffer.
use std::sync::Arc;

// ── Patches ───────────────────────────────────────────────────────────────────

/// One instanced draw over the uploaded patch buffer.
pub struct PatchDraw {
    pub vertex_buffer: Arc<wgpu::Buffer>,
    /// Valid bytes at the start of `vertex_buffer`.
    pub byte_len: wgpu::BufferAddress,
    pub instances: u32,
}

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Rectangular region of the render target the text is drawn into.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
        }
    }

    /// Largest square centred in a `width` x `height` target, so clip space
    /// keeps a 1:1 aspect ratio whatever the window shape.
    pub fn centered_square(width: u32, height: u32) -> Self {
        let side = width.min(height);
        Self {
            x: (width - side) / 2,
            y: (height - side) / 2,
            width: side,
            height: side,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

// ── Frame packet ──────────────────────────────────────────────────────────────

pub struct FramePacket {
    pub viewport: Option<Viewport>,
    /// `None` when there is nothing to draw this frame.
    pub patches: Option<PatchDraw>,
    pub clear_color: wgpu::Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_square_letterboxes_the_long_side() {
        assert_eq!(
            Viewport::centered_square(1280, 720),
            Viewport { x: 280, y: 0, width: 720, height: 720 }
        );
        assert_eq!(
            Viewport::centered_square(600, 800),
            Viewport { x: 0, y: 100, width: 600, height: 600 }
        );
        assert!(Viewport::centered_square(0, 720).is_empty());
        assert_eq!(Viewport::full(4, 3), Viewport { x: 0, y: 0, width: 4, height: 3 });
    }
}
