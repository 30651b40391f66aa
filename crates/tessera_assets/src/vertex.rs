//! Host-side vertex data handed to the GPU each frame.

use glam::Vec2;

use crate::outline::BezierPatch;

/// Control points per tessellation patch.
pub const PATCH_VERTICES: u32 = 4;

/// Floats per patch: four points of two coordinates.
pub const FLOATS_PER_PATCH: usize = 8;

/// Describes how the flat float sequence is read as a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub name: &'static str,
    pub location: u32,
    pub components: u32,
}

/// The single attribute carried by a [`VertexBuffer`]: 2-D control points.
pub const POSITION_ATTRIBUTE: VertexAttribute = VertexAttribute {
    name: "v",
    location: 0,
    components: 2,
};

/// An ordered float sequence plus its attribute metadata.
///
/// This is a plain value: it owns no GPU resource and can be cloned, compared
/// or dropped freely.  The renderer copies it to the device when a frame is
/// prepared.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexBuffer {
    attribute: VertexAttribute,
    data: Vec<f32>,
}

impl VertexBuffer {
    pub fn new() -> Self {
        Self {
            attribute: POSITION_ATTRIBUTE,
            data: Vec::new(),
        }
    }

    pub fn with_capacity(patches: usize) -> Self {
        Self {
            attribute: POSITION_ATTRIBUTE,
            data: Vec::with_capacity(patches * FLOATS_PER_PATCH),
        }
    }

    pub fn attribute(&self) -> VertexAttribute {
        self.attribute
    }

    /// Appends one patch as eight floats, `x` before `y`.
    pub fn push_patch(&mut self, patch: &BezierPatch) {
        for p in patch.points {
            self.data.push(p.x);
            self.data.push(p.y);
        }
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Number of floats.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Draw count passed with a patch size of [`PATCH_VERTICES`]:
    /// floats / 2, i.e. the number of control points.
    pub fn patch_count(&self) -> u32 {
        (self.data.len() / 2) as u32
    }

    /// Number of complete 4-point patches.
    pub fn patches(&self) -> u32 {
        (self.data.len() / FLOATS_PER_PATCH) as u32
    }

    /// Reads patch `index` back.
    pub fn patch(&self, index: usize) -> Option<BezierPatch> {
        let start = index.checked_mul(FLOATS_PER_PATCH)?;
        let f = self.data.get(start..start + FLOATS_PER_PATCH)?;
        Some(BezierPatch::new(
            Vec2::new(f[0], f[1]),
            Vec2::new(f[2], f[3]),
            Vec2::new(f[4], f[5]),
            Vec2::new(f[6], f[7]),
        ))
    }
}

impl Default for VertexBuffer {
    fn default() -> Self {
        Self::new()
    }
}
