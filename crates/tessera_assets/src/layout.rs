//! Lays a string out along the baseline and packs every glyph's patches into
//! one [`VertexBuffer`].
//!
//! Placement is variable-width: after each glyph the pen advances by that
//! glyph's horizontal extent plus a pad of `extent / length`.  All positions
//! are finally multiplied by `scale / length`, so the whole string shrinks as
//! it grows longer.

use std::ops::Range;

use glam::Vec2;
use log::trace;

use crate::loader::GlyphLoader;
use crate::source::OutlineSource;
use crate::vertex::VertexBuffer;

/// Horizontal extrema of the raw coordinates written in one glyph's
/// resource, `M` points included.
///
/// Both bounds start at zero, so `max` only grows and `min` only shrinks:
/// a glyph drawn entirely right of its origin still measures from 0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlyphExtent {
    pub max: f32,
    pub min: f32,
}

impl GlyphExtent {
    pub fn include(&mut self, x: f32) {
        self.max = self.max.max(x);
        self.min = self.min.min(x);
    }

    pub fn width(&self) -> f32 {
        self.max.abs() + self.min.abs()
    }
}

/// Per-string state threaded through a layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutState {
    length: f32,
    scaling_factor: f32,
    translate_distance: f32,
    pen: f32,
    spacing: f32,
}

impl LayoutState {
    /// State at the start of a string of `length` characters (`length > 0`).
    pub fn new(scale: f32, length: usize) -> Self {
        let length = length as f32;
        let scaling_factor = scale / length;
        Self {
            length,
            scaling_factor,
            translate_distance: 2.0 / length,
            pen: -1.0 / scaling_factor,
            spacing: 0.0,
        }
    }

    pub fn scaling_factor(&self) -> f32 {
        self.scaling_factor
    }

    /// `2 / length`: the per-character share of the [-1, 1] clip range.
    /// Computed for reference only; placement does not use it.
    pub fn translate_distance(&self) -> f32 {
        self.translate_distance
    }

    /// Current pen position in unscaled outline units.
    pub fn pen(&self) -> f32 {
        self.pen
    }

    /// Advance applied after the most recently measured glyph.
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Maps a raw outline point to output space.  `translate` only moves x.
    pub fn place(&self, p: Vec2, translate: f32) -> Vec2 {
        Vec2::new(
            (p.x + self.pen + translate) * self.scaling_factor,
            p.y * self.scaling_factor,
        )
    }

    /// Moves the pen by the last computed spacing without measuring
    /// anything.  Used for spaces.
    pub fn skip(&mut self) {
        self.pen += self.spacing;
    }

    /// Derives the spacing from a finished glyph and advances past it.
    pub fn finish_glyph(&mut self, extent: GlyphExtent) {
        let width = extent.width();
        self.spacing = width + width / self.length;
        self.pen += self.spacing;
    }
}

/// Where one non-space character ended up.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedGlyph {
    pub ch: char,
    /// Pen position the glyph was drawn at.
    pub pen: f32,
    /// `None` when the glyph's resource could not be loaded.
    pub extent: Option<GlyphExtent>,
    /// Indices of this glyph's patches in the buffer.
    pub patches: Range<u32>,
}

/// Output of a layout pass with the bookkeeping needed to inspect it.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub buffer: VertexBuffer,
    pub glyphs: Vec<PlacedGlyph>,
    /// Final state, `None` for empty input.
    pub state: Option<LayoutState>,
}

impl Layout {
    fn empty() -> Self {
        Self {
            buffer: VertexBuffer::new(),
            glyphs: Vec::new(),
            state: None,
        }
    }

    /// Characters whose outline resource was unavailable.
    pub fn missing(&self) -> impl Iterator<Item = char> + '_ {
        self.glyphs
            .iter()
            .filter(|g| g.extent.is_none())
            .map(|g| g.ch)
    }
}

/// Drives a [`GlyphLoader`] over a string and accumulates the patch buffer.
pub struct LayoutBuilder<S> {
    loader: GlyphLoader<S>,
}

impl<S: OutlineSource> LayoutBuilder<S> {
    pub fn new(loader: GlyphLoader<S>) -> Self {
        Self { loader }
    }

    pub fn loader(&self) -> &GlyphLoader<S> {
        &self.loader
    }

    pub fn loader_mut(&mut self) -> &mut GlyphLoader<S> {
        &mut self.loader
    }

    /// Lays out `text` and returns the packed control points.
    ///
    /// Never fails: unreadable glyphs and malformed records are logged by the
    /// loader and contribute no geometry.
    pub fn build(&mut self, text: &str, scale: f32, translate: f32) -> VertexBuffer {
        self.layout(text, scale, translate).buffer
    }

    /// Same as [`build`](Self::build), keeping per-glyph placement.
    pub fn layout(&mut self, text: &str, scale: f32, translate: f32) -> Layout {
        let length = text.chars().count();
        if length == 0 {
            return Layout::empty();
        }

        let mut state = LayoutState::new(scale, length);
        let mut buffer = VertexBuffer::new();
        let mut glyphs = Vec::new();

        for ch in text.chars() {
            // a space reuses the previous glyph's spacing unchanged
            if ch == ' ' {
                state.skip();
                continue;
            }

            let first = buffer.patches();
            let pen = state.pen();
            let outline = match self.loader.load(ch as u32) {
                Ok(outline) => outline,
                Err(_) => {
                    // nothing was measured: zero width, zero spacing
                    state.finish_glyph(GlyphExtent::default());
                    glyphs.push(PlacedGlyph {
                        ch,
                        pen,
                        extent: None,
                        patches: first..first,
                    });
                    continue;
                }
            };

            let mut extent = GlyphExtent::default();
            for p in outline.commands.iter().flat_map(|cmd| cmd.points()) {
                extent.include(p.x);
            }
            for patch in outline.mapped_patches(|p| state.place(p, translate)) {
                buffer.push_patch(&patch);
            }
            state.finish_glyph(extent);

            glyphs.push(PlacedGlyph {
                ch,
                pen,
                extent: Some(extent),
                patches: first..buffer.patches(),
            });
        }

        trace!(
            "laid out {length} chars into {} patches (scale {scale}, translate {translate})",
            buffer.patches()
        );

        Layout {
            buffer,
            glyphs,
            state: Some(state),
        }
    }
}
