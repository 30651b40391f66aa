//! Glyph outline loading and cubic patch layout.
//!
//! | Module    | Responsibility                                              |
//! |-----------|-------------------------------------------------------------|
//! | `outline` | `GlyphCommand`, `BezierPatch`, the outline text parser      |
//! | `source`  | Where outline resources live (directory, memory)            |
//! | `loader`  | Source + parser + read-through cache, diagnostics           |
//! | `layout`  | Baseline layout and packing into a `VertexBuffer`           |
//! | `vertex`  | Host-side vertex data and attribute metadata                |

pub mod error;
pub mod layout;
pub mod loader;
pub mod outline;
pub mod source;
pub mod vertex;

pub use error::OutlineError;
pub use layout::{GlyphExtent, Layout, LayoutBuilder, LayoutState, PlacedGlyph};
pub use loader::GlyphLoader;
pub use outline::{BezierPatch, GlyphCommand, GlyphOutline, OutlineParser, ParsedOutline};
pub use source::{DirectorySource, MemorySource, OutlineSource, DEFAULT_PREFIX};
pub use vertex::{
    VertexAttribute, VertexBuffer, FLOATS_PER_PATCH, PATCH_VERTICES, POSITION_ATTRIBUTE,
};
