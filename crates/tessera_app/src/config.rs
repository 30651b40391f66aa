//! Startup configuration, read from a TOML file.
//!
//! Every key is optional; anything left out keeps its default:
//!
//! ```toml
//! text = "Hello"
//! glyph_prefix = "assets/cmuntt/gly_"
//! scale = 3.0
//! log_level = "debug"
//! ```

use std::path::Path;

use anyhow::Context as _;
use serde::Deserialize;
use tessera_assets::DEFAULT_PREFIX;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    /// The string to render.
    pub text: String,
    /// Outline resource for code `n` is read from `glyph_prefix + n`.
    pub glyph_prefix: String,
    /// Initial scale; arrow up/down adjusts it.
    pub scale: f32,
    /// Initial horizontal offset; arrow left/right adjusts it.
    pub translate: f32,
    /// Adjustment per key press or repeat.
    pub step: f32,
    /// Keep parsed outlines between frames.
    pub cache_glyphs: bool,
    /// Line segments per patch.
    pub segments: u32,
    pub color: [f32; 4],
    pub background: [f32; 4],
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Tessera".to_string(),
            width: 1024,
            height: 1024,
            vsync: true,
            text: "Hello".to_string(),
            glyph_prefix: DEFAULT_PREFIX.to_string(),
            scale: 3.0,
            translate: 0.0,
            step: 0.05,
            cache_glyphs: true,
            segments: 16,
            color: [1.0, 1.0, 1.0, 1.0],
            background: [0.0, 0.0, 0.0, 1.0],
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.log_filter()?;
        Ok(config)
    }

    /// Reads `path`.  A missing file yields `Ok(None)` so the caller can fall
    /// back to defaults; an unreadable or invalid file is an error.
    pub fn load(path: &Path) -> anyhow::Result<Option<Self>> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", path.display()));
            }
        };
        Self::from_toml(&text)
            .with_context(|| format!("parsing {}", path.display()))
            .map(Some)
    }

    pub fn log_filter(&self) -> anyhow::Result<log::LevelFilter> {
        self.log_level
            .parse()
            .with_context(|| format!("invalid log_level `{}`", self.log_level))
    }
}
