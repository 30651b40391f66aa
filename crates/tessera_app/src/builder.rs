use crate::config::AppConfig;

/// Entry point.  Use the builder methods to override configuration, then
/// call [`run`](App::run).
///
/// ```rust,ignore
/// App::new()
///     .with_text("Hello")
///     .with_glyph_prefix("assets/cmuntt/gly_")
///     .run()?;
/// ```
pub struct App {
    config: AppConfig,
}

impl App {
    pub fn new() -> Self {
        Self::from_config(AppConfig::default())
    }

    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.config.title = title.to_string();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.config.width = width;
        self.config.height = height;
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.config.text = text.to_string();
        self
    }

    pub fn with_glyph_prefix(mut self, prefix: &str) -> Self {
        self.config.glyph_prefix = prefix.to_string();
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.config.vsync = vsync;
        self
    }

    /// Runs the event loop until the window is closed.
    pub fn run(self) -> anyhow::Result<()> {
        crate::runner::run_internal(self.config)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let app = App::new()
            .with_title("Glyphs")
            .with_size(640, 480)
            .with_text("abc")
            .with_glyph_prefix("fonts/g_")
            .with_vsync(false);
        let config = app.config();
        assert_eq!(config.title, "Glyphs");
        assert_eq!((config.width, config.height), (640, 480));
        assert_eq!(config.text, "abc");
        assert_eq!(config.glyph_prefix, "fonts/g_");
        assert!(!config.vsync);
        assert_eq!(config.scale, AppConfig::default().scale);
    }
}
