//! Glyph loading: source lookup, parsing, an optional read-through cache,
//! and rate-limited diagnostics.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use log::{debug, warn};

use crate::error::OutlineError;
use crate::outline::{GlyphOutline, OutlineParser};
use crate::source::OutlineSource;

/// Loads outlines from an [`OutlineSource`].
///
/// Outline resources never change while the program runs, so successful
/// loads may be cached by character code.  Failures are never cached: a
/// glyph that is missing this frame is looked up again on the next one.
pub struct GlyphLoader<S> {
    source: S,
    cache: Option<HashMap<u32, Arc<GlyphOutline>>>,
    /// codes whose problems were already logged at `warn`
    reported: HashSet<u32>,
}

impl<S: OutlineSource> GlyphLoader<S> {
    /// A loader that opens and parses the resource on every call.
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: None,
            reported: HashSet::new(),
        }
    }

    /// A loader that keeps every successfully parsed outline.
    pub fn cached(source: S) -> Self {
        Self {
            cache: Some(HashMap::new()),
            ..Self::new(source)
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn is_caching(&self) -> bool {
        self.cache.is_some()
    }

    /// Number of outlines held in the cache (0 when caching is off).
    pub fn cached_len(&self) -> usize {
        self.cache.as_ref().map_or(0, HashMap::len)
    }

    pub fn clear_cache(&mut self) {
        if let Some(cache) = &mut self.cache {
            cache.clear();
        }
    }

    /// Returns the outline for `code`.
    ///
    /// Malformed records are logged and dropped; only an unreadable
    /// resource is an error.
    pub fn load(&mut self, code: u32) -> Result<Arc<GlyphOutline>, OutlineError> {
        if let Some(outline) = self.cache.as_ref().and_then(|c| c.get(&code)) {
            return Ok(outline.clone());
        }

        let text = match self.source.read(code) {
            Ok(text) => text,
            Err(err) => {
                self.report(code, &err);
                return Err(err);
            }
        };

        let parsed = OutlineParser::parse_str(code, &text);
        for err in &parsed.skipped {
            self.report(code, err);
        }

        let outline = Arc::new(parsed.outline);
        if let Some(cache) = &mut self.cache {
            cache.insert(code, outline.clone());
        }
        Ok(outline)
    }

    fn report(&mut self, code: u32, err: &OutlineError) {
        let location = self.source.locate(code);
        if self.reported.insert(code) {
            warn!("glyph {code} ({location}): {err}");
        } else {
            debug!("glyph {code} ({location}): {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{DirectorySource, MemorySource};

    #[test]
    fn uncached_loader_rereads() {
        let source = MemorySource::new().with('A', "M 0 0 L 1 0");
        let mut loader = GlyphLoader::new(&source);
        let a = loader.load(65).unwrap();
        let b = loader.load(65).unwrap();
        assert_eq!(a, b);
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(loader.cached_len(), 0);
    }

    #[test]
    fn cached_loader_shares_outline() {
        let source = MemorySource::new().with('A', "M 0 0 L 1 0");
        let mut loader = GlyphLoader::cached(&source);
        let a = loader.load(65).unwrap();
        let b = loader.load(65).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(loader.cached_len(), 1);
        loader.clear_cache();
        assert_eq!(loader.cached_len(), 0);
    }

    #[test]
    fn malformed_records_do_not_fail_the_glyph() {
        let source = MemorySource::new().with('A', "M 0 0 X 3 L 1 0");
        let mut loader = GlyphLoader::new(source);
        let outline = loader.load(65).unwrap();
        assert_eq!(outline.commands.len(), 2);
    }

    #[test]
    fn missing_glyph_is_retried_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirectorySource::new(format!("{}/gly_", dir.path().display()));
        let mut loader = GlyphLoader::cached(source);

        assert!(loader.load(66).unwrap_err().is_missing());
        assert_eq!(loader.cached_len(), 0);

        // the resource appearing later is picked up by the next lookup
        std::fs::write(dir.path().join("gly_66"), "M 0 0 L 2 0").unwrap();
        let outline = loader.load(66).unwrap();
        assert_eq!(outline.patches().count(), 1);
        assert_eq!(loader.cached_len(), 1);
    }
}
