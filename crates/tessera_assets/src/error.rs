use thiserror::Error;

/// Recoverable failures while loading a glyph outline.
///
/// None of these abort a layout pass: a missing resource blanks one glyph
/// and a malformed record drops one record.
#[derive(Debug, Error)]
pub enum OutlineError {
    #[error("cannot open outline resource for code {code} at {path}: {source}")]
    ResourceNotFound {
        code: u32,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record #{record}: {reason}")]
    MalformedRecord { record: usize, reason: String },
}

impl OutlineError {
    pub fn malformed(record: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            record,
            reason: reason.into(),
        }
    }

    /// True for errors that leave the whole glyph without geometry.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::ResourceNotFound { .. })
    }
}
