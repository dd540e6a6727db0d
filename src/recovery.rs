//! Load policy for catalog lines that are not records.
//!
//! By default every line of a catalog file must be a valid record and a blank
//! line aborts the load like any other malformed line. [`LoadMode`] lets a
//! caller opt into skipping blank lines instead.

/// Strategy for handling blank lines while loading a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadMode {
    /// Strict mode: every line must parse, blank lines included (default)
    #[default]
    Strict,
    /// Skip lines that are empty after trimming; reject all other malformed lines
    SkipBlankLines,
}

impl LoadMode {
    /// Whether a raw line should be skipped rather than parsed.
    #[must_use]
    pub fn skips(self, line: &str) -> bool {
        match self {
            LoadMode::Strict => false,
            LoadMode::SkipBlankLines => line.trim().is_empty(),
        }
    }
}
