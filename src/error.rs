//! Error types for catalog operations.
//!
//! This module provides the [`CatalogError`] type for all catalog operations,
//! the [`MalformedRecord`] type describing why a single line was rejected by
//! the codec, and the [`Result`] convenience type.

use std::path::PathBuf;

use thiserror::Error;

/// Reason a line or insertion string failed record validation.
///
/// Checks run in declaration order, so a line with both an empty title and a
/// bad identifier reports [`MalformedRecord::EmptyTitleOrAuthor`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedRecord {
    /// The line did not split into exactly four `:`-delimited fields.
    #[error("Entry must contain 4 fields.")]
    FieldCount {
        /// Number of fields actually found.
        found: usize,
    },

    /// Title or author was empty after trimming.
    #[error("Title and Author cannot be empty.")]
    EmptyTitleOrAuthor,

    /// Title or author contained the field delimiter or a line break, which
    /// the line format cannot store.
    #[error("Title and Author cannot contain ':' or line breaks.")]
    ReservedCharacter {
        /// The offending field, trimmed.
        value: String,
    },

    /// The identifier was not exactly 13 decimal digits.
    #[error("ISBN must be exactly 13 digits.")]
    InvalidIdentifier {
        /// The offending identifier, trimmed.
        value: String,
    },

    /// The copy count did not parse as a strictly positive integer.
    #[error("Copies must be a positive integer.")]
    InvalidCopies {
        /// The offending copy count, trimmed.
        value: String,
    },
}

/// Error type for all catalog operations.
///
/// Every variant renders as a single human-readable line; the binary prints
/// it and exits.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Fewer than two invocation arguments were supplied.
    #[error("You should write: booktrack catalog.txt <operation>")]
    InsufficientArguments,

    /// The catalog path does not carry the required extension.
    #[error("Catalog file must be of the text type (Name{extension})")]
    InvalidFileName {
        /// The rejected path.
        path: PathBuf,
        /// The extension that was required.
        extension: String,
    },

    /// A stored line or an insertion string failed validation.
    ///
    /// `line` is the 1-based line number for storage lines and `None` for
    /// insertion strings.
    #[error("{source}")]
    Malformed {
        /// Line number within the catalog file, if the record came from storage.
        line: Option<usize>,
        /// The validation failure.
        #[source]
        source: MalformedRecord,
    },

    /// Reading from or writing to the catalog file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering records as JSON failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rendering records as CSV failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl CatalogError {
    /// Wrap a codec failure for an insertion string (no line number).
    #[must_use]
    pub fn malformed(source: MalformedRecord) -> Self {
        CatalogError::Malformed { line: None, source }
    }

    /// Wrap a codec failure for a stored line.
    #[must_use]
    pub fn malformed_at(line: usize, source: MalformedRecord) -> Self {
        CatalogError::Malformed {
            line: Some(line),
            source,
        }
    }
}

impl From<MalformedRecord> for CatalogError {
    fn from(source: MalformedRecord) -> Self {
        CatalogError::malformed(source)
    }
}

/// Convenience type alias for [`std::result::Result`] with [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;
