//! Book record structure.
//!
//! A [`BookRecord`] is the catalog's only entity. Records are built by the
//! [`codec`](crate::codec), or by [`BookRecord::try_new`], which applies the
//! same validation rules.

use serde::Serialize;

use crate::codec;
use crate::error::MalformedRecord;

/// A single book entry in the catalog.
///
/// Field values are stored trimmed. Internal whitespace is kept exactly as
/// supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BookRecord {
    /// Book title (non-empty)
    pub title: String,
    /// Book author (non-empty)
    pub author: String,
    /// 13-digit identifier
    #[serde(rename = "isbn")]
    pub identifier: String,
    /// Number of copies held (strictly positive)
    pub copies: u32,
}

impl BookRecord {
    /// Build a validated record from its parts.
    ///
    /// The parts are trimmed and checked with the same rules used when
    /// parsing a catalog line.
    ///
    /// # Examples
    ///
    /// ```
    /// use booktrack::BookRecord;
    ///
    /// let record = BookRecord::try_new(" Dune ", "Herbert", "9780441013593", 3)?;
    /// assert_eq!(record.title, "Dune");
    /// # Ok::<(), booktrack::MalformedRecord>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a [`MalformedRecord`] if any field violates the record rules.
    pub fn try_new(
        title: &str,
        author: &str,
        identifier: &str,
        copies: u32,
    ) -> Result<Self, MalformedRecord> {
        codec::validate_fields(title, author, identifier, &copies.to_string())
    }

    /// Case-insensitive sort key for the title.
    #[must_use]
    pub fn sort_key(&self) -> String {
        self.title.to_lowercase()
    }
}
