//! The in-memory catalog and its search and insert operations.
//!
//! A [`Catalog`] is rebuilt from storage on every run. It is searched by
//! identifier or by title substring, or grown by one record and handed back
//! to the caller in sorted order for persisting.
//!
//! # Examples
//!
//! ```
//! use booktrack::{Catalog, IdentifierMatch, LoadMode};
//!
//! let lines = ["Dune:Herbert:9780441013593:3", "Emma:Austen:9780141439587:1"];
//! let catalog = Catalog::load_all(lines, LoadMode::Strict)?;
//!
//! match catalog.search_by_identifier("9780141439587") {
//!     IdentifierMatch::Unique(record) => assert_eq!(record.title, "Emma"),
//!     other => panic!("unexpected {other:?}"),
//! }
//! assert_eq!(catalog.search_by_title("Du").len(), 1);
//! # Ok::<(), booktrack::CatalogError>(())
//! ```

use std::io::BufRead;

use crate::codec::parse_record;
use crate::error::{CatalogError, Result};
use crate::reader::CatalogReader;
use crate::record::BookRecord;
use crate::recovery::LoadMode;

/// Outcome of an identifier lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierMatch<'a> {
    /// Exactly one record carries the identifier.
    Unique(&'a BookRecord),
    /// More than one record carries the identifier; none is chosen.
    Duplicate {
        /// Number of records sharing the identifier.
        count: usize,
    },
    /// No record carries the identifier.
    NotFound,
}

/// Ordered collection of book records loaded for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<BookRecord>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from already-validated records, keeping their order.
    #[must_use]
    pub fn from_records(records: Vec<BookRecord>) -> Self {
        Catalog { records }
    }

    /// Parse every line into a record.
    ///
    /// Loading is fail-fast: the first malformed line aborts the whole load
    /// and no partial catalog is returned.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] with the 1-based line number of the
    /// first line that fails validation.
    pub fn load_all<I, S>(lines: I, mode: LoadMode) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut records = Vec::new();
        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            if mode.skips(line) {
                continue;
            }
            let record =
                parse_record(line).map_err(|source| CatalogError::malformed_at(index + 1, source))?;
            records.push(record);
        }
        tracing::debug!(records = records.len(), "catalog loaded");
        Ok(Catalog { records })
    }

    /// Load a catalog from a [`CatalogReader`].
    ///
    /// # Errors
    ///
    /// Returns the first malformed-line or I/O error from the reader.
    pub fn from_reader<R: BufRead>(reader: &mut CatalogReader<R>) -> Result<Self> {
        let records = reader.read_all()?;
        tracing::debug!(records = records.len(), "catalog loaded");
        Ok(Catalog { records })
    }

    /// Look up a record by exact identifier.
    ///
    /// Scans the whole catalog. Duplicated identifiers are reported as
    /// [`IdentifierMatch::Duplicate`] and never resolved to one of the records.
    #[must_use]
    pub fn search_by_identifier(&self, identifier: &str) -> IdentifierMatch<'_> {
        let mut matches = self
            .records
            .iter()
            .filter(|record| record.identifier == identifier);

        match (matches.next(), matches.count()) {
            (None, _) => IdentifierMatch::NotFound,
            (Some(record), 0) => IdentifierMatch::Unique(record),
            (Some(_), rest) => {
                tracing::warn!(identifier, count = rest + 1, "duplicate identifier in catalog");
                IdentifierMatch::Duplicate { count: rest + 1 }
            },
        }
    }

    /// Every record whose title contains `needle`, in catalog order.
    ///
    /// Matching is case-sensitive substring containment.
    #[must_use]
    pub fn search_by_title(&self, needle: &str) -> Vec<&BookRecord> {
        let matches: Vec<&BookRecord> = self
            .records
            .iter()
            .filter(|record| record.title.contains(needle))
            .collect();
        tracing::debug!(needle, matches = matches.len(), "title search");
        matches
    }

    /// Append a record and re-sort the catalog by title, ignoring case.
    ///
    /// The sort is stable, so records whose titles compare equal keep their
    /// relative order. Identifiers are not checked for uniqueness.
    /// Returns the full sorted sequence for persisting.
    pub fn insert(&mut self, record: BookRecord) -> &[BookRecord] {
        tracing::info!(title = %record.title, identifier = %record.identifier, "inserting record");
        self.records.push(record);
        self.records.sort_by_cached_key(BookRecord::sort_key);
        &self.records
    }

    /// The records in catalog order.
    #[must_use]
    pub fn records(&self) -> &[BookRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
