//! Reading book records from catalog text.
//!
//! This module provides [`CatalogReader`] for reading `:`-delimited catalog
//! lines from any source that implements [`std::io::BufRead`].
//!
//! # Examples
//!
//! Reading records from a file:
//!
//! ```no_run
//! use booktrack::CatalogReader;
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! let file = File::open("catalog.txt")?;
//! let mut reader = CatalogReader::new(BufReader::new(file));
//!
//! while let Some(record) = reader.read_record()? {
//!     println!("{}", record.title);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Reading from a buffer:
//!
//! ```
//! use booktrack::CatalogReader;
//! use std::io::Cursor;
//!
//! let data = "Dune:Herbert:9780441013593:3\n";
//! let mut reader = CatalogReader::new(Cursor::new(data));
//! let records = reader.read_all()?;
//! assert_eq!(records.len(), 1);
//! # Ok::<(), booktrack::CatalogError>(())
//! ```

use std::io::BufRead;

use crate::codec::parse_record;
use crate::error::{CatalogError, Result};
use crate::record::BookRecord;
use crate::recovery::LoadMode;

/// Reader for the line-oriented catalog format.
///
/// `CatalogReader` reads one line at a time and parses it into a
/// [`BookRecord`]. Malformed lines are reported with their 1-based line
/// number.
#[derive(Debug)]
pub struct CatalogReader<R: BufRead> {
    reader: R,
    load_mode: LoadMode,
    line_number: usize,
    records_read: usize,
    buffer: String,
}

impl<R: BufRead> CatalogReader<R> {
    /// Create a new catalog reader in [`LoadMode::Strict`].
    pub fn new(reader: R) -> Self {
        CatalogReader {
            reader,
            load_mode: LoadMode::Strict,
            line_number: 0,
            records_read: 0,
            buffer: String::new(),
        }
    }

    /// Set the policy for blank lines.
    ///
    /// # Examples
    ///
    /// ```
    /// use booktrack::{CatalogReader, LoadMode};
    /// use std::io::Cursor;
    ///
    /// let data = "Dune:Herbert:9780441013593:3\n\n";
    /// let mut reader = CatalogReader::new(Cursor::new(data))
    ///     .with_load_mode(LoadMode::SkipBlankLines);
    /// assert_eq!(reader.read_all()?.len(), 1);
    /// # Ok::<(), booktrack::CatalogError>(())
    /// ```
    #[must_use]
    pub fn with_load_mode(mut self, mode: LoadMode) -> Self {
        self.load_mode = mode;
        self
    }

    /// Read the next record.
    ///
    /// Returns `Ok(Some(record))` for a parsed line and `Ok(None)` at end of
    /// input.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Malformed`] if a line fails validation, or
    /// [`CatalogError::Io`] if the underlying read fails (including invalid
    /// UTF-8).
    pub fn read_record(&mut self) -> Result<Option<BookRecord>> {
        loop {
            self.buffer.clear();
            if self.reader.read_line(&mut self.buffer)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let line = strip_line_ending(&self.buffer);
            if self.load_mode.skips(line) {
                tracing::debug!(line = self.line_number, "skipping blank catalog line");
                continue;
            }

            let record = parse_record(line)
                .map_err(|source| CatalogError::malformed_at(self.line_number, source))?;
            self.records_read += 1;
            return Ok(Some(record));
        }
    }

    /// Read all remaining records into a vector.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered. Records read before the error
    /// are discarded.
    pub fn read_all(&mut self) -> Result<Vec<BookRecord>> {
        let mut records = Vec::new();
        while let Some(record) = self.read_record()? {
            records.push(record);
        }
        Ok(records)
    }

    /// Number of records read so far.
    #[must_use]
    pub fn records_read(&self) -> usize {
        self.records_read
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
