//! Writing book records as catalog text.
//!
//! This module provides [`CatalogWriter`] for serializing [`BookRecord`]
//! instances one per line to any destination implementing
//! [`std::io::Write`].
//!
//! # Examples
//!
//! ```
//! use booktrack::{BookRecord, CatalogWriter};
//!
//! let record = BookRecord::try_new("Dune", "Herbert", "9780441013593", 3)?;
//! let mut buffer = Vec::new();
//! {
//!     let mut writer = CatalogWriter::new(&mut buffer);
//!     writer.write_record(&record)?;
//!     writer.finish()?;
//! }
//! assert_eq!(buffer, b"Dune:Herbert:9780441013593:3\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::io::Write;

use crate::codec::serialize_record;
use crate::error::{CatalogError, Result};
use crate::record::BookRecord;

/// Writer for the line-oriented catalog format.
///
/// Call [`finish`](Self::finish) once all records are written so buffered
/// output is flushed.
#[derive(Debug)]
pub struct CatalogWriter<W: Write> {
    writer: W,
    records_written: usize,
    finished: bool,
}

impl<W: Write> CatalogWriter<W> {
    /// Create a new catalog writer.
    pub fn new(writer: W) -> Self {
        CatalogWriter {
            writer,
            records_written: 0,
            finished: false,
        }
    }

    /// Write a single record followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer has been finished or if the write fails.
    pub fn write_record(&mut self, record: &BookRecord) -> Result<()> {
        if self.finished {
            return Err(CatalogError::Io(std::io::Error::other(
                "cannot write to a finished writer",
            )));
        }

        writeln!(self.writer, "{}", serialize_record(record))?;
        self.records_written += 1;
        Ok(())
    }

    /// Write every record in order.
    ///
    /// # Errors
    ///
    /// Returns the first write error; records before it have been written.
    pub fn write_batch(&mut self, records: &[BookRecord]) -> Result<()> {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    /// Flush buffered output and refuse further writes.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    pub fn finish(&mut self) -> Result<()> {
        if !self.finished {
            self.writer.flush()?;
            self.finished = true;
        }
        Ok(())
    }

    /// Number of records written so far.
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }
}
