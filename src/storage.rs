//! The catalog file on disk.
//!
//! [`CatalogFile`] owns the path checks and the two storage accesses of a
//! run: reading every line, and overwriting the file with the sorted catalog.
//! Each access opens the file, completes, and closes it before returning.
//! Read-only runs never open the file for writing.

use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use crate::reader::CatalogReader;
use crate::record::BookRecord;
use crate::recovery::LoadMode;
use crate::writer::CatalogWriter;

/// Extension a catalog file name must end with unless configured otherwise.
pub const DEFAULT_EXTENSION: &str = ".txt";

/// A validated catalog file path.
#[derive(Debug, Clone)]
pub struct CatalogFile {
    path: PathBuf,
}

impl CatalogFile {
    /// Check the file name and create the file empty if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidFileName`] if the path does not end with
    /// `extension`, or [`CatalogError::Io`] if the file cannot be created.
    pub fn open(path: impl Into<PathBuf>, extension: &str) -> Result<Self> {
        let path = path.into();
        let has_extension = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(extension));
        if !has_extension {
            return Err(CatalogError::InvalidFileName {
                path,
                extension: extension.to_string(),
            });
        }

        if !path.exists() {
            tracing::info!(path = %path.display(), "creating empty catalog file");
            OpenOptions::new().write(true).create_new(true).open(&path)?;
        }

        Ok(CatalogFile { path })
    }

    /// Path of the catalog file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse every line of the file.
    ///
    /// # Errors
    ///
    /// Returns the first malformed line or I/O error.
    pub fn read_catalog(&self, mode: LoadMode) -> Result<Catalog> {
        let file = File::open(&self.path)?;
        let mut reader = CatalogReader::new(BufReader::new(file)).with_load_mode(mode);
        Catalog::from_reader(&mut reader)
    }

    /// Replace the file contents with `records`, one per line.
    ///
    /// The file is truncated first. A failure part way through leaves the
    /// file incomplete.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if opening, writing or flushing fails.
    pub fn persist(&self, records: &[BookRecord]) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = CatalogWriter::new(BufWriter::new(file));
        writer.write_batch(records)?;
        writer.finish()?;
        tracing::info!(
            path = %self.path.display(),
            records = writer.records_written(),
            "catalog persisted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_rejects_wrong_extension() {
        let dir = tempdir().unwrap();
        let err = CatalogFile::open(dir.path().join("catalog.csv"), DEFAULT_EXTENSION).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidFileName { .. }));
        assert!(!dir.path().join("catalog.csv").exists());
    }

    #[test]
    fn test_creates_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.txt");
        let file = CatalogFile::open(&path, DEFAULT_EXTENSION).unwrap();
        assert!(path.exists());
        assert!(file.read_catalog(LoadMode::Strict).unwrap().is_empty());
    }

    #[test]
    fn test_custom_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("books.cat");
        assert!(CatalogFile::open(&path, ".cat").is_ok());
        assert!(CatalogFile::open(&path, DEFAULT_EXTENSION).is_err());
    }

    #[test]
    fn test_persist_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.txt");
        std::fs::write(&path, "Old:Entry:1111111111111:1\nOther:Entry:2222222222222:1\n").unwrap();

        let file = CatalogFile::open(&path, DEFAULT_EXTENSION).unwrap();
        let record = BookRecord::try_new("Dune", "Herbert", "9780441013593", 3).unwrap();
        file.persist(std::slice::from_ref(&record)).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Dune:Herbert:9780441013593:3\n"
        );
    }

    #[test]
    fn test_read_catalog_reports_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("catalog.txt");
        std::fs::write(&path, "Dune:Herbert:9780441013593:3\nbad\n").unwrap();

        let file = CatalogFile::open(&path, DEFAULT_EXTENSION).unwrap();
        let err = file.read_catalog(LoadMode::Strict).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed { line: Some(2), .. }));
    }
}
