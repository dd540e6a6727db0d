//! Common test helpers shared across the integration suite.

use std::path::{Path, PathBuf};

use booktrack::BookRecord;
use tempfile::TempDir;

/// Path of the sorted five-record sample catalog.
#[allow(dead_code)]
pub const SAMPLE_CATALOG: &str = "tests/data/sample_catalog.txt";

/// Creates a temporary directory holding `catalog.txt` with `contents`.
///
/// The directory is removed when the returned guard is dropped.
#[allow(dead_code)]
pub fn catalog_with(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("Could not create temp dir");
    let path = dir.path().join("catalog.txt");
    std::fs::write(&path, contents).expect("Could not write catalog");
    (dir, path)
}

/// Creates a temporary copy of the sample catalog.
#[allow(dead_code)]
pub fn sample_catalog() -> (TempDir, PathBuf) {
    let contents = std::fs::read_to_string(SAMPLE_CATALOG).expect("Could not read fixture");
    catalog_with(&contents)
}

/// Reads a catalog file back as a string.
#[allow(dead_code)]
pub fn read_catalog(path: &Path) -> String {
    std::fs::read_to_string(path).expect("Could not read catalog")
}

/// Builds a valid record, panicking on invalid input.
#[allow(dead_code)]
pub fn book(title: &str, author: &str, isbn: &str, copies: u32) -> BookRecord {
    BookRecord::try_new(title, author, isbn, copies).expect("Invalid test record")
}
