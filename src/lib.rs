#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # booktrack: a flat-file book catalog
//!
//! The catalog is a text file with one record per line:
//!
//! ```text
//! title:author:isbn:copies
//! ```
//!
//! A run loads the whole file, then either searches it (by 13-digit ISBN or
//! by title substring) or inserts one record and writes the catalog back
//! sorted by title, ignoring case.
//!
//! ## Quick Start
//!
//! ```
//! use booktrack::{Catalog, IdentifierMatch, LoadMode, Operation};
//!
//! let mut catalog = Catalog::load_all(
//!     ["Emma:Austen:9780141439587:1", "Dune Messiah:Herbert:9780593098233:2"],
//!     LoadMode::Strict,
//! )?;
//!
//! if let Operation::Insert(entry) = Operation::classify("Dune:Herbert:9780441013593:3") {
//!     let record = entry.parse()?;
//!     let sorted = catalog.insert(record);
//!     assert_eq!(sorted[0].title, "Dune");
//! }
//!
//! assert_eq!(catalog.search_by_title("Dune").len(), 2);
//! assert!(matches!(
//!     catalog.search_by_identifier("9780141439587"),
//!     IdentifierMatch::Unique(_)
//! ));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Modules
//!
//! - [`record`] — The `BookRecord` entity
//! - [`codec`] — Parsing and serializing catalog lines
//! - [`identifier`] — The 13-digit identifier predicate
//! - [`reader`] / [`writer`] — Streaming records from and to text
//! - [`catalog`] — Loading, searching and sorted insertion
//! - [`operation`] — Classifying the operation token
//! - [`storage`] — The catalog file on disk
//! - [`output`] — Text, JSON and CSV rendering
//! - [`config`] — Per-run configuration
//! - [`tracker`] — One complete invocation
//! - [`error`] — Error types and result type

pub mod catalog;
pub mod codec;
pub mod config;
pub mod error;
pub mod identifier;
pub mod operation;
pub mod output;
pub mod reader;
pub mod record;
pub mod recovery;
pub mod storage;
pub mod tracker;
pub mod writer;

pub use catalog::{Catalog, IdentifierMatch};
pub use codec::{parse_record, serialize_record};
pub use config::TrackerConfig;
pub use error::{CatalogError, MalformedRecord, Result};
pub use identifier::is_identifier;
pub use operation::Operation;
pub use output::OutputFormat;
pub use reader::CatalogReader;
pub use record::BookRecord;
pub use recovery::LoadMode;
pub use storage::CatalogFile;
pub use tracker::{run, RunSummary};
pub use writer::CatalogWriter;
