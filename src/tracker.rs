//! One catalog invocation: load, dispatch, persist, render.
//!
//! [`run`] is the whole program minus argument parsing and logging setup.
//! Console output goes to the supplied writer so runs can be captured.

use std::io::Write;

use crate::catalog::IdentifierMatch;
use crate::codec::parse_record;
use crate::config::TrackerConfig;
use crate::error::Result;
use crate::operation::Operation;
use crate::output::{render_identifier_match, render_records};
use crate::storage::CatalogFile;

/// What a completed run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunSummary {
    /// Identifier lookup finished with the given outcome.
    IdentifierSearch {
        /// Whether exactly one record matched.
        found: bool,
        /// Whether the identifier was shared by several records.
        duplicate: bool,
    },
    /// Title search matched this many records.
    TitleSearch {
        /// Number of matching records.
        matches: usize,
    },
    /// A record was inserted and the catalog persisted.
    Inserted {
        /// Catalog size after insertion.
        records: usize,
    },
}

/// Perform the configured operation against the catalog file.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidFileName`] for a bad path,
/// [`CatalogError::Malformed`] if the catalog or an insertion string fails
/// validation, and [`CatalogError::Io`] if storage access fails.
///
/// [`CatalogError::InvalidFileName`]: crate::CatalogError::InvalidFileName
/// [`CatalogError::Malformed`]: crate::CatalogError::Malformed
/// [`CatalogError::Io`]: crate::CatalogError::Io
pub fn run<W: Write>(config: &TrackerConfig, out: &mut W) -> Result<RunSummary> {
    let file = CatalogFile::open(&config.catalog_path, &config.extension)?;
    let mut catalog = file.read_catalog(config.load_mode)?;

    let operation = Operation::classify(&config.operation);
    tracing::debug!(
        path = %file.path().display(),
        records = catalog.len(),
        mutating = operation.is_mutating(),
        ?operation,
        "dispatching"
    );

    match operation {
        Operation::IdentifierSearch(identifier) => {
            let outcome = catalog.search_by_identifier(&identifier);
            render_identifier_match(out, &identifier, &outcome, config.output_format)?;
            Ok(RunSummary::IdentifierSearch {
                found: matches!(outcome, IdentifierMatch::Unique(_)),
                duplicate: matches!(outcome, IdentifierMatch::Duplicate { .. }),
            })
        },
        Operation::TitleSearch(needle) => {
            let found = catalog.search_by_title(&needle);
            render_records(out, &found, config.output_format)?;
            Ok(RunSummary::TitleSearch {
                matches: found.len(),
            })
        },
        Operation::Insert(entry) => {
            let record = parse_record(&entry)?;
            let sorted = catalog.insert(record.clone());
            file.persist(sorted)?;
            render_records(out, &[&record], config.output_format)?;
            Ok(RunSummary::Inserted {
                records: catalog.len(),
            })
        },
    }
}
