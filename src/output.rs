//! Console rendering of search and insertion results.
//!
//! Matching records are rendered in one of three formats:
//!
//! - **Text**: per record, a column header line followed by
//!   `title || author || isbn || copies`
//! - **JSON**: a pretty-printed array of record objects
//! - **CSV**: a `title,author,isbn,copies` header, then one row per record
//!
//! Lookup messages ("no book found", duplicate identifiers) are plain text in
//! every format.

use std::fmt;
use std::io::Write;

use crate::catalog::IdentifierMatch;
use crate::error::Result;
use crate::record::BookRecord;

/// Header line of the text format.
pub const TEXT_HEADER: &str = "Title   ||   Author   ||   ISBN   ||   Copies";

/// Separator between fields of a text-format row.
pub const TEXT_SEPARATOR: &str = " || ";

/// Output format for matching records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Column header and `||`-separated row for each record
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
    /// CSV with a header row
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Message printed when an identifier matches no single record.
#[must_use]
pub fn not_found_message(identifier: &str) -> String {
    format!("No book found with ISBN: {identifier}")
}

/// Message printed when an identifier is shared by several records.
#[must_use]
pub fn duplicate_message(identifier: &str) -> String {
    format!("Multiple books found with ISBN: {identifier}")
}

/// Format one record as a text-format row.
#[must_use]
pub fn text_row(record: &BookRecord) -> String {
    [
        record.title.as_str(),
        record.author.as_str(),
        record.identifier.as_str(),
        &record.copies.to_string(),
    ]
    .join(TEXT_SEPARATOR)
}

/// Render matching records.
///
/// Text and CSV print nothing for an empty slice. JSON prints `[]`.
///
/// # Errors
///
/// Returns an error if writing or serializing fails.
pub fn render_records<W: Write>(
    out: &mut W,
    records: &[&BookRecord],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for record in records {
                writeln!(out, "{TEXT_HEADER}")?;
                writeln!(out, "{}", text_row(record))?;
            }
        },
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        },
        OutputFormat::Csv => {
            if records.is_empty() {
                return Ok(());
            }
            let mut writer = csv::Writer::from_writer(&mut *out);
            for record in records {
                writer.serialize(record)?;
            }
            writer.flush()?;
        },
    }
    Ok(())
}

/// Render the outcome of an identifier lookup.
///
/// A duplicated identifier prints the duplicate message followed by the
/// not-found message; no record is shown.
///
/// # Errors
///
/// Returns an error if writing or serializing fails.
pub fn render_identifier_match<W: Write>(
    out: &mut W,
    identifier: &str,
    outcome: &IdentifierMatch<'_>,
    format: OutputFormat,
) -> Result<()> {
    match outcome {
        IdentifierMatch::Unique(record) => render_records(out, &[*record], format),
        IdentifierMatch::Duplicate { .. } => {
            writeln!(out, "{}", duplicate_message(identifier))?;
            writeln!(out, "{}", not_found_message(identifier))?;
            Ok(())
        },
        IdentifierMatch::NotFound => {
            writeln!(out, "{}", not_found_message(identifier))?;
            Ok(())
        },
    }
}
