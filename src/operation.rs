//! Classification of the operation token.
//!
//! The token is classified once, by shape, and then acted on:
//!
//! 1. a 13-digit token is an identifier lookup;
//! 2. otherwise a token containing `:` is an insertion string;
//! 3. anything else is a title search.
//!
//! A title search term containing `:` is therefore treated as an insertion
//! and rejected by the codec if it is not a valid record.

use crate::codec::FIELD_DELIMITER;
use crate::identifier::is_identifier;

/// What a single invocation should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Look up a record by its 13-digit identifier.
    IdentifierSearch(String),
    /// Parse the string as a record, insert it, and persist the catalog.
    Insert(String),
    /// List records whose title contains the string.
    TitleSearch(String),
}

impl Operation {
    /// Classify an operation token.
    ///
    /// # Examples
    ///
    /// ```
    /// use booktrack::Operation;
    ///
    /// assert!(matches!(Operation::classify("9780441013593"), Operation::IdentifierSearch(_)));
    /// assert!(matches!(Operation::classify("Dune:Herbert:9780441013593:3"), Operation::Insert(_)));
    /// assert!(matches!(Operation::classify("Dune"), Operation::TitleSearch(_)));
    /// ```
    #[must_use]
    pub fn classify(token: &str) -> Self {
        if is_identifier(token) {
            Operation::IdentifierSearch(token.to_string())
        } else if token.contains(FIELD_DELIMITER) {
            Operation::Insert(token.to_string())
        } else {
            Operation::TitleSearch(token.to_string())
        }
    }

    /// Whether the operation writes the catalog back to storage.
    #[must_use]
    pub fn is_mutating(&self) -> bool {
        matches!(self, Operation::Insert(_))
    }
}
