//! The catalog line format.
//!
//! A record is stored as one line of four `:`-delimited fields:
//!
//! ```text
//! title:author:identifier:copies
//! ```
//!
//! There is no escaping, so a title or author containing `:` or a line break
//! is rejected rather than stored.
//!
//! # Examples
//!
//! ```
//! use booktrack::codec::{parse_record, serialize_record};
//!
//! let record = parse_record(" Dune : Frank Herbert : 9780441013593 : 3 ")?;
//! assert_eq!(record.author, "Frank Herbert");
//! assert_eq!(serialize_record(&record), "Dune:Frank Herbert:9780441013593:3");
//! # Ok::<(), booktrack::MalformedRecord>(())
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::MalformedRecord;
use crate::identifier::is_identifier;
use crate::record::BookRecord;

/// Field delimiter of the line format.
pub const FIELD_DELIMITER: char = ':';

/// Number of fields in a serialized record.
pub const FIELD_COUNT: usize = 4;

/// Parse one catalog line (or insertion string) into a validated record.
///
/// # Errors
///
/// Returns a [`MalformedRecord`] when the line does not have exactly four
/// fields, when title or author is blank or holds a line break, when the
/// identifier is not 13 digits, or when the copy count is not a positive
/// integer.
pub fn parse_record(line: &str) -> Result<BookRecord, MalformedRecord> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return Err(MalformedRecord::FieldCount {
            found: fields.len(),
        });
    }
    validate_fields(fields[0], fields[1], fields[2], fields[3])
}

/// Serialize a record to its line form, without a line terminator.
#[must_use]
pub fn serialize_record(record: &BookRecord) -> String {
    format!(
        "{title}{d}{author}{d}{identifier}{d}{copies}",
        title = record.title,
        author = record.author,
        identifier = record.identifier,
        copies = record.copies,
        d = FIELD_DELIMITER,
    )
}

/// Whether a field holds a character the line format cannot represent.
fn has_reserved_character(field: &str) -> bool {
    field.contains(&[FIELD_DELIMITER, '\n', '\r'][..])
}

/// Trim and validate raw field text.
pub(crate) fn validate_fields(
    title: &str,
    author: &str,
    identifier: &str,
    copies: &str,
) -> Result<BookRecord, MalformedRecord> {
    let title = title.trim();
    let author = author.trim();
    let identifier = identifier.trim();
    let copies = copies.trim();

    if title.is_empty() || author.is_empty() {
        return Err(MalformedRecord::EmptyTitleOrAuthor);
    }

    if let Some(field) = [title, author].into_iter().find(|f| has_reserved_character(f)) {
        return Err(MalformedRecord::ReservedCharacter {
            value: field.to_string(),
        });
    }

    if !is_identifier(identifier) {
        return Err(MalformedRecord::InvalidIdentifier {
            value: identifier.to_string(),
        });
    }

    let copies = match copies.parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => {
            return Err(MalformedRecord::InvalidCopies {
                value: copies.to_string(),
            })
        },
    };

    Ok(BookRecord {
        title: title.to_string(),
        author: author.to_string(),
        identifier: identifier.to_string(),
        copies,
    })
}

impl FromStr for BookRecord {
    type Err = MalformedRecord;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_record(s)
    }
}

impl fmt::Display for BookRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize_record(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_valid_line() {
        let record = parse_record("Dune:Herbert:9780441013593:3").expect("valid line");
        assert_eq!(record.title, "Dune");
        assert_eq!(record.author, "Herbert");
        assert_eq!(record.identifier, "9780441013593");
        assert_eq!(record.copies, 3);
    }

    #[test]
    fn test_parse_preserves_internal_whitespace() {
        let record = parse_record("  The  Title  : A  B :9780441013593: 7").expect("valid line");
        assert_eq!(record.title, "The  Title");
        assert_eq!(record.author, "A  B");
        assert_eq!(record.copies, 7);
    }

    #[test]
    fn test_parse_rejects_three_fields() {
        assert_eq!(
            parse_record("Dune:Herbert:9780441013593"),
            Err(MalformedRecord::FieldCount { found: 3 })
        );
    }

    #[test]
    fn test_parse_rejects_five_fields() {
        assert_eq!(
            parse_record("Dune:Messiah:Herbert:9780441013593:3"),
            Err(MalformedRecord::FieldCount { found: 5 })
        );
    }

    #[test]
    fn test_parse_keeps_trailing_empty_field() {
        // Four fields, the last one empty: not silently truncated to three.
        assert_eq!(
            parse_record("Dune:Herbert:9780441013593:"),
            Err(MalformedRecord::InvalidCopies {
                value: String::new()
            })
        );
        assert_eq!(
            parse_record("Dune:Herbert:9780441013593:3:"),
            Err(MalformedRecord::FieldCount { found: 5 })
        );
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(
            parse_record(""),
            Err(MalformedRecord::FieldCount { found: 1 })
        );
    }

    #[test]
    fn test_parse_rejects_empty_title_or_author() {
        assert_eq!(
            parse_record("  :Herbert:9780441013593:3"),
            Err(MalformedRecord::EmptyTitleOrAuthor)
        );
        assert_eq!(
            parse_record("Dune: :9780441013593:3"),
            Err(MalformedRecord::EmptyTitleOrAuthor)
        );
    }

    #[test]
    fn test_parse_rejects_embedded_line_break() {
        assert_eq!(
            parse_record("Du\nne:Herbert:9780441013593:3"),
            Err(MalformedRecord::ReservedCharacter {
                value: "Du\nne".to_string()
            })
        );
        assert!(matches!(
            parse_record("Dune:Her\rbert:9780441013593:3"),
            Err(MalformedRecord::ReservedCharacter { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_short_identifier() {
        let err = parse_record("A:B:12345678901:2").unwrap_err();
        assert_eq!(err.to_string(), "ISBN must be exactly 13 digits.");
    }

    #[test]
    fn test_parse_rejects_bad_copies() {
        for copies in ["0", "-2", "three", "1.5", ""] {
            let line = format!("Dune:Herbert:9780441013593:{copies}");
            assert!(
                matches!(parse_record(&line), Err(MalformedRecord::InvalidCopies { .. })),
                "copies {copies:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_serialize_has_no_padding() {
        let record = parse_record(" Dune : Herbert : 9780441013593 : 3 ").expect("valid line");
        assert_eq!(serialize_record(&record), "Dune:Herbert:9780441013593:3");
        assert_eq!(record.to_string(), "Dune:Herbert:9780441013593:3");
    }

    #[test]
    fn test_from_str() {
        let record: BookRecord = "Dune:Herbert:9780441013593:3".parse().expect("valid line");
        assert_eq!(record.copies, 3);
    }

    fn field_strategy() -> impl Strategy<Value = String> {
        "[A-Za-z0-9][A-Za-z0-9 ,.'!?-]{0,30}[A-Za-z0-9]"
    }

    fn any_field_strategy() -> impl Strategy<Value = String> {
        "[A-Za-z0-9 :\n\r]{1,20}"
    }

    proptest! {
        #[test]
        fn prop_parse_serialize_round_trip(
            title in field_strategy(),
            author in field_strategy(),
            identifier in "[0-9]{13}",
            copies in 1u32..10_000,
        ) {
            let record = BookRecord::try_new(&title, &author, &identifier, copies).unwrap();
            let reparsed = parse_record(&serialize_record(&record)).unwrap();
            prop_assert_eq!(reparsed, record);
        }

        #[test]
        fn prop_accepted_records_serialize_to_one_parseable_line(
            title in any_field_strategy(),
            author in any_field_strategy(),
            identifier in "[0-9]{13}",
            copies in 1u32..10_000,
        ) {
            if let Ok(record) = BookRecord::try_new(&title, &author, &identifier, copies) {
                let line = serialize_record(&record);
                prop_assert!(!line.contains(&['\n', '\r'][..]));
                prop_assert_eq!(parse_record(&line), Ok(record));
            }
        }
    }
}
