//! Book identifier validation.
//!
//! Identifiers are fixed-width 13-digit numeric codes shaped like an ISBN-13.
//! Only the shape is checked; the ISBN check digit is not.

/// Number of characters in a valid identifier.
pub const IDENTIFIER_LEN: usize = 13;

/// Return `true` if `token` is exactly 13 characters, all ASCII decimal digits.
///
/// The same predicate decides whether an operation token is an identifier
/// lookup, so it must not trim or normalize its input.
///
/// # Examples
///
/// ```
/// use booktrack::is_identifier;
///
/// assert!(is_identifier("9780441013593"));
/// assert!(!is_identifier("978-0441013593"));
/// assert!(!is_identifier(" 9780441013593"));
/// ```
#[must_use]
pub fn is_identifier(token: &str) -> bool {
    // ASCII digits are single bytes, so the byte length is the char count here.
    token.len() == IDENTIFIER_LEN && token.bytes().all(|b| b.is_ascii_digit())
}
