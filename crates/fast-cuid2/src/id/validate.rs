use crate::{CUID2_LENGTH, ParseError, is_alphabet_byte, is_digit_byte};

/// Checks that `s` is a well-formed identifier, reporting the first check that
/// fails.
///
/// The checks run in order:
/// 1. the input is exactly [`CUID2_LENGTH`] bytes long
/// 2. every byte is in the [`crate::ALPHABET`]
/// 3. the first character is not a digit
///
/// There is no checksum or timestamp range to verify; validation is purely
/// structural.
///
/// # Errors
/// - [`ParseError::InvalidLength`], [`ParseError::InvalidByte`] or
///   [`ParseError::LeadingDigit`], matching the failed check.
pub fn validate(s: &str) -> Result<(), ParseError> {
    let bytes = s.as_bytes();
    if bytes.len() != CUID2_LENGTH {
        return Err(ParseError::InvalidLength { len: bytes.len() });
    }
    if let Some((index, &byte)) = bytes
        .iter()
        .enumerate()
        .find(|&(_, &b)| !is_alphabet_byte(b))
    {
        return Err(ParseError::InvalidByte { byte, index });
    }
    if is_digit_byte(bytes[0]) {
        return Err(ParseError::LeadingDigit { byte: bytes[0] });
    }
    Ok(())
}

/// Returns `true` if `s` is a well-formed identifier.
///
/// Never panics; anything malformed, including empty or non-ASCII input, is
/// simply `false`.
///
/// ```
/// use fast_cuid2::is_valid;
///
/// assert!(is_valid("a0123456789bcdefghjkmnpq"));
/// assert!(!is_valid("0123456789abcdefghjkmnpq"));
/// assert!(!is_valid(""));
/// ```
pub fn is_valid(s: &str) -> bool {
    validate(s).is_ok()
}
