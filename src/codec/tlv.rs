//! TLV field encoding
//!
//! The payload wire format is a flat text stream of tag-length-value
//! fields: a 2-character tag, the value's character count as exactly two
//! decimal digits, then the value itself. Nested blocks (merchant account
//! info, additional data) are built by encoding their subfields and
//! wrapping the concatenation as a single value.
//!
//! All functions are pure for easy testing.

use crate::types::PayNowError;

/// Maximum value length representable by the 2-digit length prefix
pub const MAX_VALUE_LEN: usize = 99;

/// Encode one tag-length-value field
///
/// # Arguments
///
/// * `tag` - The 2-character field tag (internal constants)
/// * `value` - The field value, at most 99 characters
///
/// # Returns
///
/// * `Ok(String)` - `tag ++ zero-padded-2-digit-length ++ value`
/// * `Err(PayNowError)` - If the value exceeds 99 characters
///
/// # Errors
///
/// Returns `FieldTooLong` if `value` has more than 99 characters. Bounded
/// inputs are clipped before they reach this function, so the error marks
/// a contract violation by the caller.
pub fn encode_field(tag: &str, value: &str) -> Result<String, PayNowError> {
    debug_assert!(tag.len() == 2, "TLV tags are exactly 2 characters");

    let length = value.chars().count();
    if length > MAX_VALUE_LEN {
        return Err(PayNowError::field_too_long(tag, length));
    }

    Ok(format!("{}{:02}{}", tag, length, value))
}
