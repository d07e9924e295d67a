//! Bounded-text value types
//!
//! Several wire fields carry free text into a fixed-width slot: the
//! merchant name, the bill reference, and the composed display reference
//! are all capped at 25 characters. The cap is a deliberate lossy
//! truncation matching the field's bounded width, not an error, so the
//! policy lives in the constructor rather than in scattered length checks.

use std::fmt;

/// Free text hard-truncated to at most `MAX` characters
///
/// The constructor clips by character count with no ellipsis. Once
/// constructed, the value is immutable and always within bounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClippedText<const MAX: usize>(String);

impl<const MAX: usize> ClippedText<MAX> {
    /// Create a bounded value, truncating the input to `MAX` characters
    ///
    /// # Arguments
    ///
    /// * `raw` - The unbounded input text
    ///
    /// # Returns
    ///
    /// A `ClippedText` holding at most `MAX` characters of `raw`
    pub fn new(raw: &str) -> Self {
        ClippedText(raw.chars().take(MAX).collect())
    }

    /// View the bounded text as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Character count of the bounded text (always <= `MAX`)
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Whether the bounded text is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const MAX: usize> fmt::Display for ClippedText<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<const MAX: usize> AsRef<str> for ClippedText<MAX> {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Merchant display name as carried in wire field 59
pub type MerchantName = ClippedText<25>;

/// Reconciliation reference carried in the additional-data block
pub type BillReference = ClippedText<25>;

/// Human-facing sale reference shown alongside the QR code
pub type DisplayReference = ClippedText<25>;
