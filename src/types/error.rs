//! Error types for the PayNow QR engine
//!
//! This module defines all error types that can occur while building a
//! payment payload. Every variant is a validation failure detected
//! synchronously during construction; none are transient, so none should
//! be retried automatically. A failure guarantees that no partial or
//! corrupt payload is returned.
//!
//! # Error Categories
//!
//! - **Amount Errors**: zero or negative transaction amounts
//! - **Proxy Errors**: mobile numbers or UENs that cannot address PayNow
//! - **Configuration Errors**: required merchant configuration left empty
//! - **Wire Format Errors**: TLV values exceeding the 2-digit length prefix

use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for payload construction
///
/// This enum represents all possible failures while validating inputs and
/// assembling a PayNow payload. Each variant includes relevant context to
/// help the caller translate it into a user-facing message.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PayNowError {
    /// Transaction amount is zero or negative
    ///
    /// Payloads always embed an amount, so a non-positive amount has no
    /// wire representation. The caller should re-prompt for a corrected
    /// amount.
    #[error("Invalid amount {amount}: transaction amount must be greater than zero")]
    InvalidAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Payment-proxy value cannot be normalized
    ///
    /// For mobile proxies this means the digits did not match any accepted
    /// shape, or the local number does not start with 8 or 9.
    #[error("Invalid {proxy_kind} proxy value '{value}'")]
    InvalidProxyValue {
        /// The proxy kind being normalized ("mobile" or "UEN")
        proxy_kind: String,
        /// The raw value that failed normalization
        value: String,
    },

    /// Required merchant configuration is missing or empty
    ///
    /// Raised when the configured proxy mode needs a value that was never
    /// supplied (for example an empty UEN string).
    #[error("Missing configuration: {field}")]
    MissingConfiguration {
        /// The configuration field that was empty
        field: String,
    },

    /// TLV field value exceeds the 2-digit length prefix
    ///
    /// The wire format encodes each value's character count as exactly two
    /// decimal digits, so values are capped at 99 characters. Bounded
    /// inputs are clipped before encoding, which makes this variant a
    /// contract violation rather than an expected input error.
    #[error("Field {tag} value is {length} characters, exceeding the 99 character limit")]
    FieldTooLong {
        /// The TLV tag whose value overflowed
        tag: String,
        /// The offending character count
        length: usize,
    },
}

// Helper functions for creating common errors

impl PayNowError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: Decimal) -> Self {
        PayNowError::InvalidAmount { amount }
    }

    /// Create an InvalidProxyValue error
    pub fn invalid_proxy_value(proxy_kind: &str, value: &str) -> Self {
        PayNowError::InvalidProxyValue {
            proxy_kind: proxy_kind.to_string(),
            value: value.to_string(),
        }
    }

    /// Create a MissingConfiguration error
    pub fn missing_configuration(field: &str) -> Self {
        PayNowError::MissingConfiguration {
            field: field.to_string(),
        }
    }

    /// Create a FieldTooLong error
    pub fn field_too_long(tag: &str, length: usize) -> Self {
        PayNowError::FieldTooLong {
            tag: tag.to_string(),
            length,
        }
    }
}
