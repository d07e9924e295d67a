//! Reference-template strategy module
//!
//! Observed deployments differ only in how the bill/display reference is
//! produced: one composes `"TxnID - Operator - Name"`, another issues a
//! random token. This module models that as one engine parameterized by a
//! reference-template strategy selected at runtime, rather than separate
//! implementations.

use crate::cli::ReferenceStyle;
use crate::types::{DisplayReference, TransactionId};

pub mod composed;
pub mod token;

pub use composed::ComposedReference;
pub use token::TokenReference;

/// Strategy producing the sale's bill/display reference
///
/// The returned reference is used both as the payload's bill-reference
/// subfield and as the human-facing reference handed back to the caller,
/// so implementations return the bounded type directly.
pub trait ReferenceStrategy: Send + Sync {
    /// Produce the reference for one sale
    ///
    /// # Arguments
    ///
    /// * `txn_id` - The minted transaction identifier
    /// * `operator` - The operator handling the sale
    /// * `customer` - The customer or table name
    fn display_reference(
        &self,
        txn_id: &TransactionId,
        operator: &str,
        customer: &str,
    ) -> DisplayReference;
}

/// Create a reference strategy for the selected style
///
/// # Arguments
///
/// * `style` - The reference style selected via configuration
///
/// # Returns
///
/// A boxed trait object implementing the ReferenceStrategy trait
pub fn create_reference_strategy(style: ReferenceStyle) -> Box<dyn ReferenceStrategy> {
    match style {
        ReferenceStyle::Composed => Box::new(ComposedReference),
        ReferenceStyle::Token => Box::new(TokenReference::default()),
    }
}
