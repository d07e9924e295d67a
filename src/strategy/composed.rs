//! Composed reference strategy
//!
//! Produces the `"TxnID - Operator - Name"` template, hard-truncated to
//! the 25-character display width.

use crate::core::allocator::build_reference;
use crate::strategy::ReferenceStrategy;
use crate::types::{DisplayReference, TransactionId};

/// Reference strategy composing the id, operator, and customer name
pub struct ComposedReference;

impl ReferenceStrategy for ComposedReference {
    fn display_reference(
        &self,
        txn_id: &TransactionId,
        operator: &str,
        customer: &str,
    ) -> DisplayReference {
        build_reference(txn_id, operator, customer)
    }
}
