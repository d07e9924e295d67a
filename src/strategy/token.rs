//! Random-token reference strategy
//!
//! Issues an opaque alphanumeric token instead of composing operator and
//! customer details into the reference. The transaction id still advances
//! normally; only the reference text differs.

use crate::strategy::ReferenceStrategy;
use crate::types::{DisplayReference, TransactionId};
use rand::distributions::Alphanumeric;
use rand::Rng;

/// Default token length; well inside the 25-character display width
const DEFAULT_TOKEN_LEN: usize = 10;

/// Reference strategy issuing a random alphanumeric token
pub struct TokenReference {
    /// Number of characters in each issued token
    token_len: usize,
}

impl TokenReference {
    /// Create a strategy issuing tokens of the given length
    pub fn new(token_len: usize) -> Self {
        TokenReference { token_len }
    }
}

impl Default for TokenReference {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_LEN)
    }
}

impl ReferenceStrategy for TokenReference {
    fn display_reference(
        &self,
        _txn_id: &TransactionId,
        _operator: &str,
        _customer: &str,
    ) -> DisplayReference {
        let token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(self.token_len)
            .map(char::from)
            .collect();
        DisplayReference::new(&token)
    }
}
