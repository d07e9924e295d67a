//! Transaction reference types
//!
//! This module defines the company key used to partition transaction
//! counters and the minted transaction identifier. Identifiers are unique
//! within a counter window (see [`crate::core::allocator`]) and are
//! formatted as a single company prefix letter followed by a zero-padded
//! 3-digit counter, e.g. `L042`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Company under which transaction counters are partitioned
///
/// Each company advances its own counter sequence, but all companies share
/// one reset window. The prefix mapping is fixed; unrecognized companies
/// map to `X` rather than failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyKey(String);

impl CompanyKey {
    /// Create a company key from its configured name
    pub fn new(name: impl Into<String>) -> Self {
        CompanyKey(name.into())
    }

    /// The configured company name
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Fixed transaction-id prefix for this company
    pub fn prefix(&self) -> char {
        match self.0.as_str() {
            "Lunar" => 'L',
            "Wave" => 'W',
            "Ion" => 'I',
            "101" => '1',
            _ => 'X',
        }
    }
}

impl fmt::Display for CompanyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Minted transaction identifier: company prefix plus 3-digit counter
///
/// Identifiers are only produced by the reference allocator, so a value of
/// this type is always well-formed (`L001`..`L999` and so on).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransactionId(String);

impl TransactionId {
    /// Format an identifier from a company prefix and counter value
    ///
    /// The counter is always in 1..=999; zero never occurs because the
    /// allocator wraps with `(value % 999) + 1`.
    pub(crate) fn new(prefix: char, counter: u16) -> Self {
        TransactionId(format!("{}{:03}", prefix, counter))
    }

    /// View the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
