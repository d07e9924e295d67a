//! PayNow QR Engine Library
//! # Overview
//!
//! This library builds PayNow/SGQR payment QR payloads and allocates the
//! transaction references embedded in them.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (errors, bounded text, merchant config)
//! - [`cli`] - CLI arguments parsing
//! - [`codec`] - Wire format:
//!   - [`codec::tlv`] - Tag-length-value field encoding
//!   - [`codec::crc`] - CRC16/CCITT-FALSE checksum
//!   - [`codec::merchant_info`] - Nested PayNow proxy block (tag 26)
//!   - [`codec::payload`] - Top-level field ordering and assembly
//! - [`core`] - Business logic components:
//!   - [`core::allocator`] - Noon-windowed transaction reference allocation
//!   - [`core::sale`] - Sale orchestration (the consumer contract)
//! - [`strategy`] - Pluggable bill/display reference templates
//!
//! # Wire Format
//!
//! A payload is a flat text stream of tag-length-value fields ending in a
//! CRC16/CCITT-FALSE checksum field. The merchant-account-info block
//! (tag 26) nests the PayNow proxy subfields; the additional-data block
//! (tag 62) nests the bill reference. The finished string is handed
//! verbatim to an external 2D-barcode encoder.
//!
//! # Transaction References
//!
//! Identifiers are per-company sequences `1..999` inside a window running
//! from local noon to the next local noon; crossing the boundary resets
//! every company's counter at once. The formatted id is a fixed company
//! prefix letter plus a zero-padded 3-digit counter, e.g. `L042`.

// Module declarations
pub mod cli;
pub mod codec;
pub mod core;
pub mod strategy;
pub mod types;

pub use codec::{assemble, checksum, encode_field, PayNowPayload, PayloadRequest};
pub use core::{build_reference, ReferenceAllocator, SaleEngine, SaleTicket};
pub use strategy::{create_reference_strategy, ReferenceStrategy};
pub use types::{
    BillReference, CompanyKey, DisplayReference, MerchantAccountInfo, MerchantConfig,
    MerchantName, PayNowError, ProxyType, SurchargePolicy, TransactionId,
};
