//! Sale engine
//!
//! This module provides the `SaleEngine` that implements the consumer
//! contract: the caller supplies a base amount, operator, customer or
//! table name, and company; the engine applies the surcharge policy,
//! mints a transaction id, produces the display reference through the
//! configured strategy, and assembles the payload.
//!
//! The caller owns persistence, display, and QR image rendering; the
//! engine returns only the wire string and the reference pair.

use crate::codec::payload::{assemble, PayNowPayload, PayloadRequest};
use crate::core::allocator::ReferenceAllocator;
use crate::strategy::ReferenceStrategy;
use crate::types::{
    CompanyKey, DisplayReference, MerchantConfig, PayNowError, SurchargePolicy, TransactionId,
};
use rust_decimal::Decimal;
use tracing::debug;

/// Result of one completed sale
///
/// Carries the assembled payload (to be fed unmodified into a 2D-barcode
/// encoder) together with the minted transaction id and the display
/// reference embedded in the payload's additional-data block.
#[derive(Debug, Clone)]
pub struct SaleTicket {
    /// The assembled payload wire string
    pub payload: PayNowPayload,

    /// The minted transaction identifier
    pub transaction_id: TransactionId,

    /// The reference shown to staff and embedded as the bill reference
    pub display_reference: DisplayReference,
}

/// Orchestrates payload construction for sales
///
/// Owns the merchant configuration, surcharge policy, reference strategy,
/// and the process-wide reference allocator. Stateless apart from the
/// allocator's counters, so one engine serves any number of sales.
pub struct SaleEngine {
    merchant: MerchantConfig,
    surcharge: SurchargePolicy,
    reference_strategy: Box<dyn ReferenceStrategy>,
    allocator: ReferenceAllocator,
}

impl SaleEngine {
    /// Create a sale engine
    ///
    /// # Arguments
    ///
    /// * `merchant` - Merchant configuration (proxy, display fields)
    /// * `surcharge` - Surcharge applied to base amounts
    /// * `reference_strategy` - How bill/display references are produced
    pub fn new(
        merchant: MerchantConfig,
        surcharge: SurchargePolicy,
        reference_strategy: Box<dyn ReferenceStrategy>,
    ) -> Self {
        SaleEngine {
            merchant,
            surcharge,
            reference_strategy,
            allocator: ReferenceAllocator::new(),
        }
    }

    /// Create a payment QR payload for one sale
    ///
    /// Applies the surcharge to the base amount, mints a transaction id
    /// for the company, produces the display reference, and assembles the
    /// payload with that reference as the bill reference.
    ///
    /// # Arguments
    ///
    /// * `base_amount` - The sale amount before surcharge
    /// * `operator` - The operator handling the sale
    /// * `customer` - The customer or table name
    /// * `company` - The company whose counter sequence to advance
    ///
    /// # Returns
    ///
    /// * `Ok(SaleTicket)` - Payload, transaction id, and reference
    /// * `Err(PayNowError)` - If validation fails; no partial payload is
    ///   produced
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The surcharged amount is zero or negative (`InvalidAmount`)
    /// - The configured proxy cannot be normalized (`InvalidProxyValue`,
    ///   `MissingConfiguration`)
    /// - An unbounded field exceeds the TLV limit (`FieldTooLong`)
    pub fn create_sale(
        &self,
        base_amount: Decimal,
        operator: &str,
        customer: &str,
        company: &CompanyKey,
    ) -> Result<SaleTicket, PayNowError> {
        let amount = self.surcharge.apply(base_amount);
        let transaction_id = self.allocator.next_id(company);
        let display_reference =
            self.reference_strategy
                .display_reference(&transaction_id, operator, customer);

        let payload = assemble(&PayloadRequest {
            amount,
            bill_reference: display_reference.as_str(),
            merchant: &self.merchant,
        })?;

        debug!(
            transaction_id = %transaction_id,
            amount = %amount,
            reference = %display_reference,
            "sale payload created"
        );

        Ok(SaleTicket {
            payload,
            transaction_id,
            display_reference,
        })
    }
}
