//! Merchant configuration and account types
//!
//! This module defines the configuration surface supplied by the outer
//! sale workflow (proxy mode and value, display name and city, amount
//! editability, optional expiry), the normalized merchant-account data
//! carried inside the payload, and the surcharge policy applied to base
//! amounts before payload construction.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// PayNow proxy kinds addressable by a payment QR
///
/// PayNow routes transfers either to a mobile number or to a business
/// registration number (UEN) instead of a bank account number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyType {
    /// Singapore mobile number proxy
    Mobile,
    /// Unique Entity Number (business registration) proxy
    Uen,
}

impl ProxyType {
    /// Wire code carried in merchant-account-info subfield 01
    pub fn code(&self) -> &'static str {
        match self {
            ProxyType::Mobile => "0",
            ProxyType::Uen => "2",
        }
    }
}

/// Merchant configuration supplied by the outer sale workflow
///
/// The engine treats this as an opaque configuration surface: the raw
/// proxy value is normalized during payload construction, and the display
/// fields are clipped to their wire widths at the same point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MerchantConfig {
    /// Which PayNow proxy kind the QR addresses
    pub proxy_type: ProxyType,

    /// Raw proxy value as configured (mobile number in any accepted
    /// shape, or a UEN string)
    pub proxy_value: String,

    /// Merchant display name (clipped to 25 characters on the wire)
    pub merchant_name: String,

    /// Merchant city carried in wire field 60
    pub merchant_city: String,

    /// Whether the payer may edit the amount in their banking app
    #[serde(default)]
    pub amount_editable: bool,

    /// Optional QR expiry timestamp, passed through verbatim as
    /// merchant-account-info subfield 04
    #[serde(default)]
    pub expiry: Option<String>,
}

/// Normalized merchant account info for the tag-26 block
///
/// Produced from a [`MerchantConfig`] once the proxy value has been
/// normalized and validated; a pure function of its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerchantAccountInfo {
    /// The proxy kind addressed by this QR
    pub proxy_type: ProxyType,

    /// Normalized proxy value (8-digit local mobile number, or the UEN
    /// as configured)
    pub proxy_value: String,

    /// Whether the payer may edit the amount
    pub editable: bool,

    /// Optional expiry timestamp subfield
    pub expiry: Option<String>,
}

/// Surcharge applied to the base amount before payload construction
///
/// Deployments vary between no surcharge and a flat percentage; this is a
/// configuration point of one engine, not a structural branch. The result
/// is rounded to 2 decimal places (midpoint away from zero) to match the
/// wire amount format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurchargePolicy {
    /// Flat percentage added to the base amount (0 means no surcharge)
    pub percent: Decimal,
}

impl SurchargePolicy {
    /// Policy that passes the base amount through unchanged
    pub fn none() -> Self {
        SurchargePolicy {
            percent: Decimal::ZERO,
        }
    }

    /// Policy that adds a flat percentage to the base amount
    pub fn flat_percent(percent: Decimal) -> Self {
        SurchargePolicy { percent }
    }

    /// Apply the surcharge to a base amount
    ///
    /// # Arguments
    ///
    /// * `base` - The base sale amount
    ///
    /// # Returns
    ///
    /// `base * (1 + percent/100)`, rounded to 2 decimal places
    pub fn apply(&self, base: Decimal) -> Decimal {
        let factor = Decimal::ONE + self.percent / Decimal::ONE_HUNDRED;
        (base * factor).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl Default for SurchargePolicy {
    fn default() -> Self {
        Self::none()
    }
}
