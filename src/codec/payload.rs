//! Payload assembly
//!
//! Orders and concatenates all top-level fields of a PayNow payload,
//! computes the trailing checksum, and returns the final wire string.
//! The field order is fixed and not reorderable; the checksum input
//! includes the checksum field's own tag and length but not its value,
//! per EMVCo convention.
//!
//! Construction is all-or-nothing: any validation failure returns an
//! error and no partial payload.

use crate::codec::crc::checksum;
use crate::codec::tlv::encode_field;
use crate::types::{BillReference, MerchantAccountInfo, MerchantConfig, MerchantName, PayNowError};
use rust_decimal::Decimal;
use tracing::trace;

const TAG_PAYLOAD_FORMAT: &str = "00";
const TAG_POINT_OF_INITIATION: &str = "01";
const TAG_CURRENCY: &str = "53";
const TAG_AMOUNT: &str = "54";
const TAG_COUNTRY: &str = "58";
const TAG_MERCHANT_NAME: &str = "59";
const TAG_MERCHANT_CITY: &str = "60";
const TAG_ADDITIONAL_DATA: &str = "62";
const TAG_CHECKSUM: &str = "63";

const SUB_TAG_BILL_REFERENCE: &str = "01";

const PAYLOAD_FORMAT_EMV: &str = "01";
/// Dynamic point-of-initiation: every payload embeds an amount, so each
/// code represents a single transaction.
const POINT_OF_INITIATION_DYNAMIC: &str = "12";
/// ISO 4217 numeric code for the Singapore dollar
const CURRENCY_SGD: &str = "702";
const COUNTRY_SG: &str = "SG";
/// Length prefix of the checksum field, part of the checksum input
const CHECKSUM_LENGTH: &str = "04";

/// Assembled PayNow payload wire string
///
/// Immutable once built; a pure function of its inputs. The string is
/// handed verbatim to an external 2D-barcode encoder and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayNowPayload(String);

impl PayNowPayload {
    /// View the payload as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the payload, returning the wire string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for PayNowPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Inputs to one payload assembly
#[derive(Debug, Clone)]
pub struct PayloadRequest<'a> {
    /// Final transaction amount (surcharge already applied), must be > 0
    pub amount: Decimal,

    /// Free-text reconciliation reference (clipped to 25 characters)
    pub bill_reference: &'a str,

    /// Merchant configuration passed through to the account-info builder
    pub merchant: &'a MerchantConfig,
}

/// Assemble a complete PayNow payload
///
/// Validates the amount, builds the merchant-account-info block, clips
/// the bounded display fields, concatenates all fields in wire order, and
/// appends the checksum field.
///
/// # Arguments
///
/// * `request` - The amount, bill reference, and merchant configuration
///
/// # Returns
///
/// * `Ok(PayNowPayload)` - The complete wire string
/// * `Err(PayNowError)` - If any input fails validation
///
/// # Errors
///
/// Returns an error if:
/// - The amount is zero or negative (`InvalidAmount`)
/// - The proxy value cannot be normalized (`InvalidProxyValue`,
///   `MissingConfiguration`)
/// - An unbounded field exceeds the TLV length limit (`FieldTooLong`)
pub fn assemble(request: &PayloadRequest<'_>) -> Result<PayNowPayload, PayNowError> {
    if request.amount <= Decimal::ZERO {
        return Err(PayNowError::invalid_amount(request.amount));
    }

    let account_info = MerchantAccountInfo::from_config(request.merchant)?;
    let merchant_name = MerchantName::new(&request.merchant.merchant_name);
    let bill_reference = BillReference::new(request.bill_reference);

    let mut body = String::new();
    body.push_str(&encode_field(TAG_PAYLOAD_FORMAT, PAYLOAD_FORMAT_EMV)?);
    body.push_str(&encode_field(
        TAG_POINT_OF_INITIATION,
        POINT_OF_INITIATION_DYNAMIC,
    )?);
    body.push_str(&account_info.encode()?);
    body.push_str(&encode_field(TAG_CURRENCY, CURRENCY_SGD)?);
    body.push_str(&encode_field(TAG_AMOUNT, &format_amount(request.amount))?);
    body.push_str(&encode_field(TAG_COUNTRY, COUNTRY_SG)?);
    body.push_str(&encode_field(TAG_MERCHANT_NAME, merchant_name.as_str())?);
    body.push_str(&encode_field(
        TAG_MERCHANT_CITY,
        &request.merchant.merchant_city,
    )?);

    let additional_data = encode_field(SUB_TAG_BILL_REFERENCE, bill_reference.as_str())?;
    body.push_str(&encode_field(TAG_ADDITIONAL_DATA, &additional_data)?);

    // The checksum covers the body plus the checksum field's tag and length.
    body.push_str(TAG_CHECKSUM);
    body.push_str(CHECKSUM_LENGTH);
    let crc = checksum(&body);
    body.push_str(&crc);

    trace!(len = body.len(), crc = %crc, "assembled payload");

    Ok(PayNowPayload(body))
}

/// Format an amount with exactly 2 decimal digits for wire field 54
fn format_amount(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProxyType;
    use rstest::rstest;

    fn merchant() -> MerchantConfig {
        MerchantConfig {
            proxy_type: ProxyType::Mobile,
            proxy_value: "91234567".to_string(),
            merchant_name: "Kopi Corner".to_string(),
            merchant_city: "Singapore".to_string(),
            amount_editable: false,
            expiry: None,
        }
    }

    fn request<'a>(amount: Decimal, config: &'a MerchantConfig) -> PayloadRequest<'a> {
        PayloadRequest {
            amount,
            bill_reference: "L001 - alice - Table 5",
            merchant: config,
        }
    }

    #[rstest]
    #[case::zero(Decimal::ZERO)]
    #[case::negative(Decimal::new(-1050, 2))]
    fn test_non_positive_amount_rejected(#[case] amount: Decimal) {
        let config = merchant();
        let result = assemble(&request(amount, &config));
        assert!(matches!(
            result.unwrap_err(),
            PayNowError::InvalidAmount { .. }
        ));
    }

    #[rstest]
    #[case::two_places(Decimal::new(10300, 2), "103.00")]
    #[case::whole(Decimal::new(50, 0), "50.00")]
    #[case::one_place(Decimal::new(995, 1), "99.50")]
    #[case::cents(Decimal::new(5, 2), "0.05")]
    fn test_amount_wire_format(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_amount(amount), expected);
    }

    #[test]
    fn test_field_order_is_fixed() {
        let config = merchant();
        let payload = assemble(&request(Decimal::new(10300, 2), &config)).unwrap();
        let wire = payload.as_str();

        assert!(wire.starts_with("000201"));
        assert!(wire[6..].starts_with("010212"));

        let positions: Vec<usize> = ["26", "5303702", "5406103.00", "5802SG", "5911", "6009", "62"]
            .iter()
            .map(|needle| wire.find(needle).expect("field missing"))
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_merchant_name_clipped_to_25_characters() {
        let mut config = merchant();
        config.merchant_name = "An Unreasonably Long Merchant Trading Name".to_string();
        let payload = assemble(&request(Decimal::new(1000, 2), &config)).unwrap();

        // field 59 carries exactly the first 25 characters
        assert!(payload.as_str().contains("5925An Unreasonably Long Merc"));
    }

    #[test]
    fn test_bill_reference_clipped_to_25_characters() {
        let config = merchant();
        let long_reference = "W042 - bartholomew - Private Dining Room 12";
        let payload = assemble(&PayloadRequest {
            amount: Decimal::new(1000, 2),
            bill_reference: long_reference,
            merchant: &config,
        })
        .unwrap();

        let clipped: String = long_reference.chars().take(25).collect();
        assert!(payload.as_str().contains(&clipped));
        assert!(!payload.as_str().contains(long_reference));
    }

    #[test]
    fn test_determinism() {
        let config = merchant();
        let first = assemble(&request(Decimal::new(4250, 2), &config)).unwrap();
        let second = assemble(&request(Decimal::new(4250, 2), &config)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_checksum_self_consistency() {
        let config = merchant();
        let payload = assemble(&request(Decimal::new(10300, 2), &config)).unwrap();
        let wire = payload.as_str();

        let (remainder, crc) = wire.split_at(wire.len() - 4);
        assert!(remainder.ends_with("6304"));
        assert_eq!(checksum(remainder), crc);
    }

    #[test]
    fn test_payload_ends_with_checksum_field() {
        let config = merchant();
        let payload = assemble(&request(Decimal::new(10300, 2), &config)).unwrap();
        let wire = payload.as_str();

        let tail = &wire[wire.len() - 8..];
        assert!(tail.starts_with("6304"));
        let crc = &tail[4..];
        assert!(crc.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(!crc.chars().any(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_invalid_proxy_aborts_assembly() {
        let mut config = merchant();
        config.proxy_value = "12345678".to_string();
        let result = assemble(&request(Decimal::new(1000, 2), &config));
        assert!(matches!(
            result.unwrap_err(),
            PayNowError::InvalidProxyValue { .. }
        ));
    }

    #[test]
    fn test_oversized_city_is_a_field_error() {
        let mut config = merchant();
        config.merchant_city = "c".repeat(120);
        let result = assemble(&request(Decimal::new(1000, 2), &config));
        assert!(matches!(
            result.unwrap_err(),
            PayNowError::FieldTooLong { .. }
        ));
    }
}
