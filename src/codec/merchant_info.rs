//! Merchant account info block
//!
//! Builds the nested PayNow proxy block carried under tag 26 and owns
//! proxy normalization. Mobile numbers arrive in whatever shape the
//! operator configured them (`91234567`, `6591234567`, `+65 9123 4567`,
//! ...) and are reduced to the 8-digit local number; UENs pass through
//! verbatim but must be present.
//!
//! Subfield order is fixed: GUID, proxy-type code, proxy value,
//! editability flag, then the optional expiry.

use crate::codec::tlv::encode_field;
use crate::types::{MerchantAccountInfo, MerchantConfig, PayNowError, ProxyType};

/// Globally unique identifier naming the PayNow scheme
pub const PAYNOW_GUID: &str = "SG.PAYNOW";

const SUB_TAG_GUID: &str = "00";
const SUB_TAG_PROXY_TYPE: &str = "01";
const SUB_TAG_PROXY_VALUE: &str = "02";
const SUB_TAG_EDITABLE: &str = "03";
const SUB_TAG_EXPIRY: &str = "04";

/// Tag of the merchant-account-info block in the top-level payload
pub const TAG_MERCHANT_ACCOUNT_INFO: &str = "26";

impl MerchantAccountInfo {
    /// Normalize a merchant configuration into account info
    ///
    /// # Arguments
    ///
    /// * `config` - The merchant configuration supplied by the caller
    ///
    /// # Returns
    ///
    /// * `Ok(MerchantAccountInfo)` - With the proxy value normalized
    /// * `Err(PayNowError)` - If the proxy value cannot address PayNow
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A mobile proxy does not match any accepted shape, or the local
    ///   number does not start with 8 or 9 (`InvalidProxyValue`)
    /// - A UEN proxy is configured with an empty value
    ///   (`MissingConfiguration`)
    pub fn from_config(config: &MerchantConfig) -> Result<Self, PayNowError> {
        let proxy_value = match config.proxy_type {
            ProxyType::Mobile => normalize_mobile(&config.proxy_value)?,
            ProxyType::Uen => {
                if config.proxy_value.is_empty() {
                    return Err(PayNowError::missing_configuration("uen"));
                }
                config.proxy_value.clone()
            }
        };

        Ok(MerchantAccountInfo {
            proxy_type: config.proxy_type,
            proxy_value,
            editable: config.amount_editable,
            expiry: config.expiry.clone(),
        })
    }

    /// Encode this account info as the complete tag-26 field
    ///
    /// Concatenates the subfields in fixed order and wraps the group as a
    /// single TLV field.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The encoded `26..` field
    /// * `Err(PayNowError)` - If the group exceeds the TLV length limit
    pub fn encode(&self) -> Result<String, PayNowError> {
        let mut group = String::new();
        group.push_str(&encode_field(SUB_TAG_GUID, PAYNOW_GUID)?);
        group.push_str(&encode_field(SUB_TAG_PROXY_TYPE, self.proxy_type.code())?);
        group.push_str(&encode_field(SUB_TAG_PROXY_VALUE, &self.proxy_value)?);
        group.push_str(&encode_field(
            SUB_TAG_EDITABLE,
            if self.editable { "1" } else { "0" },
        )?);
        if let Some(expiry) = &self.expiry {
            group.push_str(&encode_field(SUB_TAG_EXPIRY, expiry)?);
        }

        encode_field(TAG_MERCHANT_ACCOUNT_INFO, &group)
    }
}

/// Reduce a raw mobile proxy to the 8-digit local number
///
/// Strips all non-digit characters, then recognizes exactly four shapes:
/// already 8 digits; 10 digits with leading `65`; 11 digits with leading
/// `065`; 12 digits with leading `0065`. The resulting local number must
/// start with 8 or 9.
fn normalize_mobile(raw: &str) -> Result<String, PayNowError> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    let local = match digits.len() {
        8 => digits.as_str(),
        10 if digits.starts_with("65") => &digits[2..],
        11 if digits.starts_with("065") => &digits[3..],
        12 if digits.starts_with("0065") => &digits[4..],
        _ => return Err(PayNowError::invalid_proxy_value("mobile", raw)),
    };

    if !matches!(local.as_bytes().first(), Some(b'8' | b'9')) {
        return Err(PayNowError::invalid_proxy_value("mobile", raw));
    }

    Ok(local.to_string())
}
