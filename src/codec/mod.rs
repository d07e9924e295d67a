//! Wire format module
//!
//! Everything that touches the payload text stream lives here:
//! - `tlv` - tag-length-value field encoding
//! - `crc` - CRC16/CCITT-FALSE checksum over the payload text
//! - `merchant_info` - the nested PayNow proxy block (tag 26)
//! - `payload` - top-level field ordering and final assembly
//!
//! All components are pure and stateless, safe to invoke from any number
//! of concurrent callers without coordination.

pub mod crc;
pub mod merchant_info;
pub mod payload;
pub mod tlv;

pub use crc::checksum;
pub use merchant_info::PAYNOW_GUID;
pub use payload::{assemble, PayNowPayload, PayloadRequest};
pub use tlv::encode_field;
