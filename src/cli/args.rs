use clap::{ArgGroup, Parser, ValueEnum};
use rust_decimal::Decimal;

use crate::types::{MerchantConfig, ProxyType, SurchargePolicy};

/// Generate a PayNow payment QR payload for one sale
#[derive(Parser, Debug)]
#[command(name = "paynow-qr")]
#[command(about = "Generate a PayNow payment QR payload for one sale", long_about = None)]
#[command(group(ArgGroup::new("proxy").required(true).args(["mobile", "uen"])))]
pub struct CliArgs {
    /// Base sale amount before surcharge
    #[arg(value_name = "AMOUNT", help = "Base sale amount before surcharge")]
    pub amount: Decimal,

    /// Mobile-number PayNow proxy (any accepted shape)
    #[arg(long, value_name = "NUMBER", help = "PayNow mobile number proxy")]
    pub mobile: Option<String>,

    /// UEN PayNow proxy
    #[arg(long, value_name = "UEN", help = "PayNow UEN proxy")]
    pub uen: Option<String>,

    /// Merchant display name (clipped to 25 characters on the wire)
    #[arg(long = "name", value_name = "NAME", help = "Merchant display name")]
    pub merchant_name: String,

    /// Merchant city
    #[arg(
        long = "city",
        value_name = "CITY",
        default_value = "Singapore",
        help = "Merchant city"
    )]
    pub merchant_city: String,

    /// Company whose transaction counter to advance
    #[arg(
        long,
        value_name = "COMPANY",
        help = "Company key for the transaction counter"
    )]
    pub company: String,

    /// Operator handling the sale
    #[arg(long, value_name = "OPERATOR", help = "Operator handling the sale")]
    pub operator: String,

    /// Customer or table name for the reference
    #[arg(
        long,
        value_name = "CUSTOMER",
        help = "Customer or table name for the reference"
    )]
    pub customer: String,

    /// Surcharge percentage applied to the base amount
    #[arg(
        long = "surcharge",
        value_name = "PERCENT",
        default_value = "0",
        help = "Surcharge percentage applied to the base amount"
    )]
    pub surcharge_percent: Decimal,

    /// How the bill/display reference is produced
    #[arg(
        long = "reference-style",
        value_name = "STYLE",
        default_value = "composed",
        help = "Reference style: 'composed' for 'TxnID - Operator - Name' or 'token' for a random token"
    )]
    pub reference_style: ReferenceStyle,

    /// Allow the payer to edit the amount in their banking app
    #[arg(long, help = "Allow the payer to edit the amount")]
    pub editable: bool,

    /// Optional QR expiry timestamp (passed through verbatim)
    #[arg(long, value_name = "TIMESTAMP", help = "Optional QR expiry timestamp")]
    pub expiry: Option<String>,
}

/// Available reference-template styles
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReferenceStyle {
    Composed,
    Token,
}

impl CliArgs {
    /// Create a MerchantConfig from CLI arguments
    ///
    /// # Returns
    ///
    /// A `MerchantConfig` carrying the proxy selection and display fields.
    pub fn to_merchant_config(&self) -> MerchantConfig {
        let (proxy_type, proxy_value) = match (&self.mobile, &self.uen) {
            (Some(value), _) => (ProxyType::Mobile, value.clone()),
            (_, Some(value)) => (ProxyType::Uen, value.clone()),
            // clap's arg group guarantees one proxy option; an empty UEN
            // is rejected during payload construction
            (None, None) => (ProxyType::Uen, String::new()),
        };

        MerchantConfig {
            proxy_type,
            proxy_value,
            merchant_name: self.merchant_name.clone(),
            merchant_city: self.merchant_city.clone(),
            amount_editable: self.editable,
            expiry: self.expiry.clone(),
        }
    }

    /// Create a SurchargePolicy from CLI arguments
    pub fn to_surcharge_policy(&self) -> SurchargePolicy {
        SurchargePolicy::flat_percent(self.surcharge_percent)
    }
}
