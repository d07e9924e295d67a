//! PayNow QR payload CLI
//!
//! Command-line interface for minting a single PayNow payment QR payload.
//!
//! # Usage
//!
//! ```bash
//! paynow-qr 100.00 --mobile 91234567 --name "Kopi Corner" \
//!     --company Lunar --operator alice --customer "Table 5"
//! paynow-qr 100.00 --uen 201403121W --name "Kopi Corner" --surcharge 3 \
//!     --company Wave --operator bob --customer "Walk-in" --reference-style token
//! ```
//!
//! The payload wire string is printed to stdout so it can be piped into a
//! standards-compliant 2D-barcode encoder; the transaction id and display
//! reference are logged to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Validation error (invalid amount, invalid proxy, etc.)

use paynow_qr_engine::cli;
use paynow_qr_engine::core::SaleEngine;
use paynow_qr_engine::strategy::create_reference_strategy;
use paynow_qr_engine::types::CompanyKey;
use std::process;
use tracing::info;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse command-line arguments using clap
    let args = cli::parse_args();

    let engine = SaleEngine::new(
        args.to_merchant_config(),
        args.to_surcharge_policy(),
        create_reference_strategy(args.reference_style),
    );

    let company = CompanyKey::new(args.company.clone());
    match engine.create_sale(args.amount, &args.operator, &args.customer, &company) {
        Ok(ticket) => {
            info!(
                transaction_id = %ticket.transaction_id,
                reference = %ticket.display_reference,
                "payload minted"
            );
            // Payload goes to stdout for the external QR image encoder
            println!("{}", ticket.payload);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
