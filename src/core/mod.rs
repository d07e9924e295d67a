//! Core business logic module
//!
//! This module contains the components with business rules:
//! - `allocator` - time-windowed transaction reference allocation
//! - `sale` - the sale engine implementing the consumer contract

pub mod allocator;
pub mod sale;

pub use allocator::{build_reference, ReferenceAllocator};
pub use sale::{SaleEngine, SaleTicket};
