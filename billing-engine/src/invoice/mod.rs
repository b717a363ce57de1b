//! Invoice derivation
//!
//! Per-item tax/labour splits and order-level aggregates, recomputed from
//! the order record on every call. Pure: no I/O, no clock, no mutation of
//! the input, and no failure paths.

pub mod item_calculator;
pub mod order_calculator;

// Re-exports
pub use item_calculator::{DerivedItem, derive_item};
pub use order_calculator::{InvoiceCalculation, InvoiceTotals, calculate_invoice};
