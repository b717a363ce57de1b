//! Billing engine for the jewellery storefront
//!
//! Pure derivation of invoice figures from upstream order records: weight
//! resolution, GST regime selection, per-item tax/labour splits and
//! order-level aggregates. All monetary math runs in `rust_decimal` and is
//! rounded to 2 decimal places at the output boundary.
//!
//! The calculator is infallible by design: absent or malformed upstream
//! values coerce to zero, which is the right trade for a display/reporting
//! context. Callers that need financial-grade input checking run
//! [`validate_order`] first.

pub mod cache;
pub mod invoice;
pub mod money;
pub mod tax;
pub mod validation;
pub mod weight;

// Re-exports
pub use cache::{LinksCache, TtlCache};
pub use invoice::{DerivedItem, InvoiceCalculation, InvoiceTotals, calculate_invoice, derive_item};
pub use tax::TaxRegime;
pub use validation::{BillingError, validate_order, validate_order_item};
pub use weight::resolve_net_weight;
