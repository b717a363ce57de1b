//! Order-level invoice aggregation
//!
//! Multiplies the per-unit derived values by quantity, sums across lines
//! and attaches the flat order-level adjustments. The grand total sums the
//! charged price chain, not the rate-based taxable amount; the two are
//! kept distinct on purpose.

use rust_decimal::Decimal;
use serde::Serialize;
use shared::Order;

use super::item_calculator::{DerivedItem, derive_item};
use crate::money::{opt_to_decimal, to_decimal, to_f64};
use crate::tax::TaxRegime;

/// Order-level aggregates for the totals panel
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InvoiceTotals {
    /// Σ effective_price × quantity
    pub grand_total: f64,
    /// Σ per-unit GST × quantity
    pub total_gst: f64,
    /// Σ per-unit labour GST × quantity
    pub total_labour: f64,
    /// grand_total − total_gst − total_labour
    pub subtotal: f64,
    /// Flat order-level tax line (display only, never folded into grand_total)
    pub tax_amount: f64,
    /// Cash-on-delivery charge line (display only)
    pub cod_charge: f64,
    /// Flat discount applied to the payable figure
    pub discount_amount: f64,
    /// Coupon code behind the discount, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_code: Option<String>,
    /// grand_total − discount_amount
    pub payable: f64,
}

/// Full invoice derivation for one order
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InvoiceCalculation {
    /// Regime decided from the shipping state
    pub regime: TaxRegime,
    /// Per-line derived figures, in input order
    pub items: Vec<DerivedItem>,
    /// Order-level aggregates
    pub totals: InvoiceTotals,
}

/// Derive the full invoice for an order.
///
/// Idempotent and side-effect free: identical input yields identical
/// output, and the order record is never mutated.
pub fn calculate_invoice(order: &Order) -> InvoiceCalculation {
    let regime = TaxRegime::from_shipping_state(&order.shipping_state);

    let items: Vec<DerivedItem> = order
        .items
        .iter()
        .map(|item| derive_item(item, regime))
        .collect();

    let mut grand_total = Decimal::ZERO;
    let mut total_gst = Decimal::ZERO;
    let mut total_labour = Decimal::ZERO;

    for item in &items {
        let quantity = Decimal::from(item.quantity);
        grand_total += to_decimal(item.effective_price) * quantity;
        total_gst += to_decimal(item.gst_amount) * quantity;
        total_labour += to_decimal(item.labour_amount) * quantity;
    }

    let subtotal = grand_total - total_gst - total_labour;
    let discount_amount = opt_to_decimal(order.discount_amount);
    let payable = grand_total - discount_amount;

    InvoiceCalculation {
        regime,
        items,
        totals: InvoiceTotals {
            grand_total: to_f64(grand_total),
            total_gst: to_f64(total_gst),
            total_labour: to_f64(total_labour),
            subtotal: to_f64(subtotal),
            tax_amount: to_f64(opt_to_decimal(order.tax_amount)),
            cod_charge: to_f64(opt_to_decimal(order.cod_charge)),
            discount_amount: to_f64(discount_amount),
            discount_code: order.discount_code.clone(),
            payable: to_f64(payable),
        },
    }
}
