//! Per-item invoice derivation
//!
//! GST and labour splits for a single order line. All derived values are
//! per unit; quantity multiplication happens in the order calculator.

use rust_decimal::Decimal;
use serde::Serialize;
use shared::OrderItem;

use crate::money::{opt_to_decimal, round_money, to_decimal, to_f64};
use crate::tax::{GST_HALF_RATE, IGST_RATE, LABOUR_HALF_RATE, LABOUR_IGST_RATE, TaxRegime};
use crate::weight::resolve_net_weight;

/// Derived per-unit figures for one order line
///
/// Ephemeral: recomputed from the order record on every call, never
/// persisted. Values are rounded to 2 decimal places.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DerivedItem {
    /// Resolved billable weight in grams
    pub net_weight: f64,
    /// Taxable metal amount: rate × net_weight
    pub amount: f64,
    /// Total GST on `amount` (cgst + sgst, or igst)
    pub gst_amount: f64,
    /// Central GST share (intra-state only)
    pub cgst: f64,
    /// State GST share (intra-state only)
    pub sgst: f64,
    /// Integrated GST (inter-state only)
    pub igst: f64,
    /// Making charge: labour × net_weight
    pub labour_on_weight: f64,
    /// Total GST on the making charge
    pub labour_amount: f64,
    /// Central GST share of the labour tax (intra-state only)
    pub labour_cgst: f64,
    /// State GST share of the labour tax (intra-state only)
    pub labour_sgst: f64,
    /// Integrated GST on labour (inter-state only)
    pub labour_igst: f64,
    /// Charged unit price (custom_price/price/product_rate chain)
    pub effective_price: f64,
    /// Units, coerced to a positive count
    pub quantity: i64,
}

/// Split a taxable basis into (cgst, sgst, igst) for the regime.
///
/// Halves are rounded first and the total is taken as their sum, so the
/// split invariant holds exactly after rounding.
fn split_gst(
    basis: Decimal,
    regime: TaxRegime,
    half_rate: Decimal,
    igst_rate: Decimal,
) -> (Decimal, Decimal, Decimal) {
    match regime {
        TaxRegime::IntraState => {
            let half = round_money(basis * half_rate);
            (half, half, Decimal::ZERO)
        }
        TaxRegime::InterState => (
            Decimal::ZERO,
            Decimal::ZERO,
            round_money(basis * igst_rate),
        ),
    }
}

/// Derive the per-unit invoice figures for one order line
pub fn derive_item(item: &OrderItem, regime: TaxRegime) -> DerivedItem {
    let net_weight = resolve_net_weight(item);
    let amount = opt_to_decimal(item.rate) * net_weight;
    let labour_on_weight = opt_to_decimal(item.labour) * net_weight;

    let (cgst, sgst, igst) = split_gst(amount, regime, GST_HALF_RATE, IGST_RATE);
    let gst_amount = cgst + sgst + igst;

    let (labour_cgst, labour_sgst, labour_igst) =
        split_gst(labour_on_weight, regime, LABOUR_HALF_RATE, LABOUR_IGST_RATE);
    let labour_amount = labour_cgst + labour_sgst + labour_igst;

    DerivedItem {
        net_weight: to_f64(net_weight),
        amount: to_f64(amount),
        gst_amount: to_f64(gst_amount),
        cgst: to_f64(cgst),
        sgst: to_f64(sgst),
        igst: to_f64(igst),
        labour_on_weight: to_f64(labour_on_weight),
        labour_amount: to_f64(labour_amount),
        labour_cgst: to_f64(labour_cgst),
        labour_sgst: to_f64(labour_sgst),
        labour_igst: to_f64(labour_igst),
        effective_price: to_f64(to_decimal(item.effective_price())),
        quantity: item.effective_quantity(),
    }
}
