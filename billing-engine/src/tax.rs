//! GST regime selection and rates
//!
//! Jewellery GST: 3% on the metal amount and 5% on making charges. The
//! store is registered in Rajasthan, so intra-state shipments split each
//! rate evenly into CGST + SGST while inter-state shipments pay the single
//! IGST rate. The totals match across regimes; only the split differs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 1.5% — CGST/SGST half-rate on the metal amount
pub const GST_HALF_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 3);
/// 3% — IGST on the metal amount
pub const IGST_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 2);
/// 2.5% — CGST/SGST half-rate on making charges
pub const LABOUR_HALF_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 3);
/// 5% — IGST on making charges
pub const LABOUR_IGST_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

/// Tax regime for an order, decided by the shipping state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxRegime {
    /// Shipping within Rajasthan: CGST + SGST split
    IntraState,
    /// Shipping to any other state (or unrecognised input): IGST
    InterState,
}

impl TaxRegime {
    /// Decide the regime from the free-text shipping state.
    ///
    /// Case-insensitive substring match on "rajasthan" / "raj", carried
    /// over from the source system. Any town name containing "raj" matches
    /// too; do not tighten this without confirming the intended state-code
    /// taxonomy upstream.
    pub fn from_shipping_state(state: &str) -> Self {
        let normalized = state.to_lowercase();
        if normalized.contains("rajasthan") || normalized.contains("raj") {
            Self::IntraState
        } else {
            Self::InterState
        }
    }

    /// Whether this order ships within the home state
    pub fn is_intra_state(self) -> bool {
        matches!(self, Self::IntraState)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rajasthan_is_intra_state() {
        assert_eq!(
            TaxRegime::from_shipping_state("Rajasthan"),
            TaxRegime::IntraState
        );
        assert_eq!(
            TaxRegime::from_shipping_state("RAJASTHAN"),
            TaxRegime::IntraState
        );
        assert_eq!(
            TaxRegime::from_shipping_state("rajasthan, india"),
            TaxRegime::IntraState
        );
        assert_eq!(TaxRegime::from_shipping_state("Raj"), TaxRegime::IntraState);
    }

    #[test]
    fn other_states_are_inter_state() {
        assert_eq!(
            TaxRegime::from_shipping_state("Delhi"),
            TaxRegime::InterState
        );
        assert_eq!(
            TaxRegime::from_shipping_state("Maharashtra"),
            TaxRegime::InterState
        );
    }

    #[test]
    fn empty_or_unknown_defaults_to_inter_state() {
        assert_eq!(TaxRegime::from_shipping_state(""), TaxRegime::InterState);
        assert_eq!(
            TaxRegime::from_shipping_state("somewhere else"),
            TaxRegime::InterState
        );
    }

    #[test]
    fn substring_match_catches_raj_towns() {
        // Current upstream behaviour: "Rajkot, Gujarat" ships inter-state in
        // reality but matches the "raj" substring.
        assert_eq!(
            TaxRegime::from_shipping_state("Rajkot, Gujarat"),
            TaxRegime::IntraState
        );
    }
}
