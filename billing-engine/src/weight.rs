//! Net-weight resolution for order lines
//!
//! Upstream stores weight as free text ("10 g", "2.5 carat", sometimes
//! empty). Resolution order:
//! 1. first decimal number found inside `weight` (unit suffixes ignored)
//! 2. max(0, (gross_weight - less_weight) + additional_weight)
//!
//! Malformed input degrades silently to zero; this path never errors.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use shared::OrderItem;

use crate::money::opt_to_decimal;

static NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("literal pattern compiles"));

/// Resolve the billable gram weight for an order line
pub fn resolve_net_weight(item: &OrderItem) -> Decimal {
    if let Some(weight) = item.weight.as_deref()
        && let Some(matched) = NUMBER_PATTERN.find(weight)
    {
        return matched.as_str().parse().unwrap_or_default();
    }

    let gross = opt_to_decimal(item.gross_weight);
    let less = opt_to_decimal(item.less_weight);
    let additional = opt_to_decimal(item.additional_weight);
    ((gross - less) + additional).max(Decimal::ZERO)
}
