//! Strict input validation
//!
//! The invoice calculator never fails: absent or malformed numerics coerce
//! to zero, which suits a display/reporting context. Anything ledger-like
//! must not rely on that silent-zero rule — run [`validate_order`] first
//! and surface the error instead.

use shared::{Order, OrderItem};
use thiserror::Error;

/// Maximum allowed monetary value per field (₹10 crore)
const MAX_PRICE: f64 = 100_000_000.0;
/// Maximum allowed quantity per line
const MAX_QUANTITY: i64 = 9999;
/// Maximum allowed weight in grams (100 kg)
const MAX_WEIGHT: f64 = 100_000.0;

/// Validation failure for an order record
#[derive(Debug, Error, PartialEq)]
pub enum BillingError {
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("{field} must be non-negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} exceeds maximum allowed ({max}), got {value}")]
    OutOfRange {
        field: &'static str,
        max: f64,
        value: f64,
    },

    #[error("quantity must be between 1 and {max}, got {got}")]
    InvalidQuantity { max: i64, got: i64 },

    #[error("item {index}: {source}")]
    Item {
        index: usize,
        #[source]
        source: Box<BillingError>,
    },
}

fn check(value: Option<f64>, field: &'static str, max: f64) -> Result<(), BillingError> {
    let Some(value) = value else {
        return Ok(());
    };
    if !value.is_finite() {
        return Err(BillingError::NonFinite { field, value });
    }
    if value < 0.0 {
        return Err(BillingError::Negative { field, value });
    }
    if value > max {
        return Err(BillingError::OutOfRange { field, max, value });
    }
    Ok(())
}

/// Validate a single order line
pub fn validate_order_item(item: &OrderItem) -> Result<(), BillingError> {
    check(item.rate, "rate", MAX_PRICE)?;
    check(item.labour, "labour", MAX_PRICE)?;
    check(item.gross_weight, "gross_weight", MAX_WEIGHT)?;
    check(item.less_weight, "less_weight", MAX_WEIGHT)?;
    check(item.additional_weight, "additional_weight", MAX_WEIGHT)?;
    check(item.custom_price, "custom_price", MAX_PRICE)?;
    check(item.price, "price", MAX_PRICE)?;
    check(item.product_rate, "product_rate", MAX_PRICE)?;
    check(item.sell_price, "sell_price", MAX_PRICE)?;

    if let Some(quantity) = item.quantity
        && !(1..=MAX_QUANTITY).contains(&quantity)
    {
        return Err(BillingError::InvalidQuantity {
            max: MAX_QUANTITY,
            got: quantity,
        });
    }

    Ok(())
}

/// Validate an order and all of its lines.
///
/// Side-effect free and independent of the calculator: passing or failing
/// validation never changes what [`crate::calculate_invoice`] computes.
pub fn validate_order(order: &Order) -> Result<(), BillingError> {
    check(order.tax_amount, "tax_amount", MAX_PRICE)?;
    check(order.cod_charge, "cod_charge", MAX_PRICE)?;
    check(order.discount_amount, "discount_amount", MAX_PRICE)?;

    for (index, item) in order.items.iter().enumerate() {
        validate_order_item(item).map_err(|source| BillingError::Item {
            index,
            source: Box::new(source),
        })?;
    }

    Ok(())
}
