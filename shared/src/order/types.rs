//! Order and order-line input records
//!
//! Shapes match the upstream order store: rows routinely carry NULLs,
//! free-text numbers and unit-suffixed weights, so every numeric field is
//! optional and `weight` is a plain string.

use serde::{Deserialize, Serialize};

/// A single order line as stored upstream
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OrderItem {
    /// Metal/stone rate per gram, basis for the taxable amount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    /// Units ordered (absent or non-positive is treated as 1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,
    /// Free-text weight, optionally unit-suffixed ("10 g", "2.5 carat")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    /// Gross weight in grams, used when `weight` is unusable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_weight: Option<f64>,
    /// Weight of removable stones/wax, subtracted from gross
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub less_weight: Option<f64>,
    /// Extra billable weight added after the less adjustment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_weight: Option<f64>,
    /// Making charge per gram
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labour: Option<f64>,
    /// Admin-set override price per unit (wins over every other price field)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_price: Option<f64>,
    /// Listed price per unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Catalogue rate per unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_rate: Option<f64>,
    /// Discounted sell price per unit, display only (not part of the
    /// charged-price chain)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sell_price: Option<f64>,
    /// Line discount, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
    /// Metal purity percentage, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tunch: Option<f64>,
    /// Wastage percentage, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wastage_percentage: Option<f64>,
    /// Diamond weight in carats, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diamond_weight: Option<f64>,
    /// Stone weight in carats, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stone_weight: Option<f64>,
    /// Other charges, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<f64>,
}

impl OrderItem {
    /// Charged unit price: first non-null entry of the fallback chain
    /// `custom_price` → `price` → `product_rate`.
    ///
    /// Deliberately a different field from `rate` (the basis for the
    /// taxable amount); the two can diverge for the same line.
    /// `sell_price` is carried for display but never charged.
    pub fn effective_price(&self) -> f64 {
        self.custom_price
            .or(self.price)
            .or(self.product_rate)
            .unwrap_or(0.0)
    }

    /// Units ordered, coerced to a positive count
    pub fn effective_quantity(&self) -> i64 {
        self.quantity.filter(|q| *q > 0).unwrap_or(1)
    }
}

/// An order as supplied by the order-retrieval service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Order {
    /// Free-text shipping state, decides the GST regime
    #[serde(default)]
    pub shipping_state: String,
    /// Order lines (ordering does not affect totals)
    #[serde(default)]
    pub items: Vec<OrderItem>,
    /// Flat order-level tax adjustment, displayed as its own line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<f64>,
    /// Cash-on-delivery charge, displayed as its own line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cod_charge: Option<f64>,
    /// Flat discount subtracted from the grand total
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<f64>,
    /// Coupon code behind `discount_amount`, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_price_prefers_custom_price() {
        let item = OrderItem {
            custom_price: Some(900.0),
            price: Some(1000.0),
            product_rate: Some(1100.0),
            sell_price: Some(800.0),
            ..Default::default()
        };
        assert_eq!(item.effective_price(), 900.0);
    }

    #[test]
    fn effective_price_walks_the_chain() {
        let item = OrderItem {
            price: Some(1000.0),
            product_rate: Some(1100.0),
            ..Default::default()
        };
        assert_eq!(item.effective_price(), 1000.0);

        let item = OrderItem {
            product_rate: Some(1100.0),
            ..Default::default()
        };
        assert_eq!(item.effective_price(), 1100.0);

        assert_eq!(OrderItem::default().effective_price(), 0.0);
    }

    #[test]
    fn sell_price_is_never_charged() {
        let item = OrderItem {
            sell_price: Some(800.0),
            ..Default::default()
        };
        assert_eq!(item.effective_price(), 0.0);
    }

    #[test]
    fn effective_price_keeps_explicit_zero() {
        // An explicit 0 price is a value, not a gap in the chain
        let item = OrderItem {
            custom_price: Some(0.0),
            price: Some(1000.0),
            ..Default::default()
        };
        assert_eq!(item.effective_price(), 0.0);
    }

    #[test]
    fn effective_quantity_defaults_to_one() {
        assert_eq!(OrderItem::default().effective_quantity(), 1);

        let item = OrderItem {
            quantity: Some(0),
            ..Default::default()
        };
        assert_eq!(item.effective_quantity(), 1);

        let item = OrderItem {
            quantity: Some(-3),
            ..Default::default()
        };
        assert_eq!(item.effective_quantity(), 1);

        let item = OrderItem {
            quantity: Some(4),
            ..Default::default()
        };
        assert_eq!(item.effective_quantity(), 4);
    }

    #[test]
    fn sparse_json_deserializes_with_defaults() {
        let order: Order = serde_json::from_str(
            r#"{
                "shipping_state": "Rajasthan",
                "items": [{"rate": 5200.0, "weight": "4.2 g"}]
            }"#,
        )
        .unwrap();

        assert_eq!(order.shipping_state, "Rajasthan");
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].rate, Some(5200.0));
        assert_eq!(order.items[0].weight.as_deref(), Some("4.2 g"));
        assert_eq!(order.items[0].quantity, None);
        assert_eq!(order.discount_amount, None);
    }

    #[test]
    fn absent_optionals_are_not_serialized() {
        let json = serde_json::to_value(OrderItem {
            rate: Some(100.0),
            ..Default::default()
        })
        .unwrap();

        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("rate"));
        assert!(!obj.contains_key("custom_price"));
        assert!(!obj.contains_key("weight"));
    }
}
