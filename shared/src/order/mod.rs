//! Order Records Module
//!
//! Input-only order records: the billing engine reads them and never
//! mutates or persists them. Numeric fields stay `Option` so callers can
//! still tell "missing" from "explicit zero"; the engine's
//! coerce-or-default rule maps both absence and garbage to zero.

pub mod types;

// Re-exports
pub use types::{Order, OrderItem};
