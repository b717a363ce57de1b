//! Shared types for the storefront billing stack
//!
//! Order records as delivered by the order-retrieval service, plus the
//! CMS-driven dynamic links record. These are plain serde types with no
//! business logic beyond field-access helpers; all derivation lives in
//! `billing-engine`.

pub mod links;
pub mod order;

// Re-exports
pub use links::StoreLinks;
pub use order::{Order, OrderItem};
pub use serde::{Deserialize, Serialize};
