//! Synthetic e-commerce orders.
//!
//! Orders are numbered by the run's synthesis counter (`ORD-000001`,
//! `ORD-000002`, ...) and published as JSON objects on `ecommerce-orders`,
//! keyed by order id.

pub mod catalog;
pub mod order;

pub use order::{format_order_id, Order, TOPIC};
