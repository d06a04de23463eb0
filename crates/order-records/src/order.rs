//! Order model, synthesis and JSON encoding.

use crate::catalog::{
    pick, CATEGORIES, CITIES, COUNTRIES, CUSTOMER_POOL, FIRST_NAMES, LAST_NAMES, MAX_QUANTITY,
    PAYMENT_METHODS, PRODUCT_NAME_POOL, PRODUCT_POOL, UNIT_PRICE_TENTHS,
};
use generator_core::{wall_clock_timestamp, EncodeError, StreamRecord, SynthesisContext};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Default channel for orders.
pub const TOPIC: &str = "ecommerce-orders";

/// `ORD-` followed by the sequence number, zero-padded to six digits.
pub fn format_order_id(sequence: u64) -> String {
    format!("ORD-{sequence:06}")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: String,
    pub timestamp: String,
    pub customer_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub product_id: String,
    pub product_name: String,
    pub category: String,
    pub quantity: u32,
    pub unit_price: f64,
    /// Always `quantity * unit_price`.
    pub total_price: f64,
    pub payment_method: String,
    pub country: String,
    pub city: String,
}

impl Order {
    /// Draw order number `sequence`, stamped with the current wall-clock time.
    pub fn generate<R: Rng>(rng: &mut R, sequence: u64) -> Self {
        Self::generate_at(rng, sequence, wall_clock_timestamp())
    }

    pub fn generate_at<R: Rng>(rng: &mut R, sequence: u64, timestamp: String) -> Self {
        let quantity = rng.gen_range(1..=MAX_QUANTITY);
        let unit_price = f64::from(rng.gen_range(UNIT_PRICE_TENTHS)) / 10.0;

        let first_name = pick(rng, &FIRST_NAMES);
        let last_name = pick(rng, &LAST_NAMES);

        Self {
            order_id: format_order_id(sequence),
            timestamp,
            customer_id: format!("CUST-{:05}", rng.gen_range(0..CUSTOMER_POOL)),
            customer_name: format!("{first_name} {last_name}"),
            customer_email: format!("{first_name}.{last_name}@example.com"),
            product_id: format!("PROD-{:04}", rng.gen_range(0..PRODUCT_POOL)),
            product_name: format!("Product {}", rng.gen_range(0..PRODUCT_NAME_POOL)),
            category: pick(rng, &CATEGORIES).to_string(),
            quantity,
            unit_price,
            total_price: f64::from(quantity) * unit_price,
            payment_method: pick(rng, &PAYMENT_METHODS).to_string(),
            country: pick(rng, &COUNTRIES).to_string(),
            city: pick(rng, &CITIES).to_string(),
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>, EncodeError> {
        serde_json::to_vec(self).map_err(|e| EncodeError::new(e.to_string()))
    }
}

impl StreamRecord for Order {
    const TOPIC: &'static str = TOPIC;
    const KIND: &'static str = "orders";

    fn synthesize<R: Rng>(rng: &mut R, ctx: SynthesisContext) -> Self {
        Self::generate(rng, ctx.sequence)
    }

    fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        self.to_json()
    }

    fn key(&self) -> Option<String> {
        Some(self.order_id.clone())
    }
}
