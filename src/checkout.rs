//! Checkout totals and order references
//!
//! The caller persists a `CheckoutSummary` onto its order record; nothing
//! here touches storage.

use crate::engine::{DeliveryEngine, Destination, OrderStats};
use crate::fee::DeliveryQuote;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Prefix for order references
pub const ORDER_REFERENCE_PREFIX: &str = "ABL";

/// Totals shown at checkout and stored with the order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckoutSummary {
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub total: f64,
    pub free_shipping: bool,
    /// Extra spend needed to reach free delivery (0 once reached)
    pub amount_to_free_shipping: f64,
    pub quote: DeliveryQuote,
}

impl CheckoutSummary {
    /// Quote delivery for an order and total it up
    pub fn new(engine: &DeliveryEngine, destination: &Destination, order: &OrderStats) -> Self {
        let quote = engine.quote(destination, order);
        let amount_to_free_shipping = engine.calculator().amount_to_free_shipping(order.subtotal);

        Self {
            subtotal: order.subtotal,
            delivery_fee: quote.fee,
            total: order.subtotal + quote.fee,
            free_shipping: quote.free_shipping,
            amount_to_free_shipping,
            quote,
        }
    }
}

/// Order reference: prefix plus the timestamp in upper-case base 36
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use shipzone::checkout::order_reference;
///
/// let at = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
/// assert_eq!(order_reference(at), "ABL-LOYW3V28");
/// ```
pub fn order_reference(at: DateTime<Utc>) -> String {
    let millis = at.timestamp_millis().unsigned_abs();
    format!("{}-{}", ORDER_REFERENCE_PREFIX, to_base36(millis))
}

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8_lossy(&out).into_owned()
}
