//! Shopping cart aggregation
//!
//! Only what delivery pricing needs: line quantities and prices, merged the
//! way the storefront merges them (same product, size and colour share a
//! line).

use crate::engine::OrderStats;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One line in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CartLine {
    pub product_id: String,
    pub unit_price: f64,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl CartLine {
    fn same_variant(&self, product_id: &str, size: Option<&str>, color: Option<&str>) -> bool {
        self.product_id == product_id
            && self.size.as_deref() == size
            && self.color.as_deref() == color
    }

    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Cart {
    #[serde(default)]
    pub lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of a product variant, merging into an existing line
    pub fn add_item(
        &mut self,
        product_id: &str,
        unit_price: f64,
        quantity: u32,
        size: Option<&str>,
        color: Option<&str>,
    ) {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.same_variant(product_id, size, color))
        {
            line.quantity = line.quantity.saturating_add(quantity);
            return;
        }

        self.lines.push(CartLine {
            product_id: product_id.to_string(),
            unit_price,
            quantity,
            size: size.map(str::to_string),
            color: color.map(str::to_string),
        });
    }

    /// Remove every line for a product
    pub fn remove_item(&mut self, product_id: &str) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Set the quantity on every line for a product; zero removes it
    pub fn update_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove_item(product_id);
            return;
        }
        for line in self.lines.iter_mut().filter(|l| l.product_id == product_id) {
            line.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of quantities across all lines, capped at `u32::MAX`
    pub fn total_items(&self) -> u32 {
        self.lines
            .iter()
            .map(|l| l.quantity)
            .fold(0u32, u32::saturating_add)
    }

    /// Sum of unit price × quantity across all lines
    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn order_stats(&self) -> OrderStats {
        OrderStats {
            subtotal: self.subtotal(),
            item_count: self.total_items(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_merges_same_variant() {
        let mut cart = Cart::new();
        cart.add_item("dress", 15000.0, 1, Some("M"), Some("red"));
        cart.add_item("dress", 15000.0, 2, Some("M"), Some("red"));
        cart.add_item("dress", 15000.0, 1, Some("L"), Some("red"));

        assert_eq!(cart.lines.len(), 2);
        assert_eq!(cart.lines[0].quantity, 3);
        assert_eq!(cart.total_items(), 4);
        assert_eq!(cart.subtotal(), 60000.0);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let mut cart = Cart::new();
        cart.add_item("shirt", 8000.0, 1, None, None);
        cart.add_item("cap", 3000.0, 2, None, None);

        cart.update_quantity("shirt", 5);
        assert_eq!(cart.total_items(), 7);

        cart.update_quantity("shirt", 0);
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].product_id, "cap");
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::new();
        cart.add_item("shirt", 8000.0, 1, Some("S"), None);
        cart.add_item("shirt", 8000.0, 1, Some("M"), None);
        cart.add_item("cap", 3000.0, 1, None, None);

        cart.remove_item("shirt");
        assert_eq!(cart.total_items(), 1);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.order_stats(), OrderStats::default());
    }

    #[test]
    fn test_order_stats() {
        let mut cart = Cart::new();
        cart.add_item("bag", 25000.0, 2, None, None);
        cart.add_item("belt", 4500.0, 3, None, None);

        let stats = cart.order_stats();
        assert_eq!(stats.item_count, 5);
        assert_eq!(stats.subtotal, 63500.0);
    }

    #[test]
    fn test_huge_quantities_saturate() {
        let mut cart = Cart::new();
        cart.add_item("a", 1.0, u32::MAX, None, None);
        cart.add_item("b", 1.0, 2, None, None);
        cart.add_item("a", 1.0, 5, None, None);

        assert_eq!(cart.lines[0].quantity, u32::MAX);
        assert_eq!(cart.total_items(), u32::MAX);

        let catalog = crate::catalog::ZoneCatalog::builtin();
        let calc = crate::fee::FeeCalculator::new(&catalog);
        let tier = calc.select_tier(cart.order_stats().item_count);
        assert_eq!(tier, crate::catalog::WeightTier::Heavy);
    }
}
