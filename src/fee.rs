//! Fee calculation
//!
//! Picks a weight tier from the item count, prices it from the zone's table
//! and applies the free-shipping override.

use crate::catalog::{FallbackQuote, TierThresholds, WeightTier, Zone, ZoneCatalog};
use crate::resolve::Resolution;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Price, zone and delivery window for one destination/order pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DeliveryQuote {
    /// Fee to charge, in the catalog's currency unit
    pub fee: f64,

    /// Zone the fee was priced from; `None` only for a misconfigured catalog
    pub zone: Option<Zone>,

    /// Delivery time range to display
    pub estimated_window: String,

    /// Weight tier selected from the item count
    pub tier: Option<WeightTier>,

    /// The free-shipping override zeroed the fee
    pub free_shipping: bool,

    /// The destination genuinely matched a zone (false for fallback quotes)
    pub matched: bool,
}

/// Prices zones using a catalog's tier thresholds and free-shipping threshold
#[derive(Debug, Clone)]
pub struct FeeCalculator<'a> {
    tiers: TierThresholds,
    free_shipping_threshold: f64,
    fallback: &'a FallbackQuote,
}

impl<'a> FeeCalculator<'a> {
    pub fn new(catalog: &'a ZoneCatalog) -> Self {
        Self {
            tiers: catalog.tiers,
            free_shipping_threshold: catalog.free_shipping_threshold,
            fallback: &catalog.fallback,
        }
    }

    /// Weight tier for an item count
    pub fn select_tier(&self, item_count: u32) -> WeightTier {
        let mut tier = WeightTier::Light;
        if item_count > self.tiers.medium_above {
            tier = WeightTier::Medium;
        }
        if item_count > self.tiers.heavy_above {
            tier = WeightTier::Heavy;
        }
        tier
    }

    /// Does `subtotal` qualify for free delivery?
    pub fn qualifies_for_free_shipping(&self, subtotal: f64) -> bool {
        subtotal >= self.free_shipping_threshold
    }

    /// How much more the customer must spend to get free delivery
    pub fn amount_to_free_shipping(&self, subtotal: f64) -> f64 {
        if self.qualifies_for_free_shipping(subtotal) {
            0.0
        } else {
            self.free_shipping_threshold - subtotal.max(0.0)
        }
    }

    /// Price `zone` for an order. A missing count is treated as zero.
    ///
    /// `matched` on the result is simply whether a zone was supplied; use
    /// [`FeeCalculator::compute_for`] to carry the resolver's verdict.
    pub fn compute_fee(
        &self,
        zone: Option<&Zone>,
        subtotal: f64,
        item_count: Option<u32>,
    ) -> DeliveryQuote {
        let Some(zone) = zone else {
            log::warn!("no zone to price, using fallback quote of {}", self.fallback.fee);
            return DeliveryQuote {
                fee: self.fallback.fee,
                zone: None,
                estimated_window: self.fallback.estimated_window.clone(),
                tier: None,
                free_shipping: false,
                matched: false,
            };
        };

        let tier = self.select_tier(item_count.unwrap_or(0));
        let free_shipping = self.qualifies_for_free_shipping(subtotal);
        let fee = if free_shipping { 0.0 } else { zone.fee_for(tier) };

        DeliveryQuote {
            fee,
            zone: Some(zone.clone()),
            estimated_window: zone.estimated_window.clone(),
            tier: Some(tier),
            free_shipping,
            matched: true,
        }
    }

    /// Price a resolver outcome, keeping its match verdict
    pub fn compute_for(
        &self,
        resolution: &Resolution<'_>,
        subtotal: f64,
        item_count: Option<u32>,
    ) -> DeliveryQuote {
        let mut quote = self.compute_fee(resolution.zone, subtotal, item_count);
        quote.matched = resolution.matched();
        quote
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_bands() {
        let catalog = ZoneCatalog::builtin();
        let calc = FeeCalculator::new(&catalog);

        assert_eq!(calc.select_tier(0), WeightTier::Light);
        assert_eq!(calc.select_tier(3), WeightTier::Light);
        assert_eq!(calc.select_tier(4), WeightTier::Medium);
        assert_eq!(calc.select_tier(6), WeightTier::Medium);
        assert_eq!(calc.select_tier(7), WeightTier::Heavy);
        assert_eq!(calc.select_tier(u32::MAX), WeightTier::Heavy);
    }

    #[test]
    fn test_missing_count_is_light() {
        let catalog = ZoneCatalog::builtin();
        let calc = FeeCalculator::new(&catalog);
        let quote = calc.compute_fee(catalog.zone(4), 5000.0, None);

        assert_eq!(quote.fee, 1800.0);
        assert_eq!(quote.tier, Some(WeightTier::Light));
        assert_eq!(quote.estimated_window, "2-3 days");
    }

    #[test]
    fn test_free_shipping_at_threshold() {
        let catalog = ZoneCatalog::builtin();
        let calc = FeeCalculator::new(&catalog);

        let at = calc.compute_fee(catalog.zone(9), 100_000.0, Some(10));
        assert_eq!(at.fee, 0.0);
        assert!(at.free_shipping);
        assert_eq!(at.tier, Some(WeightTier::Heavy));
        assert_eq!(at.estimated_window, "4-6 days");

        let below = calc.compute_fee(catalog.zone(9), 99_999.99, Some(10));
        assert_eq!(below.fee, 33000.0);
        assert!(!below.free_shipping);
    }

    #[test]
    fn test_negative_and_nan_subtotals_pay_tier_fee() {
        let catalog = ZoneCatalog::builtin();
        let calc = FeeCalculator::new(&catalog);

        assert_eq!(calc.compute_fee(catalog.zone(3), -10.0, None).fee, 1600.0);
        assert_eq!(calc.compute_fee(catalog.zone(3), f64::NAN, None).fee, 1600.0);
    }

    #[test]
    fn test_no_zone_uses_fallback_quote() {
        let catalog = ZoneCatalog::builtin();
        let calc = FeeCalculator::new(&catalog);
        let quote = calc.compute_fee(None, 250_000.0, Some(2));

        assert_eq!(quote.fee, 5000.0);
        assert_eq!(quote.zone, None);
        assert_eq!(quote.estimated_window, "3-5 days");
        assert!(!quote.matched);
        assert!(!quote.free_shipping);
    }

    #[test]
    fn test_custom_thresholds() {
        let mut catalog = ZoneCatalog::builtin();
        catalog.tiers = TierThresholds {
            medium_above: 1,
            heavy_above: 2,
        };
        catalog.free_shipping_threshold = 50.0;
        let calc = FeeCalculator::new(&catalog);

        assert_eq!(calc.select_tier(2), WeightTier::Medium);
        assert_eq!(calc.select_tier(3), WeightTier::Heavy);
        assert!(calc.qualifies_for_free_shipping(50.0));
    }

    #[test]
    fn test_amount_to_free_shipping() {
        let catalog = ZoneCatalog::builtin();
        let calc = FeeCalculator::new(&catalog);

        assert_eq!(calc.amount_to_free_shipping(40_000.0), 60_000.0);
        assert_eq!(calc.amount_to_free_shipping(120_000.0), 0.0);
        assert_eq!(calc.amount_to_free_shipping(-5.0), 100_000.0);
    }
}
