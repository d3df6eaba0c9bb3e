// 💰 Policy Framework - pluggable revenue and bonus computation
// Strategy traits injected into the analysis pipeline, plus the reference
// implementations used by the CLI

use crate::data::{LineItem, Product};
use crate::stats::SellerStats;

// ============================================================================
// STRATEGY TRAITS
// ============================================================================

/// RevenuePolicy - computes the revenue of a single line item
///
/// The policy owns the discount/price/quantity math entirely; the aggregator
/// only adds the result to the seller's running revenue.
pub trait RevenuePolicy: Send + Sync {
    /// Revenue for one line item, given the product card it references
    fn revenue(&self, item: &LineItem, product: &Product) -> f64;
}

/// BonusPolicy - computes a seller's bonus from their rank
///
/// Invoked once per seller after the profit-descending sort, with the
/// seller's zero-based rank `index` out of `total` sellers.
pub trait BonusPolicy: Send + Sync {
    fn bonus(&self, index: usize, total: usize, stats: &SellerStats) -> f64;
}

// ============================================================================
// REFERENCE POLICIES
// ============================================================================

/// Revenue = sale_price × quantity, reduced by the percent discount
pub struct DiscountedRevenue;

impl RevenuePolicy for DiscountedRevenue {
    fn revenue(&self, item: &LineItem, _product: &Product) -> f64 {
        let discount = item.discount / 100.0;
        let full_price = item.sale_price * item.quantity as f64;

        full_price * (1.0 - discount)
    }
}

/// Bonus tiers by rank: 15% for first place, 10% for second and third,
/// 5% for the rest, 0% for last place.
///
/// The tiers are an ordered decision list, not a formula: each arm is
/// checked in turn and the first match wins. With three or fewer sellers
/// the early arms shadow the last-place arm (e.g. out of two sellers the
/// runner-up still earns 10%).
pub struct ProfitRankBonus;

impl BonusPolicy for ProfitRankBonus {
    fn bonus(&self, index: usize, total: usize, stats: &SellerStats) -> f64 {
        let percent = if index == 0 {
            // First place
            0.15
        } else if index == 1 || index == 2 {
            // Second and third place
            0.10
        } else if index + 1 < total {
            // Everyone else, except last place
            0.05
        } else {
            // Last place
            0.0
        };

        stats.profit * percent
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Seller;

    fn create_test_item(sale_price: f64, quantity: u32, discount: f64) -> LineItem {
        LineItem {
            sku: "SKU-001".to_string(),
            quantity,
            discount,
            sale_price,
        }
    }

    fn create_test_product() -> Product {
        Product {
            sku: "SKU-001".to_string(),
            name: "Test Product".to_string(),
            category: None,
            purchase_price: 50.0,
            sale_price: 100.0,
        }
    }

    fn create_test_stats(profit: f64) -> SellerStats {
        let seller = Seller {
            id: "s1".to_string(),
            first_name: "Test".to_string(),
            last_name: "Seller".to_string(),
        };

        let mut stats = SellerStats::new(&seller);
        stats.profit = profit;
        stats
    }

    #[test]
    fn test_discounted_revenue() {
        let policy = DiscountedRevenue;

        // 100 × 3 with 10% off = 270.00
        let item = create_test_item(100.0, 3, 10.0);
        let revenue = policy.revenue(&item, &create_test_product());

        assert!((revenue - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_discounted_revenue_no_discount() {
        let policy = DiscountedRevenue;

        let item = create_test_item(19.99, 2, 0.0);
        let revenue = policy.revenue(&item, &create_test_product());

        assert!((revenue - 39.98).abs() < 1e-9);
    }

    #[test]
    fn test_discounted_revenue_full_discount() {
        let policy = DiscountedRevenue;

        let item = create_test_item(50.0, 4, 100.0);
        let revenue = policy.revenue(&item, &create_test_product());

        assert_eq!(revenue, 0.0);
    }

    #[test]
    fn test_bonus_tiers_five_sellers() {
        let policy = ProfitRankBonus;
        let profits = [500.0, 400.0, 300.0, 200.0, 100.0];
        let expected = [75.0, 40.0, 30.0, 10.0, 0.0];

        for (index, (&profit, &want)) in profits.iter().zip(expected.iter()).enumerate() {
            let bonus = policy.bonus(index, profits.len(), &create_test_stats(profit));
            assert!(
                (bonus - want).abs() < 1e-9,
                "rank {}: expected {}, got {}",
                index,
                want,
                bonus
            );
        }
    }

    #[test]
    fn test_bonus_single_seller_gets_top_tier() {
        let policy = ProfitRankBonus;

        // Only seller is both first and last - the first arm wins
        let bonus = policy.bonus(0, 1, &create_test_stats(1000.0));
        assert!((bonus - 150.0).abs() < 1e-9);
    }

    #[test]
    fn test_bonus_two_sellers() {
        let policy = ProfitRankBonus;

        // Runner-up of two is last place, but the second-place arm
        // is checked first
        let first = policy.bonus(0, 2, &create_test_stats(200.0));
        let second = policy.bonus(1, 2, &create_test_stats(100.0));

        assert!((first - 30.0).abs() < 1e-9);
        assert!((second - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_bonus_four_sellers_last_gets_nothing() {
        let policy = ProfitRankBonus;

        let bonus = policy.bonus(3, 4, &create_test_stats(100.0));
        assert_eq!(bonus, 0.0);
    }
}
