// 📈 Seller Accumulators - per-seller running totals + product index
// Built once up front, mutated only while aggregating purchase records,
// then handed to the ranker read-only

use crate::data::{Product, Seller};
use indexmap::IndexMap;
use std::collections::HashMap;

// ============================================================================
// SELLER STATS
// ============================================================================

/// Running totals for one seller over one analysis run
///
/// `products_sold` is insertion-ordered so that quantity ties in the final
/// top-products list resolve to first-encountered order, keeping the report
/// deterministic.
#[derive(Debug, Clone)]
pub struct SellerStats {
    pub seller_id: String,

    /// Display name: first and last name joined by a single space
    pub name: String,

    pub revenue: f64,

    pub profit: f64,

    /// Number of receipts, not line items
    pub sales_count: usize,

    /// sku → total quantity sold
    pub products_sold: IndexMap<String, u32>,
}

impl SellerStats {
    /// Fresh zeroed accumulator for a seller
    pub fn new(seller: &Seller) -> Self {
        SellerStats {
            seller_id: seller.id.clone(),
            name: format!("{} {}", seller.first_name, seller.last_name),
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            products_sold: IndexMap::new(),
        }
    }

    /// Count one receipt (called once per purchase record)
    pub fn record_sale(&mut self) {
        self.sales_count += 1;
    }

    /// Fold one line item into the running totals
    pub fn record_item(&mut self, sku: &str, quantity: u32, revenue: f64, cost: f64) {
        self.revenue += revenue;
        self.profit += revenue - cost;

        *self.products_sold.entry(sku.to_string()).or_insert(0) += quantity;
    }
}

// ============================================================================
// STATS LEDGER
// ============================================================================

/// All seller accumulators for one run, kept in seller input order with an
/// id → position lookup. Input order matters: the profit sort is stable, so
/// it is the tie-break for equally profitable sellers.
pub struct StatsLedger {
    stats: Vec<SellerStats>,
    positions: HashMap<String, usize>,
}

impl StatsLedger {
    /// Initialize one zeroed accumulator per seller.
    /// A duplicated seller id replaces the earlier entry (last write wins).
    pub fn new(sellers: &[Seller]) -> Self {
        let mut stats: Vec<SellerStats> = Vec::with_capacity(sellers.len());
        let mut positions: HashMap<String, usize> = HashMap::with_capacity(sellers.len());

        for seller in sellers {
            match positions.get(&seller.id) {
                Some(&pos) => stats[pos] = SellerStats::new(seller),
                None => {
                    positions.insert(seller.id.clone(), stats.len());
                    stats.push(SellerStats::new(seller));
                }
            }
        }

        StatsLedger { stats, positions }
    }

    /// Mutable accumulator for a seller id, if known
    pub fn get_mut(&mut self, seller_id: &str) -> Option<&mut SellerStats> {
        let pos = *self.positions.get(seller_id)?;
        self.stats.get_mut(pos)
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Consume the ledger, yielding accumulators in seller input order
    pub fn into_stats(self) -> Vec<SellerStats> {
        self.stats
    }
}

// ============================================================================
// PRODUCT INDEX
// ============================================================================

/// Build the sku → product lookup used by the aggregator.
/// Colliding skus are not expected by the schema; the last one wins.
pub fn build_product_index(products: &[Product]) -> HashMap<&str, &Product> {
    let mut index = HashMap::with_capacity(products.len());

    for product in products {
        index.insert(product.sku.as_str(), product);
    }

    index
}

// ============================================================================
// TESTS
// ============================================================================
