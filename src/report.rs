// 📋 Report Formatter - final per-seller report entries
// Projects ranked accumulators into the output shape handed to the
// rendering collaborator

use crate::stats::SellerStats;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Default cap on the per-seller top-products list
pub const TOP_PRODUCTS_LIMIT: usize = 10;

// ============================================================================
// REPORT ENTRY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProduct {
    pub sku: String,
    pub quantity: u32,
}

/// One seller's row in the final report. Monetary amounts are already
/// rounded to 2 decimal places; entries arrive profit-ranked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub seller_id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: usize,
    pub top_products: Vec<TopProduct>,
    pub bonus: f64,
}

impl ReportEntry {
    pub fn summary(&self) -> String {
        format!(
            "{}: revenue ${:.2}, profit ${:.2}, {} sales, bonus ${:.2}",
            self.name, self.revenue, self.profit, self.sales_count, self.bonus
        )
    }
}

// ============================================================================
// FORMATTING
// ============================================================================

/// Round a monetary amount to 2 decimal places (half away from zero)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Project one accumulator (with its assigned bonus) into a report entry.
///
/// The sold-products map is flattened in first-encountered order, stable
/// sorted by quantity descending and truncated to `top_limit` entries, so
/// quantity ties keep their original order.
pub fn build_entry(stats: &SellerStats, bonus: f64, top_limit: usize) -> ReportEntry {
    let mut top_products: Vec<TopProduct> = stats
        .products_sold
        .iter()
        .map(|(sku, &quantity)| TopProduct {
            sku: sku.clone(),
            quantity,
        })
        .collect();

    top_products.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    top_products.truncate(top_limit);

    ReportEntry {
        seller_id: stats.seller_id.clone(),
        name: stats.name.clone(),
        revenue: round2(stats.revenue),
        profit: round2(stats.profit),
        sales_count: stats.sales_count,
        top_products,
        bonus: round2(bonus),
    }
}

/// Serialize a finished report for persistence or transport
pub fn render_json(report: &[ReportEntry]) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report to JSON")
}

// ============================================================================
// TESTS
// ============================================================================
