// ⚙️ Analysis Engine - validate → index → aggregate → rank → report
// Single-pass pipeline over an in-memory dataset; all-or-nothing per run

use crate::data::SalesData;
use crate::policy::{BonusPolicy, RevenuePolicy};
use crate::report::{self, ReportEntry};
use crate::stats::{build_product_index, SellerStats, StatsLedger};

// ============================================================================
// ANALYSIS ERROR
// ============================================================================

/// Failure taxonomy of the pipeline. Every variant is fail-fast: no partial
/// report is ever produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// A required input collection is missing or empty
    InvalidInput { collection: &'static str },

    /// The options carry no revenue or no bonus policy
    MissingPolicy { policy: &'static str },

    /// A purchase record or line item references an id absent from the
    /// seller or product index - a data-integrity problem in the input
    UnknownReference { entity: &'static str, id: String },
}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::InvalidInput { collection } => {
                write!(f, "invalid input data: collection '{}' is empty", collection)
            }
            AnalysisError::MissingPolicy { policy } => {
                write!(f, "required {} policy was not supplied", policy)
            }
            AnalysisError::UnknownReference { entity, id } => {
                write!(f, "unknown {} reference: '{}'", entity, id)
            }
        }
    }
}

impl std::error::Error for AnalysisError {}

// ============================================================================
// ANALYSIS OPTIONS
// ============================================================================

/// The two caller-supplied policies, held by reference.
/// Both are required; `SalesAnalyzer::analyze` rejects incomplete options.
pub struct AnalysisOptions<'a> {
    revenue: Option<&'a dyn RevenuePolicy>,
    bonus: Option<&'a dyn BonusPolicy>,
}

impl<'a> AnalysisOptions<'a> {
    pub fn new() -> Self {
        AnalysisOptions {
            revenue: None,
            bonus: None,
        }
    }

    pub fn with_revenue(mut self, policy: &'a dyn RevenuePolicy) -> Self {
        self.revenue = Some(policy);
        self
    }

    pub fn with_bonus(mut self, policy: &'a dyn BonusPolicy) -> Self {
        self.bonus = Some(policy);
        self
    }
}

impl Default for AnalysisOptions<'_> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// SALES ANALYZER
// ============================================================================

pub struct SalesAnalyzer {
    /// Cap on each seller's top-products list (default: 10)
    top_products_limit: usize,
}

impl SalesAnalyzer {
    pub fn new() -> Self {
        SalesAnalyzer {
            top_products_limit: report::TOP_PRODUCTS_LIMIT,
        }
    }

    pub fn with_top_limit(top_products_limit: usize) -> Self {
        SalesAnalyzer { top_products_limit }
    }

    /// Run the full pipeline over one dataset.
    ///
    /// Returns one report entry per seller, ordered by profit descending.
    /// Ties keep seller input order: the sort is stable and the rank index
    /// feeds the bonus tiers, so tie-breaking must be deterministic.
    pub fn analyze(
        &self,
        data: &SalesData,
        options: &AnalysisOptions,
    ) -> Result<Vec<ReportEntry>, AnalysisError> {
        let (revenue_policy, bonus_policy) = validate(data, options)?;

        let ledger = aggregate(data, revenue_policy)?;
        let ranked = rank(ledger.into_stats(), bonus_policy);

        Ok(ranked
            .iter()
            .map(|(stats, bonus)| report::build_entry(stats, *bonus, self.top_products_limit))
            .collect())
    }
}

impl Default for SalesAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience entry point with the default top-products limit
pub fn analyze_sales_data(
    data: &SalesData,
    options: &AnalysisOptions,
) -> Result<Vec<ReportEntry>, AnalysisError> {
    SalesAnalyzer::new().analyze(data, options)
}

// ============================================================================
// PIPELINE STAGES
// ============================================================================

/// Check the four input collections and both policies. Pure check, no
/// side effects.
fn validate<'a>(
    data: &SalesData,
    options: &AnalysisOptions<'a>,
) -> Result<(&'a dyn RevenuePolicy, &'a dyn BonusPolicy), AnalysisError> {
    if data.customers.is_empty() {
        return Err(AnalysisError::InvalidInput {
            collection: "customers",
        });
    }
    if data.products.is_empty() {
        return Err(AnalysisError::InvalidInput {
            collection: "products",
        });
    }
    if data.sellers.is_empty() {
        return Err(AnalysisError::InvalidInput {
            collection: "sellers",
        });
    }
    if data.purchase_records.is_empty() {
        return Err(AnalysisError::InvalidInput {
            collection: "purchase_records",
        });
    }

    let revenue = options
        .revenue
        .ok_or(AnalysisError::MissingPolicy { policy: "revenue" })?;
    let bonus = options
        .bonus
        .ok_or(AnalysisError::MissingPolicy { policy: "bonus" })?;

    Ok((revenue, bonus))
}

/// Fold every purchase record into the per-seller accumulators, exactly
/// once, in input order. Accumulation is associative, so per-seller totals
/// do not depend on how records from different sellers interleave.
fn aggregate(
    data: &SalesData,
    revenue_policy: &dyn RevenuePolicy,
) -> Result<StatsLedger, AnalysisError> {
    let product_index = build_product_index(&data.products);
    let mut ledger = StatsLedger::new(&data.sellers);

    for record in &data.purchase_records {
        let stats =
            ledger
                .get_mut(&record.seller_id)
                .ok_or_else(|| AnalysisError::UnknownReference {
                    entity: "seller",
                    id: record.seller_id.clone(),
                })?;

        // One receipt = one sale, regardless of how many items it holds
        stats.record_sale();

        for item in &record.items {
            let product = product_index.get(item.sku.as_str()).copied().ok_or_else(|| {
                AnalysisError::UnknownReference {
                    entity: "product",
                    id: item.sku.clone(),
                }
            })?;

            // The policy owns the revenue math; cost is always
            // purchase_price × quantity
            let item_revenue = revenue_policy.revenue(item, product);
            let item_cost = product.purchase_price * item.quantity as f64;

            stats.record_item(&item.sku, item.quantity, item_revenue, item_cost);
        }
    }

    Ok(ledger)
}

/// Stable sort by profit descending, then assign each seller's bonus from
/// its zero-based rank
fn rank(mut stats: Vec<SellerStats>, bonus_policy: &dyn BonusPolicy) -> Vec<(SellerStats, f64)> {
    stats.sort_by(|a, b| b.profit.total_cmp(&a.profit));

    let total = stats.len();

    stats
        .into_iter()
        .enumerate()
        .map(|(index, seller)| {
            let bonus = bonus_policy.bonus(index, total, &seller);
            (seller, bonus)
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
