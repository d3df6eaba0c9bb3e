// Sales Performance Report - Core Library
// Exposes all modules for use in the CLI and tests

pub mod data;
pub mod policy;
pub mod stats;
pub mod analysis;
pub mod report;

// Re-export commonly used types
pub use data::{
    Customer, LineItem, Product, PurchaseRecord, SalesData, Seller,
    load_json, load_customers_csv, load_products_csv, load_sellers_csv,
};
pub use policy::{
    RevenuePolicy, BonusPolicy,
    DiscountedRevenue, ProfitRankBonus,
};
pub use stats::{SellerStats, StatsLedger, build_product_index};
pub use analysis::{
    SalesAnalyzer, AnalysisOptions, AnalysisError,
    analyze_sales_data,
};
pub use report::{
    ReportEntry, TopProduct,
    build_entry, render_json, round2, TOP_PRODUCTS_LIMIT,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
