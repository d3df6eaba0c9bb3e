// 🛒 Sales Data Model - Input collections
// Customers, products, sellers and purchase records as delivered by the
// upstream data source (JSON dataset or per-collection CSV exports)

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// CUSTOMER
// ============================================================================

/// Customer record. Carried through validation only - the aggregation
/// pipeline never reads individual customers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,

    pub first_name: String,

    pub last_name: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

// ============================================================================
// PRODUCT
// ============================================================================

/// Product card. `purchase_price` is the cost basis used for profit,
/// `sale_price` is the list price (line items carry their own sale price).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Stock-keeping unit - unique product identifier
    pub sku: String,

    pub name: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    pub purchase_price: f64,

    pub sale_price: f64,
}

// ============================================================================
// SELLER
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,

    pub first_name: String,

    pub last_name: String,
}

// ============================================================================
// PURCHASE RECORD
// ============================================================================

/// One product entry within a receipt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub sku: String,

    pub quantity: u32,

    /// Discount in percent (0-100)
    #[serde(default)]
    pub discount: f64,

    /// Per-unit price actually charged on this receipt
    pub sale_price: f64,
}

/// One receipt: a seller's sale of one or more line items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRecord {
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    pub seller_id: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    pub items: Vec<LineItem>,

    /// Receipt total as recorded at the register. Provenance only - the
    /// pipeline recomputes revenue through the revenue policy.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<f64>,
}

// ============================================================================
// SALES DATA
// ============================================================================

/// The four input collections consumed by the analysis pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesData {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub sellers: Vec<Seller>,
    pub purchase_records: Vec<PurchaseRecord>,
}

impl SalesData {
    /// Parse a full dataset from a JSON string
    pub fn from_json_str(json: &str) -> Result<SalesData> {
        serde_json::from_str(json).context("Failed to parse sales dataset JSON")
    }
}

/// Load a full dataset from a JSON file
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<SalesData> {
    let content = fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read dataset file: {:?}", path.as_ref()))?;

    SalesData::from_json_str(&content)
}

// ============================================================================
// CSV LOADERS (flat collections only - receipts are nested, use JSON)
// ============================================================================

fn load_csv_records<T, P>(path: P, collection: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let mut rdr = csv::Reader::from_path(path.as_ref())
        .with_context(|| format!("Failed to open {} CSV: {:?}", collection, path.as_ref()))?;

    let mut records = Vec::new();

    for result in rdr.deserialize() {
        let record: T =
            result.with_context(|| format!("Failed to deserialize {} row", collection))?;
        records.push(record);
    }

    Ok(records)
}

pub fn load_customers_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Customer>> {
    load_csv_records(path, "customers")
}

pub fn load_products_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Product>> {
    load_csv_records(path, "products")
}

pub fn load_sellers_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Seller>> {
    load_csv_records(path, "sellers")
}

// ============================================================================
// TESTS
// ============================================================================
