use anyhow::Result;
use std::env;
use std::fs;

// Use library instead of local modules
use sales_performance::{
    analyze_sales_data, load_json, render_json, AnalysisOptions, DiscountedRevenue,
    ProfitRankBonus,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("❌ No dataset provided!");
        eprintln!("   Usage: sales-performance <dataset.json> [report.json]");
        std::process::exit(1);
    }

    run_report(&args[1], args.get(2).map(String::as_str))
}

fn run_report(data_path: &str, output_path: Option<&str>) -> Result<()> {
    println!("📊 Seller Performance Report");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Load dataset
    println!("\n📂 Loading dataset...");
    let data = load_json(data_path)?;
    println!(
        "✓ Loaded {} products, {} sellers, {} purchase records",
        data.products.len(),
        data.sellers.len(),
        data.purchase_records.len()
    );

    // 2. Analyze with the reference policies
    println!("\n⚙️  Analyzing sales...");
    let revenue = DiscountedRevenue;
    let bonus = ProfitRankBonus;
    let options = AnalysisOptions::new()
        .with_revenue(&revenue)
        .with_bonus(&bonus);

    let report = analyze_sales_data(&data, &options)?;
    println!("✓ Ranked {} sellers by profit\n", report.len());

    // 3. Print ranking
    for (rank, entry) in report.iter().enumerate() {
        println!("{:>3}. {}", rank + 1, entry.summary());
    }

    // 4. Optionally persist as JSON
    if let Some(path) = output_path {
        fs::write(path, render_json(&report)?)?;
        println!("\n💾 Report written to {}", path);
    }

    Ok(())
}
