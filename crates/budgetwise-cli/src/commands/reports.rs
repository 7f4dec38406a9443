//! Report and forecast command implementations

use std::path::Path;

use anyhow::Result;

use budgetwise_core::forecast::{naive_forecast, ForecastConfig};
use budgetwise_core::reports::{category_totals, monthly_expense_totals, table_summary};
use budgetwise_core::store;

use super::truncate;

pub fn cmd_report_categories(data: &Path) -> Result<()> {
    let table = store::load_transactions(data)?;
    let totals = category_totals(&table);

    println!();
    println!("📊 Expenses by Category");
    println!("   ─────────────────────────────────────────────");

    if totals.is_empty() {
        println!("   No categorized expenses to show.");
        return Ok(());
    }

    let overall: f64 = totals.iter().map(|c| c.amount).sum();

    println!("   {:20} │ {:>10} │ {:>6}", "Category", "Amount", "%");
    println!("   ─────────────────────┼────────────┼────────");

    for cat in &totals {
        println!(
            "   {:20} │ {:>10.2} │ {:>5.1}%",
            truncate(&cat.category, 20),
            cat.amount,
            100.0 * cat.amount / overall
        );
    }

    println!("   ─────────────────────┼────────────┼────────");
    println!("   {:20} │ {:>10.2} │", "Total", overall);

    Ok(())
}

pub fn cmd_report_monthly(data: &Path) -> Result<()> {
    let table = store::load_transactions(data)?;
    let monthly = monthly_expense_totals(&table);

    println!();
    println!("📈 Monthly Expense Trend");
    println!("   ─────────────────────────────────────────────");

    if monthly.is_empty() {
        println!("   No expense data for trend.");
        return Ok(());
    }

    println!("   {:14} │ {:>10}", "Month", "Amount");
    println!("   ───────────────┼────────────");

    for (month, total) in &monthly {
        println!("   {:14} │ {:>10.2}", month.format("%B %Y").to_string(), total);
    }

    let summary = table_summary(&table);
    println!("   ───────────────┼────────────");
    println!("   {:14} │ {:>10.2}", "Total", summary.expense_total);

    Ok(())
}

pub fn cmd_forecast(data: &Path, config_path: &Path, window: Option<usize>) -> Result<()> {
    let table = store::load_transactions(data)?;

    let mut config = ForecastConfig::load(config_path)?;
    if let Some(window) = window {
        config.window = window;
    }

    println!();
    match naive_forecast(&table, &config)? {
        Some(estimate) => {
            println!(
                "🔮 Naive forecast for next month (moving average, window={}): ${:.2}",
                config.window, estimate
            );
        }
        None => println!("No expense data for forecast."),
    }

    Ok(())
}
