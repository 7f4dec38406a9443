//! Transaction command implementations (add, list, export)

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::warn;

use budgetwise_core::classify::{Classifier, KeywordClassifier};
use budgetwise_core::models::{Transaction, TransactionType};
use budgetwise_core::store;

use super::truncate;

pub fn cmd_add(
    data: &Path,
    kind: &str,
    description: &str,
    amount: f64,
    date: Option<&str>,
    category: Option<String>,
    model: &Path,
) -> Result<()> {
    let kind: TransactionType = kind.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    if !amount.is_finite() || amount < 0.0 {
        anyhow::bail!("Amount must be non-negative, got {}", amount);
    }

    let date = match date {
        Some(s) => Some(
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .context("Invalid --date format (use YYYY-MM-DD)")?,
        ),
        None => Some(chrono::Local::now().date_naive()),
    };

    // Only expenses carry a category
    let category = match kind {
        TransactionType::Expense => category.or_else(|| auto_classify(description, model)),
        TransactionType::Income => {
            if category.is_some() {
                warn!("Ignoring --category on an income transaction");
            }
            None
        }
    };

    let mut table = store::load_transactions(data)?;
    let tx = Transaction {
        date,
        description: description.to_string(),
        amount,
        kind,
        category: category.clone(),
    };
    store::append_transaction(data, &mut table, tx)?;

    match category {
        Some(label) => println!("✅ Added {} ${:.2} ({}) - categorized as {}", kind, amount, description, label),
        None => println!("✅ Added {} ${:.2} ({})", kind, amount, description),
    }

    Ok(())
}

/// Predict a category for an uncategorized expense description
///
/// A missing or broken artifact degrades to an uncategorized transaction
/// rather than failing the add.
fn auto_classify(description: &str, model: &Path) -> Option<String> {
    if description.trim().is_empty() {
        return None;
    }

    let clf = match KeywordClassifier::load(model) {
        Ok(clf) => clf,
        Err(e) => {
            warn!(model = %model.display(), error = %e, "Classifier unavailable, leaving uncategorized");
            return None;
        }
    };

    match clf.predict(description) {
        Ok(label) => Some(label),
        Err(e) => {
            warn!(error = %e, "Classification failed, leaving uncategorized");
            None
        }
    }
}

pub fn cmd_list(data: &Path, limit: usize) -> Result<()> {
    let table = store::load_transactions(data)?;

    if table.is_empty() {
        println!("No transactions yet. Add one with:");
        println!("  budgetwise add -t expense -d \"WHOLE FOODS\" -a 42.50");
        return Ok(());
    }

    // Most recent first; rows with a nulled date sort last
    let mut rows: Vec<_> = table.iter().collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date));

    println!();
    println!("🧾 Recent Transactions ({} of {})", limit.min(rows.len()), rows.len());
    println!("   ─────────────────────────────────────────────────────────────");
    println!(
        "   {:10} │ {:30} │ {:>10} │ {:7} │ {:12}",
        "Date", "Description", "Amount", "Type", "Category"
    );
    println!("   ───────────┼────────────────────────────────┼────────────┼─────────┼──────────────");

    for tx in rows.iter().take(limit) {
        let date = tx
            .date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "   {:10} │ {:30} │ {:>10.2} │ {:7} │ {:12}",
            date,
            truncate(&tx.description, 30),
            tx.amount,
            tx.kind,
            tx.category.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}

pub fn cmd_export(data: &Path, output: &Path) -> Result<()> {
    let table = store::load_transactions(data)?;

    let file = std::fs::File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    store::export_transactions(&table, file)?;

    println!(
        "✅ Exported {} transactions to {}",
        table.len(),
        output.display()
    );
    Ok(())
}
