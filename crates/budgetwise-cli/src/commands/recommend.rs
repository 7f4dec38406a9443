//! Budget advisory command implementation

use std::path::Path;

use anyhow::Result;

use budgetwise_core::recommend::recommend_budget;
use budgetwise_core::store;

pub fn cmd_recommend(data: &Path, limit: f64) -> Result<()> {
    let table = store::load_transactions(data)?;

    println!();
    println!("💡 Recommendations & Alerts");
    println!("   ─────────────────────────────────────────────");

    // Advisory failures degrade to an informational message; they never
    // take the session down.
    match recommend_budget(&table, limit) {
        Ok(advisories) if advisories.is_empty() => {
            println!("   ✅ Spending is within your ${:.2} monthly limit.", limit);
        }
        Ok(advisories) => {
            for advisory in &advisories {
                println!("   - {}", advisory);
            }
        }
        Err(e) => {
            println!("   Could not compute recommendations: {}", e);
        }
    }

    Ok(())
}
