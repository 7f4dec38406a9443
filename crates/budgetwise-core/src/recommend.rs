//! Rule-based budget advisories
//!
//! Compares monthly expense totals against a spending limit and flags
//! categories that dominate the spend. Advisories are plain human-readable
//! strings in a stable order: months chronologically, then category
//! concentration.

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::TransactionTable;
use crate::reports::{category_totals, monthly_expense_totals};

const DEFAULT_APPROACH_RATIO: f64 = 0.80;
const DEFAULT_CONCENTRATION_SHARE: f64 = 0.50;

/// Advisory generator with tunable thresholds
///
/// `approach_ratio` is the fraction of the monthly limit at which a month
/// earns a nearing-the-limit advisory; `concentration_share` is the share
/// of categorized spending above which a single category earns a
/// concentration advisory.
pub struct BudgetRecommender {
    approach_ratio: f64,
    concentration_share: f64,
}

impl BudgetRecommender {
    pub fn new() -> Self {
        Self {
            approach_ratio: DEFAULT_APPROACH_RATIO,
            concentration_share: DEFAULT_CONCENTRATION_SHARE,
        }
    }

    pub fn with_approach_ratio(mut self, ratio: f64) -> Self {
        self.approach_ratio = ratio;
        self
    }

    pub fn with_concentration_share(mut self, share: f64) -> Self {
        self.concentration_share = share;
        self
    }

    /// Produce advisories for the table against a monthly spending limit
    ///
    /// Any well-formed input succeeds; an empty table simply yields no
    /// advisories. The only error is a malformed limit.
    pub fn recommend(&self, table: &TransactionTable, monthly_limit: f64) -> Result<Vec<String>> {
        if !monthly_limit.is_finite() || monthly_limit <= 0.0 {
            return Err(Error::InvalidData(format!(
                "Monthly limit must be positive, got {}",
                monthly_limit
            )));
        }

        let mut advisories = Vec::new();

        // Months in chronological order first
        for (month, total) in monthly_expense_totals(table) {
            let month_name = month.format("%B %Y");
            if total > monthly_limit {
                advisories.push(format!(
                    "{}: spent ${:.2}, over your ${:.2} monthly limit",
                    month_name, total, monthly_limit
                ));
            } else if total >= self.approach_ratio * monthly_limit {
                advisories.push(format!(
                    "{}: spent ${:.2}, nearing your ${:.2} monthly limit ({:.0}% used)",
                    month_name,
                    total,
                    monthly_limit,
                    100.0 * total / monthly_limit
                ));
            }
        }

        // Then category concentration, largest share first. Uncategorized
        // rows are excluded here entirely; they still count toward the
        // monthly totals above.
        let categories = category_totals(table);
        let categorized_total: f64 = categories.iter().map(|c| c.amount).sum();

        if categorized_total > 0.0 {
            for cat in &categories {
                let share = cat.amount / categorized_total;
                if share > self.concentration_share {
                    advisories.push(format!(
                        "Most of your spending ({:.0}%) is going to {} (${:.2} of ${:.2})",
                        100.0 * share,
                        cat.category,
                        cat.amount,
                        categorized_total
                    ));
                }
            }
        }

        debug!(count = advisories.len(), "Generated budget advisories");
        Ok(advisories)
    }
}

impl Default for BudgetRecommender {
    fn default() -> Self {
        Self::new()
    }
}

/// Advisory call boundary with the default thresholds
pub fn recommend_budget(table: &TransactionTable, monthly_limit: f64) -> Result<Vec<String>> {
    BudgetRecommender::new().recommend(table, monthly_limit)
}
