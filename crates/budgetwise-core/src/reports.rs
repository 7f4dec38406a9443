//! Aggregation reports over a transaction table snapshot
//!
//! Everything here is a pure fold over the in-memory table: no state, no
//! I/O. The CLI renders these, and the recommender builds on the same
//! groupings.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::TransactionTable;

/// Total expense amount for one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Headline numbers for the whole table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSummary {
    pub transaction_count: usize,
    pub income_total: f64,
    pub expense_total: f64,
    pub net: f64,
}

/// First day of the month a date falls in
pub fn month_of(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).expect("first of month is always valid")
}

/// Expense totals grouped by calendar month, keyed by the first day of
/// the month so the map iterates chronologically
///
/// Rows whose date was coerced to null are skipped - there is no month to
/// derive for them.
pub fn monthly_expense_totals(table: &TransactionTable) -> BTreeMap<NaiveDate, f64> {
    let mut totals = BTreeMap::new();

    for tx in table.expenses() {
        if let Some(date) = tx.date {
            *totals.entry(month_of(date)).or_insert(0.0) += tx.amount;
        }
    }

    totals
}

/// Expense totals grouped by category, largest first
///
/// Uncategorized rows are excluded. Ties are broken by label so the order
/// is stable across runs.
pub fn category_totals(table: &TransactionTable) -> Vec<CategoryTotal> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();

    for tx in table.expenses() {
        if let Some(category) = tx.category.as_deref() {
            *totals.entry(category).or_insert(0.0) += tx.amount;
        }
    }

    let mut out: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, amount)| CategoryTotal {
            category: category.to_string(),
            amount,
        })
        .collect();

    out.sort_by(|a, b| {
        b.amount
            .partial_cmp(&a.amount)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.category.cmp(&b.category))
    });

    out
}

/// Income/expense totals and net for the whole table
pub fn table_summary(table: &TransactionTable) -> TableSummary {
    let mut income_total = 0.0;
    let mut expense_total = 0.0;

    for tx in table {
        if tx.is_expense() {
            expense_total += tx.amount;
        } else {
            income_total += tx.amount;
        }
    }

    TableSummary {
        transaction_count: table.len(),
        income_total,
        expense_total,
        net: income_total - expense_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Transaction, TransactionType};

    fn tx(date: Option<&str>, amount: f64, kind: TransactionType, category: Option<&str>) -> Transaction {
        Transaction {
            date: date.and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok()),
            description: String::new(),
            amount,
            kind,
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn test_monthly_totals_group_by_calendar_month() {
        let table = TransactionTable::from(vec![
            tx(Some("2024-01-05"), 150.0, TransactionType::Expense, Some("food")),
            tx(Some("2024-01-20"), 100.0, TransactionType::Expense, Some("food")),
            tx(Some("2024-02-01"), 40.0, TransactionType::Expense, None),
            tx(Some("2024-02-10"), 900.0, TransactionType::Income, None),
        ]);

        let totals = monthly_expense_totals(&table);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[&NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()], 250.0);
        assert_eq!(totals[&NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()], 40.0);
    }

    #[test]
    fn test_monthly_totals_partition_expenses() {
        // Grouping is a partition: month buckets sum to the overall total
        let table = TransactionTable::from(vec![
            tx(Some("2024-01-05"), 10.0, TransactionType::Expense, None),
            tx(Some("2024-03-09"), 20.5, TransactionType::Expense, Some("a")),
            tx(Some("2024-03-21"), 4.25, TransactionType::Expense, Some("b")),
            tx(Some("2024-07-01"), 99.0, TransactionType::Expense, None),
        ]);

        let grouped: f64 = monthly_expense_totals(&table).values().sum();
        let direct: f64 = table.expenses().map(|t| t.amount).sum();
        assert!((grouped - direct).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_totals_skip_null_dates() {
        let table = TransactionTable::from(vec![
            tx(None, 33.0, TransactionType::Expense, Some("food")),
            tx(Some("2024-01-05"), 10.0, TransactionType::Expense, None),
        ]);

        let totals = monthly_expense_totals(&table);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals.values().sum::<f64>(), 10.0);
    }

    #[test]
    fn test_category_totals_sorted_descending() {
        let table = TransactionTable::from(vec![
            tx(Some("2024-01-05"), 10.0, TransactionType::Expense, Some("coffee")),
            tx(Some("2024-01-06"), 200.0, TransactionType::Expense, Some("rent")),
            tx(Some("2024-01-07"), 50.0, TransactionType::Expense, Some("coffee")),
            tx(None, 75.0, TransactionType::Expense, Some("food")),
            tx(Some("2024-01-08"), 12.0, TransactionType::Expense, None),
        ]);

        let totals = category_totals(&table);
        let labels: Vec<_> = totals.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(labels, vec!["rent", "food", "coffee"]);
        // Null-date rows still count toward their category
        assert_eq!(totals[1].amount, 75.0);
    }

    #[test]
    fn test_table_summary() {
        let table = TransactionTable::from(vec![
            tx(Some("2024-01-05"), 150.0, TransactionType::Expense, None),
            tx(Some("2024-01-31"), 2000.0, TransactionType::Income, None),
        ]);

        let summary = table_summary(&table);
        assert_eq!(summary.transaction_count, 2);
        assert_eq!(summary.expense_total, 150.0);
        assert_eq!(summary.income_total, 2000.0);
        assert_eq!(summary.net, 1850.0);
    }

    #[test]
    fn test_empty_table() {
        let table = TransactionTable::new();
        assert!(monthly_expense_totals(&table).is_empty());
        assert!(category_totals(&table).is_empty());
        assert_eq!(table_summary(&table).transaction_count, 0);
    }
}
