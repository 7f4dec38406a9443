//! Domain models for BudgetWise

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a transaction takes money out or brings money in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Expense,
    Income,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
        }
    }
}

impl std::str::FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "expense" => Ok(Self::Expense),
            "income" => Ok(Self::Income),
            _ => Err(format!("Unknown transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single logged transaction
///
/// There is no identifier field; duplicate rows are permitted. Rows are
/// created once and never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date. None when the persisted value was malformed and
    /// coerced to null during loading.
    pub date: Option<NaiveDate>,
    /// Free-text description, the classifier input for expenses
    pub description: String,
    /// Non-negative amount; the `kind` field carries the direction
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Assigned only for expenses, None until classified
    pub category: Option<String>,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

/// An ordered sequence of transactions
///
/// Insertion order is entry order, not necessarily date order. One instance
/// is the in-memory snapshot for a whole render pass; the persisted CSV file
/// is the durable source of truth between runs.
#[derive(Debug, Clone, Default)]
pub struct TransactionTable {
    rows: Vec<Transaction>,
}

impl TransactionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.rows.iter()
    }

    /// Append a row, preserving entry order
    pub fn push(&mut self, tx: Transaction) {
        self.rows.push(tx);
    }

    /// Iterator over expense rows only
    pub fn expenses(&self) -> impl Iterator<Item = &Transaction> {
        self.rows.iter().filter(|tx| tx.is_expense())
    }
}

impl From<Vec<Transaction>> for TransactionTable {
    fn from(rows: Vec<Transaction>) -> Self {
        Self { rows }
    }
}

impl<'a> IntoIterator for &'a TransactionTable {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
