//! Flat-file persistence for the transaction table
//!
//! The durable source of truth is a CSV file with the canonical columns
//! `date, description, amount, type, category`. The file is read once at
//! startup and fully rewritten on every mutation - last-writer-wins, no
//! concurrent-writer protection, which is acceptable for single-user use.

use std::io::{Read, Write};
use std::path::Path;

use chrono::NaiveDate;
use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{Transaction, TransactionTable};

/// Canonical column order of the persisted table
pub const COLUMNS: [&str; 5] = ["date", "description", "amount", "type", "category"];

/// Load the persisted table from `path`
///
/// A missing file is not an error: it yields an empty table with the
/// canonical columns, matching a first run before any transaction exists.
pub fn load_transactions(path: &Path) -> Result<TransactionTable> {
    if !path.exists() {
        debug!(path = %path.display(), "No transaction file, starting empty");
        return Ok(TransactionTable::new());
    }

    let file = std::fs::File::open(path)?;
    read_transactions(file)
}

/// Parse CSV data into a transaction table
///
/// Column positions are resolved from the header row, so extra columns and
/// reordering are tolerated. Malformed dates are coerced to None rather than
/// raising; malformed amounts or types mean the file itself is broken and
/// are reported as errors.
pub fn read_transactions<R: Read>(reader: R) -> Result<TransactionTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let col = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::Store(format!("Missing column: {}", name)))
    };

    let date_col = col("date")?;
    let desc_col = col("description")?;
    let amount_col = col("amount")?;
    let type_col = col("type")?;
    let category_col = col("category")?;

    let mut table = TransactionTable::new();

    for result in rdr.records() {
        let record = result?;

        let date = record.get(date_col).and_then(coerce_date);

        let description = record.get(desc_col).unwrap_or("").to_string();

        let amount_str = record
            .get(amount_col)
            .ok_or_else(|| Error::Store("Missing amount".into()))?;
        let amount = parse_amount(amount_str)?;

        let kind = record
            .get(type_col)
            .ok_or_else(|| Error::Store("Missing type".into()))?
            .parse()
            .map_err(Error::InvalidData)?;

        let category = record
            .get(category_col)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        table.push(Transaction {
            date,
            description,
            amount,
            kind,
            category,
        });
    }

    debug!("Loaded {} transactions", table.len());
    Ok(table)
}

/// Rewrite the persisted table in full
///
/// Writes to a temp file in the target directory, then renames over `path`
/// so a crash mid-write never leaves a truncated table behind.
pub fn save_transactions(path: &Path, table: &TransactionTable) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => std::path::PathBuf::from("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
    export_transactions(table, &mut tmp)?;
    tmp.flush()?;
    tmp.persist(path)
        .map_err(|e| Error::Store(format!("Failed to replace {}: {}", path.display(), e)))?;

    debug!(path = %path.display(), rows = table.len(), "Saved transaction table");
    Ok(())
}

/// Append one transaction and rewrite the file
pub fn append_transaction(
    path: &Path,
    table: &mut TransactionTable,
    tx: Transaction,
) -> Result<()> {
    table.push(tx);
    save_transactions(path, table)
}

/// Serialize the table as canonical CSV to any writer
pub fn export_transactions<W: Write>(table: &TransactionTable, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(COLUMNS)?;

    for tx in table {
        let date = tx
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default();
        let amount = format!("{:.2}", tx.amount);
        wtr.write_record([
            date.as_str(),
            tx.description.as_str(),
            amount.as_str(),
            tx.kind.as_str(),
            tx.category.as_deref().unwrap_or(""),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Coerce a date cell, trying the canonical format first
///
/// Malformed values become None instead of errors.
fn coerce_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    let formats = [
        "%Y-%m-%d", // 2024-01-15 (canonical)
        "%m/%d/%Y", // 01/15/2024
        "%m/%d/%y", // 01/15/24
        "%m-%d-%Y", // 01-15-2024
    ];

    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }

    None
}

/// Parse an amount string, handling currency symbols and commas
fn parse_amount(s: &str) -> Result<f64> {
    let cleaned: String = s.trim().replace(['$', ',', ' '], "");

    cleaned
        .parse::<f64>()
        .map_err(|_| Error::Store(format!("Unable to parse amount: {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionType;

    #[test]
    fn test_coerce_date() {
        assert_eq!(
            coerce_date("2024-01-15"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(
            coerce_date("01/15/2024"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert_eq!(coerce_date("not-a-date"), None);
        assert_eq!(coerce_date(""), None);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("$1,234.56").unwrap(), 1234.56);
        assert_eq!(parse_amount("150").unwrap(), 150.0);
        assert!(parse_amount("abc").is_err());
    }

    #[test]
    fn test_read_transactions() {
        let csv = "date,description,amount,type,category\n\
                   2024-01-05,WHOLE FOODS,150.00,expense,food\n\
                   2024-01-31,PAYCHECK,2000.00,income,\n";

        let table = read_transactions(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);

        let first = table.iter().next().unwrap();
        assert_eq!(first.description, "WHOLE FOODS");
        assert_eq!(first.amount, 150.0);
        assert_eq!(first.kind, TransactionType::Expense);
        assert_eq!(first.category.as_deref(), Some("food"));

        let second = table.iter().nth(1).unwrap();
        assert_eq!(second.kind, TransactionType::Income);
        assert_eq!(second.category, None);
    }

    #[test]
    fn test_read_malformed_date_becomes_null() {
        let csv = "date,description,amount,type,category\n\
                   garbage,COFFEE,4.50,expense,dining\n";

        let table = read_transactions(csv.as_bytes()).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.iter().next().unwrap().date, None);
    }

    #[test]
    fn test_read_missing_column() {
        let csv = "date,description,amount\n2024-01-05,X,1.00\n";
        let err = read_transactions(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("Missing column"));
    }

    #[test]
    fn test_read_unknown_type() {
        let csv = "date,description,amount,type,category\n\
                   2024-01-05,X,1.00,transfer,\n";
        assert!(read_transactions(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_load_missing_file_is_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.csv");

        let table = load_transactions(&path).unwrap();
        assert!(table.is_empty());

        // Saving the empty table still lays down the canonical header
        save_transactions(&path, &table).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.trim(), COLUMNS.join(","));
    }

    #[test]
    fn test_save_and_reload_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transactions.csv");

        let mut table = TransactionTable::new();
        append_transaction(
            &path,
            &mut table,
            Transaction {
                date: NaiveDate::from_ymd_opt(2024, 1, 5),
                description: "WHOLE FOODS".into(),
                amount: 150.0,
                kind: TransactionType::Expense,
                category: Some("food".into()),
            },
        )
        .unwrap();
        append_transaction(
            &path,
            &mut table,
            Transaction {
                date: None,
                description: "UNKNOWN DAY".into(),
                amount: 12.5,
                kind: TransactionType::Expense,
                category: None,
            },
        )
        .unwrap();

        let reloaded = load_transactions(&path).unwrap();
        assert_eq!(reloaded.len(), 2);

        let rows: Vec<_> = reloaded.iter().collect();
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2024, 1, 5));
        assert_eq!(rows[0].amount, 150.0);
        // Null date survives as an empty cell and loads back as None
        assert_eq!(rows[1].date, None);
        assert_eq!(rows[1].category, None);
    }
}
