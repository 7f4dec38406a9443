//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// BudgetWise - track spending and keep a monthly budget honest
#[derive(Parser)]
#[command(name = "budgetwise")]
#[command(about = "Personal finance tracker with budget advisories", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Transaction file path
    #[arg(long, default_value = "transactions.csv", global = true)]
    pub data: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log a transaction
    Add {
        /// Transaction type: expense or income
        #[arg(short = 't', long = "type")]
        kind: String,

        /// Free-text description
        #[arg(short, long)]
        description: String,

        /// Amount (non-negative)
        #[arg(short, long)]
        amount: f64,

        /// Date in YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Category label (expenses are auto-classified if omitted)
        #[arg(short, long)]
        category: Option<String>,

        /// Classifier artifact path
        #[arg(long, default_value = "expense_classifier.json")]
        model: PathBuf,
    },

    /// Show recent transactions
    List {
        /// Number of transactions to show
        #[arg(short, long, default_value = "15")]
        limit: usize,
    },

    /// Aggregated spending reports
    Report {
        #[command(subcommand)]
        report_type: ReportType,
    },

    /// Naive next-month expense forecast
    Forecast {
        /// Forecast configuration file (JSON)
        #[arg(long, default_value = "forecast_config.json")]
        config: PathBuf,

        /// Override the moving-average window
        #[arg(short, long)]
        window: Option<usize>,
    },

    /// Budget advisories against a monthly limit
    Recommend {
        /// Monthly spending limit
        #[arg(short, long, default_value = "200.0")]
        limit: f64,
    },

    /// Export the transaction table as CSV
    Export {
        /// Output file path
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum ReportType {
    /// Expense totals by category
    Categories,

    /// Expense totals by calendar month
    Monthly,
}
