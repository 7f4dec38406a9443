//! BudgetWise CLI - Personal finance tracker
//!
//! Usage:
//!   budgetwise add -t expense -d "WHOLE FOODS" -a 42.50    Log a transaction
//!   budgetwise list                                        Recent transactions
//!   budgetwise report categories                           Spending breakdown
//!   budgetwise recommend --limit 200                       Budget advisories

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Add {
            kind,
            description,
            amount,
            date,
            category,
            model,
        } => commands::cmd_add(
            &cli.data,
            &kind,
            &description,
            amount,
            date.as_deref(),
            category,
            &model,
        ),
        Commands::List { limit } => commands::cmd_list(&cli.data, limit),
        Commands::Report { report_type } => match report_type {
            ReportType::Categories => commands::cmd_report_categories(&cli.data),
            ReportType::Monthly => commands::cmd_report_monthly(&cli.data),
        },
        Commands::Forecast { config, window } => {
            commands::cmd_forecast(&cli.data, &config, window)
        }
        Commands::Recommend { limit } => commands::cmd_recommend(&cli.data, limit),
        Commands::Export { output } => commands::cmd_export(&cli.data, &output),
    }
}
