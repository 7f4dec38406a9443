//! Naive next-month expense forecast
//!
//! The estimate is a moving average over the trailing monthly expense
//! totals. Deliberately simple: it answers "roughly what does next month
//! look like" on a dashboard, nothing more.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::TransactionTable;
use crate::reports::monthly_expense_totals;

const DEFAULT_WINDOW: usize = 3;

/// Forecast configuration
///
/// One recognized option: `window`, the moving-average width in months.
/// Unknown keys in the file are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    #[serde(default = "default_window")]
    pub window: usize,
}

fn default_window() -> usize {
    DEFAULT_WINDOW
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
        }
    }
}

impl ForecastConfig {
    /// Load from a JSON file (`{"window": 3}`)
    ///
    /// A missing file yields the default configuration; a present but
    /// malformed file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No forecast config, using defaults");
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(Error::InvalidData(
                "Forecast window must be a positive integer".into(),
            ));
        }
        Ok(())
    }
}

/// Estimate next month's expenses as the mean of the trailing `window`
/// monthly totals
///
/// With fewer months of history than the window, the most recent monthly
/// total stands in for the average. No expense history at all means no
/// estimate, not an error.
pub fn naive_forecast(table: &TransactionTable, config: &ForecastConfig) -> Result<Option<f64>> {
    config.validate()?;

    let monthly = monthly_expense_totals(table);
    if monthly.is_empty() {
        return Ok(None);
    }

    let totals: Vec<f64> = monthly.values().copied().collect();

    let estimate = if totals.len() >= config.window {
        let tail = &totals[totals.len() - config.window..];
        tail.iter().sum::<f64>() / config.window as f64
    } else {
        *totals.last().expect("non-empty totals")
    };

    Ok(Some(estimate))
}
