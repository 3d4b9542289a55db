//! Loading the hourly and daily rental datasets.
//!
//! The datasets are read once when the server starts with [Dataset::load]
//! and shared read-only for the rest of the process.

mod reader;
mod records;

use std::{collections::BTreeSet, path::Path};

pub use reader::{parse_daily_csv, parse_hourly_csv};
pub use records::{DailyRecord, HourlyRecord, Season};

use crate::Error;

/// The rental records served by the dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    /// One record per hour.
    pub hourly: Vec<HourlyRecord>,
    /// One record per day.
    pub daily: Vec<DailyRecord>,
}

impl Dataset {
    /// Create a dataset from records that have already been parsed.
    pub fn new(hourly: Vec<HourlyRecord>, daily: Vec<DailyRecord>) -> Self {
        Self { hourly, daily }
    }

    /// Read both datasets from CSV files.
    ///
    /// # Errors
    /// Returns [Error::DatasetIo] if a file cannot be opened, or
    /// [Error::InvalidCsv] if a file is missing a required column or has a
    /// row with an invalid value.
    pub fn load(hourly_path: &Path, daily_path: &Path) -> Result<Self, Error> {
        let hourly = reader::read_hourly_csv(hourly_path)?;
        tracing::info!(
            "Loaded {} hourly records from {}",
            hourly.len(),
            hourly_path.display()
        );

        let daily = reader::read_daily_csv(daily_path)?;
        tracing::info!(
            "Loaded {} daily records from {}",
            daily.len(),
            daily_path.display()
        );

        Ok(Self { hourly, daily })
    }

    /// The distinct years in the daily records, in ascending order.
    pub fn daily_years(&self) -> BTreeSet<u16> {
        self.daily.iter().map(|record| record.year).collect()
    }
}
