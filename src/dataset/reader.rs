//! Functions to parse the rental datasets from CSV.
//!
//! Columns are matched by their header name, so the column order does not
//! matter and columns the dashboard does not use are ignored.

use std::{fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;

use crate::{
    Error,
    dataset::{DailyRecord, HourlyRecord},
};

/// Parses the daily dataset.
///
/// Expects comma separated values with a header row that includes the
/// columns `yr`, `mnth`, `casual` and `registered`.
///
/// Returns `Error::InvalidCsv` if a column is missing or a row has an invalid value.
pub fn parse_daily_csv(reader: impl Read) -> Result<Vec<DailyRecord>, Error> {
    parse_records(reader).map_err(|error| Error::InvalidCsv(error.to_string()))
}

/// Parses the hourly dataset.
///
/// Expects comma separated values with a header row that includes the
/// columns `season`, `yr`, `hr` and `cnt`.
///
/// Returns `Error::InvalidCsv` if a column is missing or a row has an invalid value.
pub fn parse_hourly_csv(reader: impl Read) -> Result<Vec<HourlyRecord>, Error> {
    parse_records(reader).map_err(|error| Error::InvalidCsv(error.to_string()))
}

pub(super) fn read_daily_csv(path: &Path) -> Result<Vec<DailyRecord>, Error> {
    read_records(path)
}

pub(super) fn read_hourly_csv(path: &Path) -> Result<Vec<HourlyRecord>, Error> {
    read_records(path)
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, Error> {
    let file = File::open(path).map_err(|error| Error::DatasetIo {
        path: path.display().to_string(),
        message: error.to_string(),
    })?;

    parse_records(file).map_err(|error| {
        tracing::error!("Could not parse {}: {error}", path.display());
        Error::InvalidCsv(format!("{}: {error}", path.display()))
    })
}

fn parse_records<T: DeserializeOwned>(reader: impl Read) -> Result<Vec<T>, csv::Error> {
    ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(reader)
        .deserialize()
        .collect()
}
