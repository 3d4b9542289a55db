//! Implements a struct that holds the state of the server.

use std::{path::PathBuf, sync::Arc};

use crate::Dataset;

/// The year the `yr` category 0 refers to in the bike sharing dataset.
pub const DEFAULT_FIRST_YEAR: u16 = 2011;

/// The state of the server.
///
/// The dataset is loaded once before the server starts and is only read
/// from afterwards, so it is shared between requests without a lock.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The hourly and daily rental records.
    pub dataset: Arc<Dataset>,

    /// The calendar year shown for the year category 0.
    pub first_year: u16,

    /// The directory static files such as ECharts and CSS are served from.
    pub static_dir: PathBuf,
}

impl AppState {
    /// Create a new [AppState] that serves `dataset`.
    ///
    /// `first_year` is the calendar year of the year category 0, year category
    /// 1 is displayed as `first_year + 1` and so on.
    pub fn new(dataset: Dataset, first_year: u16, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            dataset: Arc::new(dataset),
            first_year,
            static_dir: static_dir.into(),
        }
    }
}
