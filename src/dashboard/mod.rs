//! The dashboard pages and the JSON API for the monthly rental series.
//!
//! This module is organized into several submodules:
//! - `analysis`: The rental analysis page with the seasonal and monthly charts
//! - `hourly`: The "Get to Know" page with the hourly rental profile
//! - `api`: JSON access to the monthly series
//! - `charts`: ECharts chart generation
//! - `filters`: Query parameters for the year and month filters
//! - `tables`: Monthly totals table

use std::sync::Arc;

use axum::extract::FromRef;

use crate::{AppState, Dataset};

mod analysis;
mod api;
mod charts;
mod filters;
mod hourly;
mod tables;

pub use analysis::get_analysis_page;
pub use api::get_monthly_rentals_json;
pub use hourly::get_hourly_page;

/// The state needed by the dashboard handlers.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The rental records loaded at startup.
    pub dataset: Arc<Dataset>,
    /// The calendar year of the year category 0.
    pub first_year: u16,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            dataset: state.dataset.clone(),
            first_year: state.first_year,
        }
    }
}

/// The calendar year shown for the year category `year`, e.g. "2012" for 1.
pub(crate) fn year_label(first_year: u16, year: u16) -> String {
    (u32::from(first_year) + u32::from(year)).to_string()
}
