//! A dashboard for exploring a bicycle-rental dataset.
//!
//! The hourly and daily rental records are loaded once from CSV at startup
//! and served as HTML pages with interactive charts: average rentals per
//! season, monthly casual and registered rental trends filtered by year and
//! month, and the average number of rentals for each hour of the day.
//!
//! The aggregation logic lives in [rentals] and can be used without the web
//! server.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::response::{IntoResponse, Response};
use axum_server::Handle;
use tokio::signal;

mod app_state;
mod dashboard;
mod dataset;
mod endpoints;
mod error_pages;
mod html;
mod logging;
mod navigation;
pub mod rentals;
mod routing;
#[cfg(test)]
mod test_utils;

pub use app_state::{AppState, DEFAULT_FIRST_YEAR};
pub use dataset::{
    DailyRecord, Dataset, HourlyRecord, Season, parse_daily_csv, parse_hourly_csv,
};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

use crate::error_pages::{InternalServerError, bad_request_response};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A dataset file could not be opened or read.
    ///
    /// `path` is the file that was being read and `message` is the
    /// underlying IO error as a string.
    #[error("could not read the dataset file \"{path}\": {message}")]
    DatasetIo {
        /// The path of the file that could not be read.
        path: String,
        /// The underlying IO error message.
        message: String,
    },

    /// The CSV had issues that prevented it from being parsed, e.g., a
    /// missing column, a non-numeric count or a month outside 1-12.
    #[error("could not parse the CSV data: {0}")]
    InvalidCsv(String),

    /// A month number outside the range 1-12 was used in a filter.
    #[error("{0} is not a valid month, expected a number from 1 to 12")]
    InvalidMonth(u8),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidMonth(month) => bad_request_response(
                "Invalid month filter",
                &format!(
                    "{month} is not a month. Pick months between 1 (January) and 12 (December)."
                ),
            ),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}
