#![allow(missing_docs)]

use axum::{body::Body, response::Response};
use scraper::{Html, Selector};
use time::Month;

use crate::{AppState, DailyRecord, Dataset, HourlyRecord, Season};

pub(crate) async fn parse_html_document(response: Response<Body>) -> Html {
    Html::parse_document(&response_text(response).await)
}

async fn response_text(response: Response<Body>) -> String {
    let body = response.into_body();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Could not get response body");

    String::from_utf8_lossy(&body).to_string()
}

#[track_caller]
pub(crate) fn assert_valid_html(html: &Html) {
    assert!(
        html.errors.is_empty(),
        "Got HTML parsing errors: {:?}",
        html.errors
    );
}

#[track_caller]
pub(crate) fn assert_element_exists(html: &Html, selector: &str) {
    let parsed = Selector::parse(selector).unwrap();
    assert!(
        html.select(&parsed).next().is_some(),
        "Could not find '{selector}' in {}",
        html.html()
    );
}

#[track_caller]
pub(crate) fn assert_element_missing(html: &Html, selector: &str) {
    let parsed = Selector::parse(selector).unwrap();
    assert!(
        html.select(&parsed).next().is_none(),
        "Found unexpected '{selector}' in {}",
        html.html()
    );
}

pub(crate) fn daily(year: u16, month: Month, casual: u64, registered: u64) -> DailyRecord {
    DailyRecord {
        year,
        month,
        casual,
        registered,
    }
}

pub(crate) fn hourly(season: Season, year: u16, hour: u8, count: u64) -> HourlyRecord {
    HourlyRecord {
        season,
        year,
        hour,
        count,
    }
}

/// A small dataset covering both years.
///
/// August 2012 is the busiest month and 17:00 the busiest hour.
pub(crate) fn sample_dataset() -> Dataset {
    let daily = vec![
        daily(0, Month::January, 100, 1_000),
        daily(0, Month::June, 500, 3_000),
        daily(0, Month::June, 400, 2_500),
        daily(1, Month::June, 900, 4_000),
        daily(1, Month::July, 1_000, 4_500),
        daily(1, Month::August, 1_500, 5_500),
    ];
    let hourly = vec![
        hourly(Season::Spring, 0, 8, 100),
        hourly(Season::Summer, 0, 8, 200),
        hourly(Season::Fall, 1, 17, 600),
        hourly(Season::Fall, 1, 17, 400),
        hourly(Season::Winter, 1, 3, 10),
    ];

    Dataset::new(hourly, daily)
}

pub(crate) fn sample_app_state() -> AppState {
    AppState::new(sample_dataset(), 2011, "static/")
}
