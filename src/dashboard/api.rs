//! JSON access to the monthly rental series.

use std::collections::BTreeMap;

use axum::{Json, extract::State};
use axum_extra::extract::Query;
use serde::Serialize;

use crate::{
    Error,
    dashboard::{DashboardState, charts::short_month_name, filters::MonthlyFilterQuery, year_label},
    rentals::{MonthlySeries, aggregate_monthly_rentals},
};

/// The monthly casual and registered totals keyed by year label.
///
/// Each year maps to twelve values in calendar order, `null` where the month
/// had no rentals in the selection.
#[derive(Debug, Serialize)]
pub struct MonthlyRentalsJson {
    months: Vec<&'static str>,
    casual: BTreeMap<String, Vec<Option<u64>>>,
    registered: BTreeMap<String, Vec<Option<u64>>>,
    row_count: usize,
    no_data: bool,
}

/// Get the monthly rental series for the same filters as the analysis page.
///
/// # Errors
/// Returns [Error::InvalidMonth] if the query has a month outside 1 to 12.
pub async fn get_monthly_rentals_json(
    State(state): State<DashboardState>,
    Query(query): Query<MonthlyFilterQuery>,
) -> Result<Json<MonthlyRentalsJson>, Error> {
    let selection = query.resolve(&state.dataset.daily_years())?;
    let rentals =
        aggregate_monthly_rentals(&state.dataset.daily, &selection.years, &selection.months);

    Ok(Json(MonthlyRentalsJson {
        months: rentals
            .casual
            .months()
            .into_iter()
            .map(short_month_name)
            .collect(),
        casual: columns_by_label(&rentals.casual, state.first_year),
        registered: columns_by_label(&rentals.registered, state.first_year),
        row_count: rentals.row_count,
        no_data: rentals.is_empty(),
    }))
}

fn columns_by_label(series: &MonthlySeries, first_year: u16) -> BTreeMap<String, Vec<Option<u64>>> {
    series
        .columns()
        .map(|(year, values)| (year_label(first_year, year), values.to_vec()))
        .collect()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{Value, json};

    use crate::{build_router, test_utils::sample_app_state};

    fn get_test_server() -> TestServer {
        TestServer::new(build_router(sample_app_state()))
    }

    #[tokio::test]
    async fn returns_summer_2012_series() {
        let server = get_test_server();

        let response = server
            .get("/api/monthly?years=1&months=6&months=7&months=8")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["no_data"], false);
        assert_eq!(body["row_count"], 3);
        assert_eq!(body["months"][0], "Jan");
        assert_eq!(body["months"].as_array().unwrap().len(), 12);
        assert_eq!(
            body["casual"],
            json!({
                "2012": [null, null, null, null, null, 900, 1000, 1500, null, null, null, null]
            })
        );
        assert_eq!(body["registered"]["2012"][7], 5500);
    }

    #[tokio::test]
    async fn missing_months_are_null_not_zero() {
        let server = get_test_server();

        let response = server.get("/api/monthly").await;

        let body: Value = response.json();
        assert_eq!(body["casual"]["2011"][0], 100);
        assert_eq!(body["casual"]["2011"][1], Value::Null);
        assert_eq!(body["casual"]["2011"][5], 900);
    }

    #[tokio::test]
    async fn empty_selection_reports_no_data() {
        let server = get_test_server();

        let response = server.get("/api/monthly?filtered=true").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["no_data"], true);
        assert_eq!(body["row_count"], 0);
        assert_eq!(body["casual"], json!({}));
    }

    #[tokio::test]
    async fn out_of_range_month_is_a_bad_request() {
        let server = get_test_server();

        server
            .get("/api/monthly?start_month=0")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
