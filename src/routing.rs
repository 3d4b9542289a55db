//! Application router configuration.

use axum::{Router, response::Redirect, routing::get};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    dashboard::{get_analysis_page, get_hourly_page, get_monthly_rentals_json},
    endpoints,
    error_pages::{get_404_not_found, get_internal_server_error_page},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.static_dir);

    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::ANALYSIS_VIEW, get(get_analysis_page))
        .route(endpoints::HOURLY_VIEW, get(get_hourly_page))
        .route(endpoints::MONTHLY_RENTALS_API, get(get_monthly_rentals_json))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .nest_service(endpoints::STATIC, static_dir)
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the analysis page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::ANALYSIS_VIEW)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;

    use crate::{
        build_router,
        endpoints,
        test_utils::{assert_valid_html, sample_app_state},
    };

    fn get_test_server() -> TestServer {
        TestServer::new(build_router(sample_app_state()))
    }

    #[tokio::test]
    async fn root_redirects_to_analysis_page() {
        let server = get_test_server();

        let response = server.get(endpoints::ROOT).await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), endpoints::ANALYSIS_VIEW);
    }

    #[tokio::test]
    async fn unknown_route_gets_404_page() {
        let server = get_test_server();

        let response = server.get("/does-not-exist").await;

        response.assert_status_not_found();
        let html = scraper::Html::parse_document(&response.text());
        assert_valid_html(&html);
    }

    #[tokio::test]
    async fn error_route_gets_500_page() {
        let server = get_test_server();

        server
            .get(endpoints::INTERNAL_ERROR_VIEW)
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn pages_are_served() {
        let server = get_test_server();

        server.get(endpoints::ANALYSIS_VIEW).await.assert_status_ok();
        server.get(endpoints::HOURLY_VIEW).await.assert_status_ok();
        server
            .get(endpoints::MONTHLY_RENTALS_API)
            .await
            .assert_status_ok();
    }
}
