//! Full-page responses for requests that could not be served.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// The page shown when a server-side failure stops a page from rendering.
pub struct InternalServerError<'a> {
    pub description: &'a str,
    pub fix: &'a str,
}

impl Default for InternalServerError<'_> {
    fn default() -> Self {
        Self {
            description: "Sorry, something went wrong.",
            fix: "Try again later or check the server logs.",
        }
    }
}

impl IntoResponse for InternalServerError<'_> {
    fn into_response(self) -> Response {
        page_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
            self.description,
            self.fix,
        )
    }
}

pub async fn get_internal_server_error_page() -> Response {
    InternalServerError::default().into_response()
}

pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

pub fn get_404_not_found_response() -> Response {
    page_response(
        StatusCode::NOT_FOUND,
        "Not Found",
        "Something's missing.",
        "Sorry, we can't find that page. The charts are on the dashboard.",
    )
}

/// A page explaining why the request's parameters were rejected.
pub fn bad_request_response(description: &str, fix: &str) -> Response {
    page_response(StatusCode::BAD_REQUEST, "Bad Request", description, fix)
}

fn page_response(status_code: StatusCode, title: &str, description: &str, fix: &str) -> Response {
    let header = status_code.as_u16().to_string();

    (status_code, error_view(title, &header, description, fix)).into_response()
}
