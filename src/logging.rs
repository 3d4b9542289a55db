//! Middleware for logging requests and responses.

use std::time::Instant;

use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// The maximum number of characters of a response body that are logged at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// The request line and the response status are logged at the `info` level.
/// The response body is logged at the `info` level, truncated to
/// [LOG_BODY_LENGTH_LIMIT] characters, and in full at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    tracing::info!("Received request: {method} {uri}");

    let start = Instant::now();
    let response = next.run(request).await;
    let elapsed = start.elapsed();

    let (parts, body) = response.into_parts();
    let body_bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("Could not read the response body for {method} {uri}: {error}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    let body_text = String::from_utf8_lossy(&body_bytes);

    tracing::info!(
        "Sending response: {} for {method} {uri} in {elapsed:?}\nbody: {}",
        parts.status,
        truncate_body(&body_text)
    );
    tracing::debug!("Full response body: {body_text:?}");

    Response::from_parts(parts, Body::from(body_bytes))
}

fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(LOG_BODY_LENGTH_LIMIT) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, middleware, routing::get};
    use axum_test::TestServer;

    use super::{LOG_BODY_LENGTH_LIMIT, logging_middleware, truncate_body};

    #[test]
    fn short_body_is_not_truncated() {
        assert_eq!(truncate_body("hello"), "hello");
    }

    #[test]
    fn long_body_is_truncated_on_a_char_boundary() {
        let body = "é".repeat(LOG_BODY_LENGTH_LIMIT + 10);

        let truncated = truncate_body(&body);

        assert_eq!(
            truncated,
            format!("{}...", "é".repeat(LOG_BODY_LENGTH_LIMIT))
        );
    }

    async fn get_long_body() -> String {
        "x".repeat(LOG_BODY_LENGTH_LIMIT * 2)
    }

    #[tokio::test]
    async fn middleware_passes_response_through() {
        let app = Router::new()
            .route("/", get(get_long_body))
            .layer(middleware::from_fn(logging_middleware));
        let server = TestServer::new(app);

        let response = server.get("/").await;

        response.assert_status_ok();
        assert_eq!(response.text(), get_long_body().await);
    }
}
