//! Request ID middleware for request tracing

use axum::http::HeaderName;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

/// Header name for request ID
pub const X_REQUEST_ID: &str = "x-request-id";

/// Creates a layered middleware that:
/// 1. Sets a request ID if not present (using UUID v4)
/// 2. Propagates the request ID to the response
pub fn request_id_layer() -> (SetRequestIdLayer<MakeRequestUuid>, PropagateRequestIdLayer) {
    let header_name = HeaderName::from_static(X_REQUEST_ID);

    (
        SetRequestIdLayer::new(header_name.clone(), MakeRequestUuid),
        PropagateRequestIdLayer::new(header_name),
    )
}

/// Extension trait for extracting request ID from headers
pub trait RequestIdExt {
    fn request_id(&self) -> Option<&str>;
}

impl RequestIdExt for axum::http::HeaderMap {
    fn request_id(&self) -> Option<&str> {
        self.get(X_REQUEST_ID)?.to_str().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_app, UNREACHABLE_URL};
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    #[tokio::test]
    async fn responses_echo_the_callers_request_id() {
        let response = test_app(UNREACHABLE_URL)
            .oneshot(
                Request::builder()
                    .uri("/pages/content")
                    .header(X_REQUEST_ID, "req-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers().request_id(), Some("req-123"));
    }

    #[tokio::test]
    async fn responses_get_a_fresh_request_id_otherwise() {
        let response = test_app(UNREACHABLE_URL)
            .oneshot(Request::builder().uri("/pages/content").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let id = response.headers().request_id().unwrap();
        assert!(uuid::Uuid::parse_str(id).is_ok());
    }
}
