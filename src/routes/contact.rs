use axum::{extract::State, http::HeaderMap};
use std::sync::Arc;

use crate::api::{ApiJson, Created};
use crate::app::AppState;
use crate::domain::contact::{ContactReceipt, ContactSubmission, FAILED_MESSAGE, SENT_MESSAGE};
use crate::error::{ApiError, ApiResult};
use crate::middleware::RequestIdExt;

const TABLE: &str = "contact_submissions";

/// POST /contact
///
/// Success is the only outcome that lets the form clear its fields.
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    ApiJson(req): ApiJson<ContactSubmission>,
) -> ApiResult<Created<ContactReceipt>> {
    let submission = req.validated().map_err(ApiError::BadRequest)?;

    state
        .supabase
        .insert(TABLE, std::slice::from_ref(&submission))
        .await
        .map_err(|e| {
            tracing::error!(
                error = %e,
                request_id = headers.request_id().unwrap_or("-"),
                "Contact submission failed"
            );
            ApiError::upstream(FAILED_MESSAGE)
        })?;

    tracing::info!(
        request_id = headers.request_id().unwrap_or("-"),
        "Contact submission stored"
    );

    Ok(Created(ContactReceipt {
        message: SENT_MESSAGE,
    }))
}

#[cfg(test)]
mod tests {
    use crate::domain::contact::{FAILED_MESSAGE, SENT_MESSAGE};
    use crate::test_support::{post_json, spawn_backend, test_app, UNREACHABLE_URL};
    use axum::{http::StatusCode, routing::post, Json, Router};
    use parking_lot::Mutex;
    use std::sync::Arc;

    fn form() -> serde_json::Value {
        serde_json::json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "+1 (555) 010-0100",
            "message": "Looking for a loft downtown."
        })
    }

    #[tokio::test]
    async fn stores_the_submission_and_confirms() {
        let received = Arc::new(Mutex::new(Vec::<serde_json::Value>::new()));
        let sink = received.clone();
        let backend = Router::new().route(
            "/rest/v1/contact_submissions",
            post(move |Json(rows): Json<serde_json::Value>| {
                let sink = sink.clone();
                async move {
                    sink.lock().push(rows);
                    StatusCode::CREATED
                }
            }),
        );
        let url = spawn_backend(backend).await;

        let (status, body) = post_json(test_app(&url), "/contact", form(), None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["message"], SENT_MESSAGE);

        let rows = received.lock();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0]["name"], "Ada Lovelace");
        assert_eq!(rows[0][0]["message"], "Looking for a loft downtown.");
    }

    #[tokio::test]
    async fn backend_failure_is_a_generic_error() {
        let (status, body) = post_json(test_app(UNREACHABLE_URL), "/contact", form(), None).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["message"], FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn rejected_insert_is_the_same_generic_error() {
        let backend = Router::new().route(
            "/rest/v1/contact_submissions",
            post(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(serde_json::json!({ "message": "new row violates row-level security policy" })),
                )
            }),
        );
        let url = spawn_backend(backend).await;

        let (status, body) = post_json(test_app(&url), "/contact", form(), None).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["message"], FAILED_MESSAGE);
    }

    #[tokio::test]
    async fn blank_fields_never_reach_the_backend() {
        let mut incomplete = form();
        incomplete["message"] = serde_json::json!("   ");

        let (status, body) =
            post_json(test_app(UNREACHABLE_URL), "/contact", incomplete, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Missing required fields: message");
    }

    #[tokio::test]
    async fn malformed_json_is_a_json_bad_request() {
        let (status, body) = post_json(
            test_app(UNREACHABLE_URL),
            "/contact",
            serde_json::json!(42),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
        assert!(body["message"].as_str().unwrap().contains("JSON"));
    }
}
