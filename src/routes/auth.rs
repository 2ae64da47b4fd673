//! Authentication routes
//!
//! These routes proxy the email/phone password flows to Supabase Auth.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::api::{ApiJson, Created, DataResponse, NoContent};
use crate::app::AppState;
use crate::auth::{BearerToken, MaybeAuth};
use crate::domain::auth::{
    AuthMode, AuthRequest, AuthResponse, AuthSession, Identifier, SessionResponse, SignUpOutcome,
    SupabaseAuthResponse, User, SIGNED_IN_MESSAGE, SIGNED_UP_MESSAGE,
};
use crate::error::{ApiError, ApiResult, TRY_AGAIN};
use crate::services::SupabaseError;

/// POST /auth/signin
pub async fn sign_in(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<AuthRequest>,
) -> ApiResult<Response> {
    authenticate(&state, AuthMode::SignIn, req).await
}

/// POST /auth/signup
pub async fn sign_up(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<AuthRequest>,
) -> ApiResult<Response> {
    authenticate(&state, AuthMode::SignUp, req).await
}

/// Dispatch one of the four method × mode calls.
async fn authenticate(state: &AppState, mode: AuthMode, req: AuthRequest) -> ApiResult<Response> {
    let method = req.method;
    let credentials = req.into_credentials().map_err(ApiError::BadRequest)?;

    tracing::info!(?method, ?mode, "Authenticating");

    match mode {
        AuthMode::SignIn => {
            let session = state
                .supabase
                .sign_in_with_password(&credentials)
                .await
                .map_err(|e| auth_error(e, mode))?;

            let response = signed_in(SIGNED_IN_MESSAGE, session);
            Ok(DataResponse::new(response).into_response())
        }
        AuthMode::SignUp => {
            let outcome = state
                .supabase
                .sign_up(&credentials)
                .await
                .map_err(|e| auth_error(e, mode))?;

            let response = match outcome {
                SignUpOutcome::Session(session) => signed_in(SIGNED_UP_MESSAGE, session),
                SignUpOutcome::PendingConfirmation(user) => {
                    let confirmation_required = user.confirmation_sent_at.is_some()
                        || matches!(credentials.identifier, Identifier::Phone(_));
                    AuthResponse {
                        message: SIGNED_UP_MESSAGE.to_string(),
                        user: User::from(user),
                        session: None,
                        confirmation_required,
                    }
                }
            };

            Ok(Created(response).into_response())
        }
    }
}

fn signed_in(message: &str, session: SupabaseAuthResponse) -> AuthResponse {
    AuthResponse {
        message: message.to_string(),
        user: session.user.into(),
        session: Some(AuthSession {
            access_token: session.access_token,
            refresh_token: session.refresh_token,
            expires_in: session.expires_in,
        }),
        confirmation_required: false,
    }
}

/// Identity-service rejections are shown verbatim; everything else is generic.
fn auth_error(err: SupabaseError, mode: AuthMode) -> ApiError {
    match err.api_message() {
        Some(message) => match mode {
            AuthMode::SignIn => ApiError::unauthorized(message),
            AuthMode::SignUp => ApiError::bad_request(message),
        },
        None => {
            tracing::error!(error = %err, "Auth request failed");
            ApiError::upstream(TRY_AGAIN)
        }
    }
}

/// POST /auth/signout
///
/// Supabase Auth validates the token; a failed revoke is logged and ignored.
pub async fn sign_out(
    State(state): State<Arc<AppState>>,
    BearerToken(token): BearerToken,
) -> NoContent {
    if let Err(e) = state.supabase.sign_out(&token).await {
        tracing::warn!(error = %e, "Supabase sign out failed");
    }

    NoContent
}

/// GET /auth/session
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    MaybeAuth(auth): MaybeAuth,
) -> Json<DataResponse<SessionResponse>> {
    let Some(auth) = auth else {
        return Json(DataResponse::new(SessionResponse::anonymous()));
    };

    let session = match state.supabase.get_user(auth.token()).await {
        Ok(user) => SessionResponse {
            authenticated: true,
            user: Some(user.into()),
            expires_at: Some(auth.claims().exp),
        },
        Err(e) => {
            tracing::warn!(error = %e, user_id = %auth.user_id, "Session lookup failed");
            SessionResponse::anonymous()
        }
    };

    Json(DataResponse::new(session))
}

#[cfg(test)]
mod tests {
    use crate::domain::auth::{SIGNED_IN_MESSAGE, SIGNED_UP_MESSAGE};
    use crate::error::TRY_AGAIN;
    use crate::test_support::{
        get, get_authorized, jwks_backend, mint_token, post_json, spawn_backend, test_app,
        test_claims, TEST_USER_ID, UNREACHABLE_URL,
    };
    use axum::{
        extract::Query,
        http::{HeaderMap, StatusCode},
        routing::{get as get_route, post},
        Json, Router,
    };
    use parking_lot::Mutex;
    use std::collections::HashMap;
    use std::sync::Arc;

    fn session_body(email: Option<&str>, phone: Option<&str>) -> serde_json::Value {
        serde_json::json!({
            "access_token": "access",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "refresh",
            "user": {
                "id": "3f1c2a9e-8a4b-4c1e-9d7f-0b2a6c5e4d31",
                "email": email.unwrap_or(""),
                "phone": phone.unwrap_or(""),
                "created_at": "2024-05-01T10:00:00Z"
            }
        })
    }

    fn token_backend() -> Router {
        Router::new().route(
            "/auth/v1/token",
            post(
                |Query(q): Query<HashMap<String, String>>, Json(body): Json<serde_json::Value>| async move {
                    assert_eq!(q["grant_type"], "password");
                    if body["password"] != "correct-horse" {
                        return (
                            StatusCode::BAD_REQUEST,
                            Json(serde_json::json!({
                                "error": "invalid_grant",
                                "error_description": "Invalid login credentials"
                            })),
                        );
                    }
                    let email = body.get("email").and_then(|v| v.as_str());
                    let phone = body.get("phone").and_then(|v| v.as_str());
                    (StatusCode::OK, Json(session_body(email, phone)))
                },
            ),
        )
    }

    #[tokio::test]
    async fn email_sign_in_returns_session_and_message() {
        let url = spawn_backend(token_backend()).await;
        let (status, body) = post_json(
            test_app(&url),
            "/auth/signin",
            serde_json::json!({
                "method": "email",
                "email": "ada@example.com",
                "password": "correct-horse"
            }),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let data = &body["data"];
        assert_eq!(data["message"], SIGNED_IN_MESSAGE);
        assert_eq!(data["session"]["access_token"], "access");
        assert_eq!(data["user"]["email"], "ada@example.com");
        assert!(data["user"].get("phone").map_or(true, |p| p.is_null()));
    }

    #[tokio::test]
    async fn phone_sign_in_sends_the_normalized_number() {
        let url = spawn_backend(token_backend()).await;
        let (status, body) = post_json(
            test_app(&url),
            "/auth/signin",
            serde_json::json!({
                "method": "phone",
                "phone": "+1 (555) 123-4567",
                "password": "correct-horse"
            }),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["user"]["phone"], "+15551234567");
    }

    #[tokio::test]
    async fn rejected_credentials_surface_the_supabase_message() {
        let url = spawn_backend(token_backend()).await;
        let (status, body) = post_json(
            test_app(&url),
            "/auth/signin",
            serde_json::json!({
                "method": "email",
                "email": "ada@example.com",
                "password": "wrong-horse"
            }),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Invalid login credentials");
    }

    #[tokio::test]
    async fn sign_up_pending_confirmation() {
        let backend = Router::new().route(
            "/auth/v1/signup",
            post(|Json(body): Json<serde_json::Value>| async move {
                Json(serde_json::json!({
                    "id": "3f1c2a9e-8a4b-4c1e-9d7f-0b2a6c5e4d31",
                    "email": body["email"],
                    "confirmation_sent_at": "2024-05-01T10:00:00Z"
                }))
            }),
        );
        let url = spawn_backend(backend).await;

        let (status, body) = post_json(
            test_app(&url),
            "/auth/signup",
            serde_json::json!({
                "method": "email",
                "email": "new@example.com",
                "password": "secret1"
            }),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let data = &body["data"];
        assert_eq!(data["message"], SIGNED_UP_MESSAGE);
        assert_eq!(data["confirmation_required"], true);
        assert!(data.get("session").is_none());
    }

    #[tokio::test]
    async fn sign_up_rejection_is_a_bad_request() {
        let backend = Router::new().route(
            "/auth/v1/signup",
            post(|| async {
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(serde_json::json!({
                        "code": 422,
                        "error_code": "user_already_exists",
                        "msg": "User already registered"
                    })),
                )
            }),
        );
        let url = spawn_backend(backend).await;

        let (status, body) = post_json(
            test_app(&url),
            "/auth/signup",
            serde_json::json!({
                "method": "email",
                "email": "ada@example.com",
                "password": "secret1"
            }),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "User already registered");
    }

    #[tokio::test]
    async fn unreachable_identity_service_is_generic() {
        let (status, body) = post_json(
            test_app(UNREACHABLE_URL),
            "/auth/signin",
            serde_json::json!({
                "method": "email",
                "email": "ada@example.com",
                "password": "secret1"
            }),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["message"], TRY_AGAIN);
    }

    #[tokio::test]
    async fn invalid_input_is_rejected_locally() {
        let (status, body) = post_json(
            test_app(UNREACHABLE_URL),
            "/auth/signup",
            serde_json::json!({
                "method": "phone",
                "phone": "5551234567",
                "password": "secret1"
            }),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Include country code (e.g., +1 for US)");
    }

    #[tokio::test]
    async fn sign_out_requires_a_token() {
        let (status, body) =
            post_json(test_app(UNREACHABLE_URL), "/auth/signout", serde_json::json!({}), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn session_is_anonymous_without_a_token() {
        let (status, body) = get(test_app(UNREACHABLE_URL), "/auth/session").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["authenticated"], false);
        assert!(body["data"].get("user").is_none());
    }

    #[tokio::test]
    async fn missing_password_is_a_json_bad_request() {
        let (status, body) = post_json(
            test_app(UNREACHABLE_URL),
            "/auth/signin",
            serde_json::json!({ "method": "email", "email": "ada@example.com" }),
            None,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
        assert!(body["message"].as_str().unwrap().contains("password"));
    }

    #[tokio::test]
    async fn sign_out_hands_the_token_to_supabase() {
        let seen = Arc::new(Mutex::new(None::<String>));
        let sink = seen.clone();
        let backend = Router::new().route(
            "/auth/v1/logout",
            post(move |headers: HeaderMap| {
                let sink = sink.clone();
                async move {
                    let auth = headers["authorization"].to_str().unwrap().to_string();
                    *sink.lock() = Some(auth);
                    StatusCode::NO_CONTENT
                }
            }),
        );
        let url = spawn_backend(backend).await;

        // Legacy HS256 projects publish no JWKS; the token goes through untouched
        let (status, body) = post_json(
            test_app(&url),
            "/auth/signout",
            serde_json::json!({}),
            Some("Bearer legacy-hs256-token"),
        )
        .await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_null());
        assert_eq!(seen.lock().as_deref(), Some("Bearer legacy-hs256-token"));
    }

    #[tokio::test]
    async fn sign_out_succeeds_even_if_revoke_fails() {
        let (status, _) = post_json(
            test_app(UNREACHABLE_URL),
            "/auth/signout",
            serde_json::json!({}),
            Some("Bearer whatever"),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    fn session_backend() -> Router {
        jwks_backend().route(
            "/auth/v1/user",
            get_route(|headers: HeaderMap| async move {
                assert!(headers["authorization"]
                    .to_str()
                    .unwrap()
                    .starts_with("Bearer "));
                Json(serde_json::json!({
                    "id": TEST_USER_ID,
                    "email": "ada@example.com",
                    "phone": "",
                    "created_at": "2024-05-01T10:00:00Z"
                }))
            }),
        )
    }

    #[tokio::test]
    async fn session_reports_the_signed_in_user() {
        let url = spawn_backend(session_backend()).await;
        let exp = chrono::Utc::now().timestamp() + 3600;
        let token = mint_token(&test_claims(&url, exp));

        let (status, body) =
            get_authorized(test_app(&url), "/auth/session", &format!("Bearer {}", token)).await;

        assert_eq!(status, StatusCode::OK);
        let data = &body["data"];
        assert_eq!(data["authenticated"], true);
        assert_eq!(data["user"]["id"], TEST_USER_ID);
        assert_eq!(data["user"]["email"], "ada@example.com");
        assert_eq!(data["expires_at"], exp);
    }

    #[tokio::test]
    async fn expired_session_is_anonymous() {
        let url = spawn_backend(session_backend()).await;
        let exp = chrono::Utc::now().timestamp() - 3600;
        let token = mint_token(&test_claims(&url, exp));

        let (status, body) =
            get_authorized(test_app(&url), "/auth/session", &format!("Bearer {}", token)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["authenticated"], false);
        assert!(body["data"].get("expires_at").is_none());
    }
}
