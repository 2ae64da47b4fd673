use axum::extract::FromRequest;

use crate::error::ApiError;

/// `axum::Json` whose rejections come back as `{"code","message"}`
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
