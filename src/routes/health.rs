use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub services: ServiceHealth,
}

#[derive(Serialize)]
pub struct ServiceHealth {
    pub supabase: String,
}

/// Health check endpoint - public
///
/// Listings keep working from the sample catalog while Supabase is down,
/// so an unreachable backend only degrades the service.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let supabase = state.supabase.health_check().await;

    if let Err(e) = &supabase {
        tracing::warn!(error = %e, "Supabase health check failed");
    }

    let (status, supabase_status) = if supabase.is_ok() {
        ("healthy", "ok")
    } else {
        ("degraded", "error")
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        services: ServiceHealth {
            supabase: supabase_status.to_string(),
        },
    })
}
