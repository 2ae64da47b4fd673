//! Property listing routes
//!
//! None of these fail on a backend outage; the sample catalog stands in.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::api::DataResponse;
use crate::app::AppState;
use crate::domain::content;
use crate::domain::property::{ListingResponse, PropertyDetailResponse, PropertyView, KEY_FEATURES};

pub const FEATURED_HEADING: &str = "Featured Properties";
pub const ALL_HEADING: &str = "All Properties";

#[derive(Debug, Deserialize, Default)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

/// GET /properties/featured
pub async fn featured(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let listing = state.listings.featured().await;
    DataResponse::new(ListingResponse::new(FEATURED_HEADING, None, listing))
}

/// GET /properties/search?q=
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let query = params
        .q
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty());

    tracing::info!(query = query.as_deref().unwrap_or(""), "Searching properties");

    let response = match query {
        Some(q) => {
            let listing = state.listings.search(&q).await;
            ListingResponse::new(format!("Search Results for \"{}\"", q), Some(q), listing)
        }
        None => ListingResponse::new(ALL_HEADING, None, state.listings.search("").await),
    };

    DataResponse::new(response)
}

/// GET /properties/:id
pub async fn get_property(
    State(state): State<Arc<AppState>>,
    Path(property_id): Path<String>,
) -> impl IntoResponse {
    tracing::info!(property_id = %property_id, "Getting property");

    let (property, source) = state.listings.find(&property_id).await;

    DataResponse::new(PropertyDetailResponse {
        property: PropertyView::from(property),
        source,
        features: KEY_FEATURES,
        agent: content::contact_details(),
    })
}
