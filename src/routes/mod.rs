pub mod auth;
pub mod contact;
pub mod health;
pub mod pages;
pub mod properties;

use axum::{routing::get, routing::post, Router};
use std::sync::Arc;

use crate::app::AppState;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        // Public routes
        .route("/health", get(health::health_check))
        // Page content
        .route("/pages/content", get(pages::get_content))
        .route("/pages/home", get(pages::get_home))
        // Listings
        .route("/properties/featured", get(properties::featured))
        .route("/properties/search", get(properties::search))
        .route("/properties/:property_id", get(properties::get_property))
        // Contact form
        .route("/contact", post(contact::submit_contact))
        // Auth
        .route("/auth/signin", post(auth::sign_in))
        .route("/auth/signup", post(auth::sign_up))
        .route("/auth/signout", post(auth::sign_out))
        .route("/auth/session", get(auth::get_session))
}
