//! Composed page content

use axum::{extract::State, response::IntoResponse};
use serde::Serialize;
use std::sync::Arc;

use crate::api::DataResponse;
use crate::app::AppState;
use crate::domain::content::{
    self, ContactDetails, Footer, Hero, Navigation, Section, Service, Testimonial,
};
use crate::domain::property::ListingResponse;
use crate::routes::properties::FEATURED_HEADING;

/// Sections that never change between requests
#[derive(Debug, Serialize)]
pub struct SiteContent {
    pub navigation: Navigation,
    pub hero: Hero,
    pub services: Section<Vec<Service>>,
    pub testimonials: Section<Vec<Testimonial>>,
    pub contact: Section<ContactDetails>,
    pub footer: Footer,
}

impl SiteContent {
    fn load() -> Self {
        Self {
            navigation: content::navigation(),
            hero: content::hero(),
            services: content::services_section(),
            testimonials: content::testimonials_section(),
            contact: content::contact_section(),
            footer: content::footer(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HomePage {
    #[serde(flatten)]
    pub content: SiteContent,
    pub featured: ListingResponse,
}

/// GET /pages/content
pub async fn get_content() -> impl IntoResponse {
    DataResponse::new(SiteContent::load())
}

/// GET /pages/home
pub async fn get_home(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let listing = state.listings.featured().await;

    DataResponse::new(HomePage {
        content: SiteContent::load(),
        featured: ListingResponse::new(FEATURED_HEADING, None, listing),
    })
}
