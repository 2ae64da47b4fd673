//! Property reads with the sample-catalog fallback.
//!
//! Each read goes to the live `properties` table first. The sample catalog is
//! substituted exactly when that query fails or returns no rows.

use tracing::{info, instrument, warn};

use super::supabase::{SupabaseClient, SupabaseError};
use crate::domain::property::{Listing, ListingSource, Property};
use crate::domain::sample;

const TABLE: &str = "properties";

#[derive(Clone)]
pub struct Listings {
    supabase: SupabaseClient,
    featured_limit: u32,
}

impl Listings {
    pub fn new(supabase: SupabaseClient, featured_limit: u32) -> Self {
        Self {
            supabase,
            featured_limit,
        }
    }

    /// Home page selection: the first `featured_limit` live rows.
    #[instrument(skip(self))]
    pub async fn featured(&self) -> Listing {
        let live = self
            .supabase
            .select::<Property>(TABLE, &[("limit", self.featured_limit.to_string())])
            .await;

        with_fallback(live, sample::listings)
    }

    /// Case-insensitive substring search over title, location and description.
    /// A blank query lists everything.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> Listing {
        let query = query.trim();
        if query.is_empty() {
            let live = self.supabase.select::<Property>(TABLE, &[]).await;
            return with_fallback(live, sample::listings);
        }

        let live = self
            .supabase
            .select::<Property>(TABLE, &[("or", search_filter(query))])
            .await;

        with_fallback(live, || sample::search(query))
    }

    /// Property page lookup; falls back to the matching sample, or the first one.
    #[instrument(skip(self))]
    pub async fn find(&self, id: &str) -> (Property, ListingSource) {
        let live = self
            .supabase
            .select::<Property>(
                TABLE,
                &[("id", format!("eq.{}", id)), ("limit", "1".to_string())],
            )
            .await;

        let listing = with_fallback(live, || vec![sample::detail(id)]);
        match listing.properties.into_iter().next() {
            Some(property) => (property, listing.source),
            None => (sample::detail(id), ListingSource::Sample),
        }
    }
}

fn with_fallback<F>(live: Result<Vec<Property>, SupabaseError>, sample: F) -> Listing
where
    F: FnOnce() -> Vec<Property>,
{
    match live {
        Ok(properties) if !properties.is_empty() => {
            info!(count = properties.len(), "Serving live listings");
            Listing {
                properties,
                source: ListingSource::Live,
            }
        }
        Ok(_) => {
            info!("No live listings, serving sample catalog");
            Listing {
                properties: sample(),
                source: ListingSource::Sample,
            }
        }
        Err(e) => {
            warn!(error = %e, "Listing query failed, serving sample catalog");
            Listing {
                properties: sample(),
                source: ListingSource::Sample,
            }
        }
    }
}

/// PostgREST `or` filter matching `query` anywhere in the three text columns.
pub fn search_filter(query: &str) -> String {
    let pattern = quote_filter_value(&format!("*{}*", query));
    format!(
        "(title.ilike.{p},location.ilike.{p},description.ilike.{p})",
        p = pattern
    )
}

/// Double-quote a filter value so commas, dots and parentheses stay literal.
fn quote_filter_value(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{}\"", escaped)
}
