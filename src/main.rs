mod api;
mod app;
mod auth;
mod config;
mod domain;
mod error;
mod logging;
mod middleware;
mod routes;
mod services;

#[cfg(test)]
mod test_support;

use anyhow::Result;

use services::SupabaseClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = config::Settings::from_env()?;

    // Initialize logging
    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        supabase_url = %settings.supabase_url,
        "Starting Luxe Properties backend"
    );

    // One pooled client for every Supabase call
    let supabase = SupabaseClient::new(
        &settings.supabase_url,
        &settings.supabase_anon_key,
        settings.supabase_timeout_seconds,
    )?;

    // Listings fall back to the sample catalog, so an unhealthy backend is not fatal
    tokio::spawn({
        let supabase = supabase.clone();
        async move {
            match supabase.health_check().await {
                Ok(()) => tracing::info!("Supabase is healthy"),
                Err(e) => tracing::warn!(error = %e, "Supabase health check failed - serving sample listings until it recovers"),
            }
        }
    });

    // Create JWKS cache for session token verification
    let jwks_cache = auth::JwksCache::new(
        supabase.http_client().clone(),
        settings.supabase_jwt_jwks_url.clone(),
        settings.supabase_jwt_issuer.clone(),
        settings.supabase_jwt_audience.clone(),
        settings.jwks_cache_ttl_seconds,
    );

    // Optionally warm the JWKS cache
    if let Err(e) = jwks_cache.warm_cache().await {
        tracing::warn!(error = %e, "Failed to warm JWKS cache - will fetch on first request");
    }

    let server_addr = settings.server_addr.clone();

    // Create application state
    let state = app::AppState::new(settings, supabase, jwks_cache);

    // Build application
    let app = app::create_app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&server_addr).await?;
    tracing::info!("Listening on {}", server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
