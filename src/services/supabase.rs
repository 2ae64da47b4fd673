//! Supabase client for the two halves of the hosted backend.
//!
//! - PostgREST (`/rest/v1`): table reads and inserts
//! - GoTrue (`/auth/v1`): password sign in / sign up, sign out, user lookup
//!
//! Every call carries the project's anon key. Nothing is retried.

use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::domain::auth::{
    Credentials, Identifier, SignUpOutcome, SupabaseAuthResponse, SupabaseErrorResponse,
    SupabaseUser,
};

#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("Supabase unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// Supabase answered with a non-success status.
    #[error("Supabase returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("Unexpected Supabase response: {0}")]
    Decode(String),
}

impl SupabaseError {
    /// Message worth showing to a user, when Supabase gave one.
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Client for a single Supabase project.
#[derive(Clone)]
pub struct SupabaseClient {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(base_url: &str, anon_key: &str, timeout_seconds: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Url::parse(base_url).context("SUPABASE_URL is not a valid URL")?;

        tracing::info!(base_url = base_url, "Supabase client initialized");

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    /// The pooled HTTP client, shared with the JWKS cache.
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    fn url(&self, path: &str) -> Result<Url, SupabaseError> {
        Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| SupabaseError::Decode(format!("invalid URL {}: {}", path, e)))
    }

    fn with_key(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("apikey", &self.anon_key)
    }

    // =========================================================================
    // PostgREST
    // =========================================================================

    /// `GET /rest/v1/{table}` with PostgREST query parameters.
    #[instrument(skip(self, params), fields(rows))]
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        params: &[(&str, String)],
    ) -> Result<Vec<T>, SupabaseError> {
        let mut url = self.url(&format!("/rest/v1/{}", table))?;
        url.query_pairs_mut()
            .append_pair("select", "*")
            .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())));

        debug!(url = %url, "Supabase select");

        let response = self
            .with_key(self.client.get(url))
            .bearer_auth(&self.anon_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        let rows: Vec<T> = decode(response).await?;
        tracing::Span::current().record("rows", rows.len());
        Ok(rows)
    }

    /// `POST /rest/v1/{table}` without reading the inserted rows back.
    #[instrument(skip(self, rows), fields(count = rows.len()))]
    pub async fn insert<T: Serialize>(&self, table: &str, rows: &[T]) -> Result<(), SupabaseError> {
        let url = self.url(&format!("/rest/v1/{}", table))?;

        let response = self
            .with_key(self.client.post(url))
            .bearer_auth(&self.anon_key)
            .header("Prefer", "return=minimal")
            .json(rows)
            .send()
            .await?;

        ensure_success(response).await.map(|_| ())
    }

    // =========================================================================
    // GoTrue
    // =========================================================================

    /// Password grant with either an email or a phone identifier.
    #[instrument(skip(self, credentials))]
    pub async fn sign_in_with_password(
        &self,
        credentials: &Credentials,
    ) -> Result<SupabaseAuthResponse, SupabaseError> {
        let mut url = self.url("/auth/v1/token")?;
        url.query_pairs_mut().append_pair("grant_type", "password");

        let response = self
            .with_key(self.client.post(url))
            .json(&credentials_body(credentials))
            .send()
            .await?;

        decode(response).await
    }

    /// Create an account; Supabase may or may not hand back a session.
    #[instrument(skip(self, credentials))]
    pub async fn sign_up(&self, credentials: &Credentials) -> Result<SignUpOutcome, SupabaseError> {
        let url = self.url("/auth/v1/signup")?;

        let response = self
            .with_key(self.client.post(url))
            .json(&credentials_body(credentials))
            .send()
            .await?;

        let body = ensure_success(response).await?;

        // Tokens are included when confirmation is disabled
        if let Ok(session) = serde_json::from_str::<SupabaseAuthResponse>(&body) {
            return Ok(SignUpOutcome::Session(session));
        }

        serde_json::from_str::<SupabaseUser>(&body)
            .map(SignUpOutcome::PendingConfirmation)
            .map_err(|e| SupabaseError::Decode(e.to_string()))
    }

    /// Revoke the session behind `access_token`.
    #[instrument(skip(self, access_token))]
    pub async fn sign_out(&self, access_token: &str) -> Result<(), SupabaseError> {
        let url = self.url("/auth/v1/logout")?;

        let response = self
            .with_key(self.client.post(url))
            .bearer_auth(access_token)
            .send()
            .await?;

        ensure_success(response).await.map(|_| ())
    }

    /// Look up the user owning `access_token`.
    #[instrument(skip(self, access_token))]
    pub async fn get_user(&self, access_token: &str) -> Result<SupabaseUser, SupabaseError> {
        let url = self.url("/auth/v1/user")?;

        let response = self
            .with_key(self.client.get(url))
            .bearer_auth(access_token)
            .send()
            .await?;

        decode(response).await
    }

    /// Check the project's auth service is reachable.
    pub async fn health_check(&self) -> Result<()> {
        let url = format!("{}/auth/v1/health", self.base_url);

        self.with_key(self.client.get(&url))
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .context("Supabase health check failed")?
            .error_for_status()
            .context("Supabase unhealthy")?;

        Ok(())
    }
}

fn credentials_body(credentials: &Credentials) -> serde_json::Value {
    match &credentials.identifier {
        Identifier::Email(email) => serde_json::json!({
            "email": email,
            "password": credentials.password,
        }),
        Identifier::Phone(phone) => serde_json::json!({
            "phone": phone,
            "password": credentials.password,
        }),
    }
}

/// Return the body of a successful response, or turn the error body into `SupabaseError::Api`.
async fn ensure_success(response: Response) -> Result<String, SupabaseError> {
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        return Ok(body);
    }

    let message = serde_json::from_str::<SupabaseErrorResponse>(&body)
        .ok()
        .and_then(SupabaseErrorResponse::into_message)
        .unwrap_or_else(|| format!("Request failed with status {}", status));

    warn!(status = %status, message = %message, "Supabase request rejected");
    Err(SupabaseError::Api { status, message })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, SupabaseError> {
    let body = ensure_success(response).await?;
    serde_json::from_str(&body).map_err(|e| SupabaseError::Decode(e.to_string()))
}
