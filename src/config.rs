use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,
    pub server_addr: String,

    // CORS
    pub cors_allow_origins: Vec<String>,

    // Supabase project
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub supabase_timeout_seconds: u64,

    // Session verification
    pub supabase_jwt_jwks_url: String,
    pub supabase_jwt_issuer: String,
    pub supabase_jwt_audience: String,
    pub jwks_cache_ttl_seconds: u64,

    // Listings
    pub featured_limit: u32,

    // Prebuilt frontend served at the root, if any
    pub site_dir: Option<PathBuf>,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Environment::parse(&lookup("ENV").unwrap_or_else(|| "dev".to_string()));
        let server_addr = lookup("SERVER_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string());

        // CORS
        let cors_allow_origins = lookup("CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        // Supabase project
        let supabase_url = lookup("SUPABASE_URL")
            .context("SUPABASE_URL must be set")?
            .trim_end_matches('/')
            .to_string();
        let supabase_anon_key = lookup("SUPABASE_ANON_KEY").context("SUPABASE_ANON_KEY must be set")?;
        let supabase_timeout_seconds = parse_or(&lookup, "SUPABASE_TIMEOUT_SECONDS", 10);

        // Session verification
        let supabase_jwt_jwks_url = lookup("SUPABASE_JWT_JWKS_URL")
            .unwrap_or_else(|| format!("{}/auth/v1/.well-known/jwks.json", supabase_url));
        let supabase_jwt_issuer =
            lookup("SUPABASE_JWT_ISSUER").unwrap_or_else(|| format!("{}/auth/v1", supabase_url));
        let supabase_jwt_audience =
            lookup("SUPABASE_JWT_AUDIENCE").unwrap_or_else(|| "authenticated".to_string());
        let jwks_cache_ttl_seconds = parse_or(&lookup, "JWKS_CACHE_TTL_SECONDS", 1800); // 30 minutes

        // Listings
        let featured_limit = parse_or::<_, u32>(&lookup, "FEATURED_LIMIT", 6).max(1);

        let site_dir = lookup("SITE_DIR")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(Settings {
            env,
            server_addr,
            cors_allow_origins,
            supabase_url,
            supabase_anon_key,
            supabase_timeout_seconds,
            supabase_jwt_jwks_url,
            supabase_jwt_issuer,
            supabase_jwt_audience,
            jwks_cache_ttl_seconds,
            featured_limit,
            site_dir,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
