use serde::{Deserialize, Serialize};

/// JWT claims structure for Supabase access tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Audience
    pub aud: String,

    /// Issuer
    pub iss: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration (Unix timestamp)
    pub exp: i64,

    /// User email, present for email accounts
    #[serde(default)]
    pub email: Option<String>,

    /// User phone, present for phone accounts
    #[serde(default)]
    pub phone: Option<String>,

    /// Postgres role the token maps to
    #[serde(default)]
    pub role: Option<String>,

    /// Supabase session identifier
    #[serde(default)]
    pub session_id: Option<String>,
}
