//! Authentication domain types
//!
//! Requests and responses for the sign-in / sign-up proxy in front of
//! Supabase Auth, plus the Supabase wire types it consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SIGNED_IN_MESSAGE: &str = "Signed in successfully!";
pub const SIGNED_UP_MESSAGE: &str =
    "Account created successfully! Please check your email to verify your account.";

/// Minimum password length accepted by the sign-up form
pub const MIN_PASSWORD_LEN: usize = 6;

/// Which identifier the user authenticates with
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AuthMethod {
    #[default]
    Email,
    Phone,
}

/// Whether the user is signing in or creating an account
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AuthMode {
    #[serde(rename = "signin")]
    SignIn,
    #[serde(rename = "signup")]
    SignUp,
}

/// Sign in / sign up request body
#[derive(Debug, Clone, Deserialize)]
pub struct AuthRequest {
    #[serde(default)]
    pub method: AuthMethod,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub password: String,
}

/// Validated identifier sent to Supabase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    Email(String),
    Phone(String),
}

/// Validated credentials for one of the four auth calls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub identifier: Identifier,
    pub password: String,
}

impl AuthRequest {
    /// Pick the identifier for the selected method and check the password.
    pub fn into_credentials(self) -> Result<Credentials, String> {
        let identifier = match self.method {
            AuthMethod::Email => {
                let email = self.email.as_deref().map(str::trim).unwrap_or_default();
                if email.is_empty() {
                    return Err("Email is required".to_string());
                }
                if !crate::domain::contact::looks_like_email(email) {
                    return Err("Please enter a valid email address".to_string());
                }
                Identifier::Email(email.to_string())
            }
            AuthMethod::Phone => {
                let phone = self.phone.as_deref().unwrap_or_default();
                if phone.trim().is_empty() {
                    return Err("Phone number is required".to_string());
                }
                Identifier::Phone(normalize_phone(phone)?)
            }
        };

        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            ));
        }

        Ok(Credentials {
            identifier,
            password: self.password,
        })
    }
}

/// Strip formatting and require a country code, e.g. `+1 (555) 123-4567` → `+15551234567`.
pub fn normalize_phone(raw: &str) -> Result<String, String> {
    let compact: String = raw
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '.' | '(' | ')'))
        .collect();

    let digits = compact
        .strip_prefix('+')
        .ok_or_else(|| "Include country code (e.g., +1 for US)".to_string())?;

    if digits.len() < 7 || digits.len() > 15 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err("Please enter a valid phone number".to_string());
    }

    Ok(compact)
}

/// User info from Supabase
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Session tokens handed back after a successful sign in
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

/// Outcome of a sign in or sign up
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<AuthSession>,
    pub confirmation_required: bool,
}

/// What the service knows about the caller's session
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
}

impl SessionResponse {
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            user: None,
            expires_at: None,
        }
    }
}

// Supabase Auth API response types

/// Response when Supabase returns tokens (sign in, or auto-confirmed sign up)
#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseAuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub user: SupabaseUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub confirmation_sent_at: Option<String>,
}

/// Sign up either returns a session or, when confirmation is required, the bare user
#[derive(Debug, Clone)]
pub enum SignUpOutcome {
    Session(SupabaseAuthResponse),
    PendingConfirmation(SupabaseUser),
}

/// Supabase error bodies (both the 2025+ and the legacy shapes)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SupabaseErrorResponse {
    pub msg: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
    pub message: Option<String>,
}

impl SupabaseErrorResponse {
    pub fn into_message(self) -> Option<String> {
        self.message
            .or(self.msg)
            .or(self.error_description)
            .or(self.error)
            .filter(|m| !m.trim().is_empty())
    }
}

impl From<SupabaseUser> for User {
    fn from(su: SupabaseUser) -> Self {
        Self {
            id: su.id,
            email: su.email.filter(|e| !e.is_empty()),
            phone: su.phone.filter(|p| !p.is_empty()),
            created_at: su.created_at.and_then(|s| s.parse().ok()),
        }
    }
}
