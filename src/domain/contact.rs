use serde::{Deserialize, Serialize};

pub const SENT_MESSAGE: &str = "Message sent successfully! We'll get back to you soon.";
pub const FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

/// Acknowledgement returned once the submission is stored
#[derive(Debug, Clone, Serialize)]
pub struct ContactReceipt {
    pub message: &'static str,
}

/// Row inserted into `contact_submissions`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

impl ContactSubmission {
    /// Trim every field and reject blanks or an implausible email.
    pub fn validated(self) -> Result<Self, String> {
        let submission = Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
        };

        let missing: Vec<&str> = [
            ("name", &submission.name),
            ("email", &submission.email),
            ("phone", &submission.phone),
            ("message", &submission.message),
        ]
        .iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| *field)
        .collect();

        if !missing.is_empty() {
            return Err(format!("Missing required fields: {}", missing.join(", ")));
        }

        if !looks_like_email(&submission.email) {
            return Err("Please enter a valid email address".to_string());
        }

        Ok(submission)
    }
}

pub fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}
