use regex::Regex;
use std::sync::OnceLock;

use super::ports::ContactPayload;

pub const REQUIRED_MESSAGE: &str = "All fields are required";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

/// Checks run before any network call. Returns the inline error to show.
pub fn preflight(payload: &ContactPayload) -> Result<(), &'static str> {
    let fields = [
        &payload.name,
        &payload.email,
        &payload.subject,
        &payload.message,
    ];
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(REQUIRED_MESSAGE);
    }

    if !email_pattern().is_match(&payload.email) {
        return Err(INVALID_EMAIL_MESSAGE);
    }

    Ok(())
}
