use async_trait::async_trait;

use crate::contact::application::ports::outgoing::RelayError;

//
// ──────────────────────────────────────────────────────────
// Input
// ──────────────────────────────────────────────────────────
//

/// Raw form fields as received; any of them may be absent.
#[derive(Debug, Clone, Default)]
pub struct SubmitContactInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitContactError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Email configuration is missing. Your message has been logged. Please set up email credentials in .env file.")]
    NotConfigured,

    #[error(transparent)]
    Relay(#[from] RelayError),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(&self, input: SubmitContactInput) -> Result<(), SubmitContactError>;
}
