use async_trait::async_trait;
use serde::Serialize;

/// Body posted to the contact endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

pub const GENERIC_REJECTION: &str = "Failed to send message";
pub const TRANSPORT_FAILURE: &str = "Failed to send message. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EndpointError {
    /// Non-2xx answer; carries the server's `error` text or the generic one.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request never produced a response.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl EndpointError {
    pub fn display_message(&self) -> String {
        match self {
            EndpointError::Rejected { message, .. } => message.clone(),
            EndpointError::Transport(_) => TRANSPORT_FAILURE.to_string(),
        }
    }
}

#[async_trait]
pub trait ContactEndpoint: Send + Sync {
    async fn submit(&self, payload: &ContactPayload) -> Result<(), EndpointError>;
}
