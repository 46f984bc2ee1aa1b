use async_trait::async_trait;

use crate::contact::application::domain::entities::{OutgoingMail, RelayCredentials};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    /// The relay refused the login outright.
    InvalidLogin,
    /// The account exists but the app password was not accepted.
    CredentialsRejected,
    /// The provider requires an app password for this kind of client.
    InsecureAppBlocked,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    #[error("{message}")]
    Auth { kind: AuthFailure, message: String },

    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Transient(String),

    #[error("{0}")]
    Unknown(String),
}

impl RelayError {
    /// Message shown to the visitor. Authentication failures get a curated
    /// hint, everything else is passed through unchanged.
    pub fn user_message(&self) -> String {
        match self {
            RelayError::Auth { kind, .. } => match kind {
                AuthFailure::InvalidLogin => {
                    "Invalid email credentials. Please check your email and app password."
                }
                AuthFailure::CredentialsRejected => {
                    "Email authentication failed. Please verify your Gmail app password."
                }
                AuthFailure::InsecureAppBlocked => {
                    "Gmail security settings are blocking the connection. Please use an app password."
                }
            }
            .to_string(),
            other => other.to_string(),
        }
    }

    /// Operator-facing remedy, used by the `check-email` command.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            RelayError::Auth { kind, .. } => Some(match kind {
                AuthFailure::InvalidLogin => "Check your email and app password",
                AuthFailure::CredentialsRejected => "Verify your Gmail app password is correct",
                AuthFailure::InsecureAppBlocked => {
                    "Use an app password instead of your regular password"
                }
            }),
            _ => None,
        }
    }
}

#[async_trait]
pub trait MailRelay: Send + Sync {
    async fn send(
        &self,
        credentials: &RelayCredentials,
        mail: OutgoingMail,
    ) -> Result<(), RelayError>;

    /// Opens a session and authenticates without sending anything.
    async fn test_connection(&self, credentials: &RelayCredentials) -> Result<(), RelayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth(kind: AuthFailure) -> RelayError {
        RelayError::Auth {
            kind,
            message: "535 raw server text".to_string(),
        }
    }

    #[test]
    fn test_auth_failures_use_curated_messages() {
        assert_eq!(
            auth(AuthFailure::InvalidLogin).user_message(),
            "Invalid email credentials. Please check your email and app password."
        );
        assert_eq!(
            auth(AuthFailure::CredentialsRejected).user_message(),
            "Email authentication failed. Please verify your Gmail app password."
        );
        assert_eq!(
            auth(AuthFailure::InsecureAppBlocked).user_message(),
            "Gmail security settings are blocking the connection. Please use an app password."
        );
    }

    #[test]
    fn test_other_failures_surface_raw_message() {
        assert_eq!(
            RelayError::Transient("connection reset".to_string()).user_message(),
            "connection reset"
        );
        assert_eq!(
            RelayError::Unknown("boom".to_string()).user_message(),
            "boom"
        );
        assert!(RelayError::Config("bad address".to_string()).hint().is_none());
    }

    #[test]
    fn test_auth_display_keeps_raw_text() {
        assert_eq!(
            auth(AuthFailure::InvalidLogin).to_string(),
            "535 raw server text"
        );
    }
}
