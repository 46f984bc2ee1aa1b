use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use std::sync::Arc;

use crate::contact::application::domain::entities::{OutgoingMail, RelayCredentials};
use crate::contact::application::ports::outgoing::{AuthFailure, MailRelay, RelayError};

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), RelayError>;
    async fn test_connection(&self) -> Result<(), RelayError>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), RelayError> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| classify_smtp_error(&e))
    }

    async fn test_connection(&self) -> Result<(), RelayError> {
        match AsyncSmtpTransport::<Tokio1Executor>::test_connection(self).await {
            Ok(true) => Ok(()),
            Ok(false) => Err(RelayError::Transient(
                "SMTP server did not accept the connection".to_string(),
            )),
            Err(e) => Err(classify_smtp_error(&e)),
        }
    }
}

fn classify_smtp_error(err: &lettre::transport::smtp::Error) -> RelayError {
    let code = err.status().map(|c| c.to_string());
    classify(
        code.as_deref(),
        err.is_transient() || err.is_timeout(),
        err.to_string(),
    )
}

/// Maps a relay failure onto the error tags.
///
/// Text markers are checked before reply codes, so a 535 carrying
/// "Username and Password not accepted" is reported as rejected credentials.
pub(crate) fn classify(code: Option<&str>, transient: bool, message: String) -> RelayError {
    if let Some(kind) = auth_failure_from_text(&message).or_else(|| auth_failure_from_code(code)) {
        return RelayError::Auth { kind, message };
    }

    if transient {
        RelayError::Transient(message)
    } else {
        RelayError::Unknown(message)
    }
}

pub(crate) fn auth_failure_from_text(text: &str) -> Option<AuthFailure> {
    if text.contains("Invalid login") {
        Some(AuthFailure::InvalidLogin)
    } else if text.contains("Username and Password not accepted") {
        Some(AuthFailure::CredentialsRejected)
    } else if text.contains("Less secure app access")
        || text.contains("Application-specific password required")
    {
        Some(AuthFailure::InsecureAppBlocked)
    } else {
        None
    }
}

fn auth_failure_from_code(code: Option<&str>) -> Option<AuthFailure> {
    match code? {
        "535" => Some(AuthFailure::InvalidLogin),
        "534" => Some(AuthFailure::InsecureAppBlocked),
        _ => None,
    }
}

enum Transport {
    Relay { server: String },
    Local { host: String, port: u16 },
    Fixed(Arc<dyn Mailer>),
}

/// Sends notifications over SMTP, authenticating with the credentials passed
/// on each call.
pub struct SmtpMailRelay {
    transport: Transport,
}

impl SmtpMailRelay {
    /// Authenticated TLS relay, e.g. `smtp.gmail.com`.
    pub fn new(smtp_server: &str) -> Self {
        Self {
            transport: Transport::Relay {
                server: smtp_server.to_string(),
            },
        }
    }

    // Local/test constructor (Mailpit, MailHog, etc.)
    pub fn new_local(host: &str, port: u16) -> Self {
        Self {
            transport: Transport::Local {
                host: host.to_string(),
                port,
            },
        }
    }

    pub fn with_mailer(mailer: Arc<dyn Mailer>) -> Self {
        Self {
            transport: Transport::Fixed(mailer),
        }
    }

    fn mailer_for(&self, credentials: &RelayCredentials) -> Result<Arc<dyn Mailer>, RelayError> {
        match &self.transport {
            Transport::Relay { server } => {
                let creds = Credentials::new(
                    credentials.account().to_string(),
                    credentials.secret().to_string(),
                );
                let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(server)
                    .map_err(|e| RelayError::Config(format!("Invalid SMTP server: {}", e)))?
                    .credentials(creds)
                    .build();
                Ok(Arc::new(transport))
            }
            Transport::Local { host, port } => Ok(Arc::new(
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host.as_str())
                    .port(*port)
                    .build(),
            )),
            Transport::Fixed(mailer) => Ok(Arc::clone(mailer)),
        }
    }
}

fn build_message(mail: OutgoingMail) -> Result<Message, RelayError> {
    Message::builder()
        .from(
            mail.from
                .parse()
                .map_err(|e| RelayError::Config(format!("Invalid sender address: {}", e)))?,
        )
        .to(mail
            .to
            .parse()
            .map_err(|e| RelayError::Config(format!("Invalid recipient address: {}", e)))?)
        .subject(mail.subject)
        .header(ContentType::TEXT_HTML)
        .body(mail.html_body)
        .map_err(|e| RelayError::Config(e.to_string()))
}

#[async_trait]
impl MailRelay for SmtpMailRelay {
    async fn send(
        &self,
        credentials: &RelayCredentials,
        mail: OutgoingMail,
    ) -> Result<(), RelayError> {
        let message = build_message(mail)?;
        self.mailer_for(credentials)?.send(message).await
    }

    async fn test_connection(&self, credentials: &RelayCredentials) -> Result<(), RelayError> {
        self.mailer_for(credentials)?.test_connection().await
    }
}
