use std::fmt;

/// The four fields were not all supplied, or one of them is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("All fields are required")]
pub struct IncompleteSubmission;

/// A visitor's message as accepted by the contact endpoint.
///
/// Every field is present and non-empty. The email address is not checked for
/// format here; the browser form does that before sending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    name: String,
    email: String,
    subject: String,
    message: String,
}

impl ContactSubmission {
    pub fn from_fields(
        name: Option<String>,
        email: Option<String>,
        subject: Option<String>,
        message: Option<String>,
    ) -> Result<Self, IncompleteSubmission> {
        Ok(Self {
            name: required(name)?,
            email: required(email)?,
            subject: required(subject)?,
            message: required(message)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

fn required(value: Option<String>) -> Result<String, IncompleteSubmission> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(IncompleteSubmission),
    }
}

/// Which relay credentials are absent. `true` means missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingCredentials {
    pub account: bool,
    pub secret: bool,
}

/// Account and app password for the mail relay. Both are non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct RelayCredentials {
    account: String,
    secret: String,
}

impl RelayCredentials {
    pub fn from_parts(
        account: Option<String>,
        secret: Option<String>,
    ) -> Result<Self, MissingCredentials> {
        let account = account.filter(|v| !v.is_empty());
        let secret = secret.filter(|v| !v.is_empty());

        match (account, secret) {
            (Some(account), Some(secret)) => Ok(Self { account, secret }),
            (account, secret) => Err(MissingCredentials {
                account: account.is_none(),
                secret: secret.is_none(),
            }),
        }
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for RelayCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayCredentials")
            .field("account", &self.account)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// A fully rendered mail ready for the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html_body: String,
}
