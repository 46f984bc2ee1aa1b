use std::time::Duration;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, warn};

use super::ports::{ContactEndpoint, ContactPayload};
use super::validation::preflight;

/// How long the success panel stays up before the form resets.
pub const RESET_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    Submitting,
    Submitted { reset_at: Instant },
    Errored(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormFields {
    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    fn to_payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}

/// State of the contact form between user input and the contact endpoint.
///
/// The success state expires on the tokio clock; call [`refresh`] (or await
/// [`wait_for_reset`]) to observe the transition back to an empty form.
///
/// [`refresh`]: ContactFormController::refresh
/// [`wait_for_reset`]: ContactFormController::wait_for_reset
pub struct ContactFormController<E: ContactEndpoint> {
    endpoint: E,
    fields: FormFields,
    status: FormStatus,
}

impl<E: ContactEndpoint> ContactFormController<E> {
    pub fn new(endpoint: E) -> Self {
        Self {
            endpoint,
            fields: FormFields::default(),
            status: FormStatus::Editing,
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Inline error currently shown, if any.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Errored(msg) => Some(msg),
            _ => None,
        }
    }

    /// Typing into any field clears a displayed error; field values are kept.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.fields.slot(field) = value.into();
        if matches!(self.status, FormStatus::Errored(_)) {
            self.status = FormStatus::Editing;
        }
    }

    /// "Try Again" on the error panel.
    pub fn dismiss_error(&mut self) {
        if matches!(self.status, FormStatus::Errored(_)) {
            self.status = FormStatus::Editing;
        }
    }

    pub async fn submit(&mut self) {
        self.refresh();
        if matches!(
            self.status,
            FormStatus::Submitting | FormStatus::Submitted { .. }
        ) {
            return;
        }

        let payload = self.fields.to_payload();
        if let Err(msg) = preflight(&payload) {
            self.status = FormStatus::Errored(msg.to_string());
            return;
        }

        self.status = FormStatus::Submitting;
        self.status = match self.endpoint.submit(&payload).await {
            Ok(()) => {
                debug!("Contact message accepted");
                FormStatus::Submitted {
                    reset_at: Instant::now() + RESET_DELAY,
                }
            }
            Err(err) => {
                warn!(error = %err, "Error sending message");
                FormStatus::Errored(err.display_message())
            }
        };
    }

    /// Applies the delayed reset once its deadline has passed.
    pub fn refresh(&mut self) {
        if let FormStatus::Submitted { reset_at } = self.status {
            if Instant::now() >= reset_at {
                self.fields = FormFields::default();
                self.status = FormStatus::Editing;
            }
        }
    }

    /// Sleeps until the success state expires, then resets the form.
    pub async fn wait_for_reset(&mut self) {
        if let FormStatus::Submitted { reset_at } = self.status {
            sleep_until(reset_at).await;
            self.refresh();
        }
    }
}
