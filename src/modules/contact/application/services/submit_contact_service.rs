use async_trait::async_trait;
use chrono::Utc;
use std::fmt;
use std::sync::Arc;
use tracing::{error, info};

use crate::contact::application::domain::{
    email_template::notification_mail,
    entities::{ContactSubmission, MissingCredentials, RelayCredentials},
};
use crate::contact::application::ports::{
    incoming::use_cases::{SubmitContactError, SubmitContactInput, SubmitContactUseCase},
    outgoing::{MailRelay, UnsentSubmissionLog},
};

#[derive(Clone)]
pub struct SubmitContactService {
    relay: Arc<dyn MailRelay + Send + Sync>,
    credentials: Result<RelayCredentials, MissingCredentials>,
    unsent_log: Arc<dyn UnsentSubmissionLog + Send + Sync>,
}

impl fmt::Debug for SubmitContactService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubmitContactService")
            .field("relay", &"<dyn MailRelay>")
            .field("configured", &self.is_configured())
            .finish()
    }
}

impl SubmitContactService {
    pub fn new(
        relay: Arc<dyn MailRelay + Send + Sync>,
        credentials: Result<RelayCredentials, MissingCredentials>,
        unsent_log: Arc<dyn UnsentSubmissionLog + Send + Sync>,
    ) -> Self {
        Self {
            relay,
            credentials,
            unsent_log,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_ok()
    }
}

#[async_trait]
impl SubmitContactUseCase for SubmitContactService {
    async fn execute(&self, input: SubmitContactInput) -> Result<(), SubmitContactError> {
        let submission =
            ContactSubmission::from_fields(input.name, input.email, input.subject, input.message)
                .map_err(|_| SubmitContactError::MissingFields)?;

        let credentials = match &self.credentials {
            Ok(credentials) => credentials,
            Err(missing) => {
                error!(
                    email_user_set = !missing.account,
                    email_pass_set = !missing.secret,
                    "Email relay credentials are missing"
                );
                self.unsent_log.record(&submission, Utc::now());
                return Err(SubmitContactError::NotConfigured);
            }
        };

        let mail = notification_mail(&submission, credentials.account(), Utc::now());

        if let Err(err) = self.relay.send(credentials, mail).await {
            error!(error = ?err, "Email sending error");
            return Err(SubmitContactError::Relay(err));
        }

        info!(subject = %submission.subject(), "Contact message relayed");
        Ok(())
    }
}
