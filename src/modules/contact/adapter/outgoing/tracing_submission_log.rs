use chrono::{DateTime, SecondsFormat, Utc};
use tracing::warn;

use crate::contact::application::domain::entities::ContactSubmission;
use crate::contact::application::ports::outgoing::UnsentSubmissionLog;

/// Writes unsent submissions to the application log.
#[derive(Debug, Clone, Default)]
pub struct TracingSubmissionLog;

impl UnsentSubmissionLog for TracingSubmissionLog {
    fn record(&self, submission: &ContactSubmission, received_at: DateTime<Utc>) {
        warn!(
            name = %submission.name(),
            email = %submission.email(),
            subject = %submission.subject(),
            body = %submission.message(),
            timestamp = %received_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            "Contact form submission (email not configured)"
        );
    }
}
