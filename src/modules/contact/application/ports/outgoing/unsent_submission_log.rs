use chrono::{DateTime, Utc};

use crate::contact::application::domain::entities::ContactSubmission;

/// Keeps a submission that could not be mailed, for manual follow-up.
pub trait UnsentSubmissionLog: Send + Sync {
    fn record(&self, submission: &ContactSubmission, received_at: DateTime<Utc>);
}
