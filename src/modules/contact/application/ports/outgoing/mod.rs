mod mail_relay;
mod unsent_submission_log;

pub use mail_relay::{AuthFailure, MailRelay, RelayError};
pub use unsent_submission_log::UnsentSubmissionLog;
