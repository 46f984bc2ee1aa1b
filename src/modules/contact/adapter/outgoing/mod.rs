mod smtp_relay;
mod tracing_submission_log;

pub use smtp_relay::{Mailer, SmtpMailRelay};
pub use tracing_submission_log::TracingSubmissionLog;
