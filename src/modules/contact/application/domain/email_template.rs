//! HTML notification sent to the site owner for each contact message.

use chrono::{DateTime, Utc};

use super::entities::{ContactSubmission, OutgoingMail};

pub const SUBJECT_PREFIX: &str = "Portfolio Contact: ";

/// Builds the self-addressed notification for `submission`.
pub fn notification_mail(
    submission: &ContactSubmission,
    account: &str,
    sent_at: DateTime<Utc>,
) -> OutgoingMail {
    OutgoingMail {
        from: account.to_string(),
        to: account.to_string(),
        subject: format!("{}{}", SUBJECT_PREFIX, submission.subject()),
        html_body: render_body(submission, sent_at),
    }
}

fn render_body(submission: &ContactSubmission, sent_at: DateTime<Utc>) -> String {
    let message = escape_html(submission.message()).replace('\n', "<br>");

    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #333; border-bottom: 2px solid #007bff; padding-bottom: 10px;">
    New Contact Form Submission
  </h2>
  <div style="background-color: #f8f9fa; padding: 20px; border-radius: 8px; margin: 20px 0;">
    <h3 style="color: #007bff; margin-top: 0;">Contact Details</h3>
    <p><strong>Name:</strong> {name}</p>
    <p><strong>Email:</strong> {email}</p>
    <p><strong>Subject:</strong> {subject}</p>
  </div>
  <div style="background-color: #fff; padding: 20px; border: 1px solid #dee2e6; border-radius: 8px;">
    <h3 style="color: #333; margin-top: 0;">Message</h3>
    <p style="line-height: 1.6; color: #555;">{message}</p>
  </div>
  <div style="margin-top: 30px; padding-top: 20px; border-top: 1px solid #dee2e6; color: #6c757d; font-size: 14px;">
    <p>This message was sent from your portfolio contact form.</p>
    <p>Time: {time}</p>
  </div>
</div>"#,
        name = escape_html(submission.name()),
        email = escape_html(submission.email()),
        subject = escape_html(submission.subject()),
        message = message,
        time = sent_at.format("%Y-%m-%d %H:%M:%S UTC"),
    )
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
