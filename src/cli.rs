use clap::{Parser, Subcommand};
use std::io::{self, Write};

use crate::contact::application::domain::entities::{OutgoingMail, RelayCredentials};
use crate::contact::application::ports::outgoing::MailRelay;

#[derive(Debug, Parser)]
#[command(name = "portfolio_backend", version, about = "Portfolio site backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Verify the mail relay credentials and send a test message to the account
    CheckEmail,
    /// Replace the content store with the bundled portfolio data
    Seed,
}

fn set_or_not(value: &Option<String>) -> &'static str {
    match value.as_deref() {
        Some(v) if !v.is_empty() => "Set",
        _ => "Not set",
    }
}

/// Runs the relay self-check, writing a report to `out`.
///
/// Returns `Ok(true)` when the test mail was accepted.
pub async fn check_email<W: Write>(
    out: &mut W,
    email_user: Option<String>,
    email_pass: Option<String>,
    relay: &dyn MailRelay,
) -> io::Result<bool> {
    writeln!(out, "Testing email configuration...")?;
    writeln!(out, "EMAIL_USER: {}", set_or_not(&email_user))?;
    writeln!(out, "EMAIL_PASS: {}", set_or_not(&email_pass))?;

    let credentials = match RelayCredentials::from_parts(email_user, email_pass) {
        Ok(credentials) => credentials,
        Err(_) => {
            writeln!(out, "Environment variables are missing!")?;
            writeln!(out, "Please create a .env file with:")?;
            writeln!(out, "EMAIL_USER=your-email@gmail.com")?;
            writeln!(out, "EMAIL_PASS=your-app-password")?;
            return Ok(false);
        }
    };

    writeln!(out, "Testing connection...")?;
    let result = match relay.test_connection(&credentials).await {
        Ok(()) => {
            writeln!(out, "Email configuration is valid!")?;
            writeln!(out, "Sending test email...")?;
            relay.send(&credentials, test_mail(credentials.account())).await
        }
        Err(err) => Err(err),
    };

    match result {
        Ok(()) => {
            writeln!(out, "Test email sent successfully!")?;
            writeln!(out, "Check your inbox for the test email.")?;
            Ok(true)
        }
        Err(err) => {
            writeln!(out, "Email test failed: {}", err)?;
            if let Some(hint) = err.hint() {
                writeln!(out, "Solution: {}", hint)?;
            }
            Ok(false)
        }
    }
}

fn test_mail(account: &str) -> OutgoingMail {
    OutgoingMail {
        from: account.to_string(),
        to: account.to_string(),
        subject: "Test Email from Portfolio".to_string(),
        html_body: "<p>This is a test email to verify your email configuration is working correctly.</p>"
            .to_string(),
    }
}
