use std::env;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Development,
    Test,
    Production,
}

impl RunMode {
    fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("test") => RunMode::Test,
            Some("production") => RunMode::Production,
            _ => RunMode::Development,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunMode::Development => "development",
            RunMode::Test => "test",
            RunMode::Production => "production",
        }
    }
}

/// Where contact notifications are relayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmtpTarget {
    /// Authenticated provider relay.
    Relay { server: String },
    /// Local mail catcher without authentication.
    Local { host: String, port: u16 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub run_mode: RunMode,
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub email_user: Option<String>,
    pub email_pass: Option<String>,
    pub smtp: SmtpTarget,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) into the process
    /// environment, then reads it.
    pub fn load() -> Result<Self, ConfigError> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        // Try .env.{environment} first, then fall back to .env
        let env_file = format!(".env.{}", env_name);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_env()
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let run_mode = RunMode::from_env_value(lookup("RUST_ENV").as_deref());

        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_port("PORT", lookup("PORT"), 8080)?;

        let smtp = match run_mode {
            RunMode::Test => SmtpTarget::Local {
                host: lookup("SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: parse_port("SMTP_PORT", lookup("SMTP_PORT"), 1025)?,
            },
            _ => SmtpTarget::Relay {
                server: lookup("SMTP_SERVER").unwrap_or_else(|| "smtp.gmail.com".to_string()),
            },
        };

        Ok(Self {
            run_mode,
            host,
            port,
            database_url: lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()),
            email_user: lookup("EMAIL_USER"),
            email_pass: lookup("EMAIL_PASS"),
            smtp,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(key: &'static str, value: Option<String>, default: u16) -> Result<u16, ConfigError> {
    match value {
        None => Ok(default),
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: v }),
    }
}
