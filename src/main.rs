pub mod api;
pub mod cli;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::contact;
pub use modules::contact_form;
pub use modules::content;

use crate::api::openapi::ApiDoc;
use crate::cli::{Cli, Command};
use crate::config::{AppConfig, SmtpTarget};

use crate::contact::adapter::outgoing::{SmtpMailRelay, TracingSubmissionLog};
use crate::contact::application::domain::entities::RelayCredentials;
use crate::contact::application::ports::incoming::use_cases::SubmitContactUseCase;
use crate::contact::application::services::SubmitContactService;

use crate::content::adapter::outgoing::{
    ContentQueryPostgres, ContentSeed, ContentSeederPostgres, ContentStore,
};
use crate::content::application::content_use_cases::ContentUseCases;
use crate::content::application::services::{
    GetAboutService, GetExperienceService, GetProjectsService, GetSkillsService,
};

use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use clap::Parser;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub content: ContentUseCases,
    pub submit_contact_use_case: Arc<dyn SubmitContactUseCase + Send + Sync>,
    pub relay_configured: bool,
}

#[cfg(not(tarpaulin_include))]
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(not(tarpaulin_include))]
fn build_relay(config: &AppConfig) -> SmtpMailRelay {
    match &config.smtp {
        // Local Mailpit
        SmtpTarget::Local { host, port } => SmtpMailRelay::new_local(host, *port),
        // Production SMTP
        SmtpTarget::Relay { server } => SmtpMailRelay::new(server),
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start(config: AppConfig) -> std::io::Result<()> {
    info!(run_mode = config.run_mode.as_str(), "Starting application...");

    // Content store
    let store = ContentStore::connect(config.database_url.as_deref()).await;
    let content_query = ContentQueryPostgres::new(store.clone());

    let content = ContentUseCases {
        get_about: Arc::new(GetAboutService::new(content_query.clone())),
        get_skills: Arc::new(GetSkillsService::new(content_query.clone())),
        get_projects: Arc::new(GetProjectsService::new(content_query.clone())),
        get_experience: Arc::new(GetExperienceService::new(content_query)),
    };

    // Contact relay
    let credentials =
        RelayCredentials::from_parts(config.email_user.clone(), config.email_pass.clone());
    if credentials.is_err() {
        tracing::warn!("EMAIL_USER/EMAIL_PASS not set, contact messages will only be logged");
    }
    let submit_contact = SubmitContactService::new(
        Arc::new(build_relay(&config)),
        credentials,
        Arc::new(TracingSubmissionLog),
    );

    let state = AppState {
        content,
        relay_configured: submit_contact.is_configured(),
        submit_contact_use_case: Arc::new(submit_contact),
    };

    let server_url = config.server_url();
    info!("Server run on: {}", server_url);

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(store.clone()))
            .app_data(custom_json_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn run_check_email(config: AppConfig) -> std::io::Result<bool> {
    let relay = build_relay(&config);
    let mut stdout = std::io::stdout();
    cli::check_email(&mut stdout, config.email_user, config.email_pass, &relay).await
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn run_seed(config: AppConfig) -> bool {
    let store = ContentStore::connect(config.database_url.as_deref()).await;
    match ContentSeederPostgres::new(store)
        .seed(ContentSeed::portfolio())
        .await
    {
        Ok(report) => {
            println!(
                "Seeded {} skills, {} projects and {} experience entries",
                report.skills, report.projects, report.experience
            );
            true
        }
        Err(e) => {
            eprintln!("Seeding failed: {e}");
            false
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Content
    cfg.service(crate::content::adapter::incoming::web::routes::get_about_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_experience_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_portfolio_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    init_tracing();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            if let Err(e) = start(config) {
                eprintln!("Error starting app: {e}");
            }
        }
        Command::CheckEmail => match run_check_email(config) {
            Ok(true) => {}
            Ok(false) => std::process::exit(1),
            Err(e) => {
                eprintln!("Error running email check: {e}");
                std::process::exit(1);
            }
        },
        Command::Seed => {
            if !run_seed(config) {
                std::process::exit(1);
            }
        }
    }
}
