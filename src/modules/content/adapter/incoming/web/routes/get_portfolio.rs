use actix_web::{get, web, Responder};
use serde::Serialize;
use utoipa::ToSchema;

use super::get_experience::{with_durations, ExperienceResponse};
use crate::content::application::domain::entities::{About, Project, Skill};
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Everything the landing page renders, in one response.
#[derive(Debug, Serialize, ToSchema)]
pub struct PortfolioResponse {
    pub about: Option<About>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceResponse>,
}

/// Get the full page content
///
/// The four content reads run concurrently; each one falls back
/// independently.
#[utoipa::path(
    get,
    path = "/api/portfolio",
    tag = "content",
    responses((status = 200, description = "Page content", body = PortfolioResponse))
)]
#[get("/api/portfolio")]
pub async fn get_portfolio_handler(data: web::Data<AppState>) -> impl Responder {
    let content = &data.content;

    let (about, skills, projects, experience) = futures::join!(
        content.get_about.execute(),
        content.get_skills.execute(),
        content.get_projects.execute(),
        content.get_experience.execute(),
    );

    ApiResponse::success(PortfolioResponse {
        about,
        skills,
        projects,
        experience: with_durations(experience),
    })
}
