use actix_web::{get, web, Responder};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::content::application::domain::entities::Project;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProjectsQuery {
    /// Only return featured projects
    #[param(example = true)]
    pub featured: Option<bool>,
}

/// List projects
///
/// Featured projects come first, then newest first.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "content",
    params(ProjectsQuery),
    responses((status = 200, description = "Project list", body = [Project]))
)]
#[get("/api/projects")]
pub async fn get_projects_handler(
    query: web::Query<ProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let projects = data.content.get_projects.execute().await;

    let projects: Vec<Project> = if query.featured.unwrap_or(false) {
        projects.into_iter().filter(|p| p.featured).collect()
    } else {
        projects
    };

    ApiResponse::success(projects)
}
