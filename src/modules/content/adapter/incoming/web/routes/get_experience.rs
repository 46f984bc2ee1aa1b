use actix_web::{get, web, Responder};
use chrono::{NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::content::application::domain::entities::Experience;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Experience entry with its tenure already rendered for display.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ExperienceResponse {
    #[serde(flatten)]
    pub experience: Experience,

    #[schema(example = "1 year 3 months (Current)")]
    pub duration: String,
}

impl ExperienceResponse {
    pub fn from_experience(experience: Experience, today: NaiveDate) -> Self {
        let duration = experience.duration_label(today);
        Self {
            experience,
            duration,
        }
    }
}

pub(crate) fn with_durations(experience: Vec<Experience>) -> Vec<ExperienceResponse> {
    let today = Utc::now().date_naive();
    experience
        .into_iter()
        .map(|job| ExperienceResponse::from_experience(job, today))
        .collect()
}

/// List work experience
///
/// Most recent position first.
#[utoipa::path(
    get,
    path = "/api/experience",
    tag = "content",
    responses((status = 200, description = "Experience list", body = [ExperienceResponse]))
)]
#[get("/api/experience")]
pub async fn get_experience_handler(data: web::Data<AppState>) -> impl Responder {
    let experience = data.content.get_experience.execute().await;
    ApiResponse::success(with_durations(experience))
}
