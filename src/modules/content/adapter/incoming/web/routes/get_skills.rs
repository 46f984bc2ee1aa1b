use actix_web::{get, web, Responder};

use crate::content::application::domain::entities::Skill;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List skills
///
/// Always includes the guaranteed skill entries.
#[utoipa::path(
    get,
    path = "/api/skills",
    tag = "content",
    responses((status = 200, description = "Skill list", body = [Skill]))
)]
#[get("/api/skills")]
pub async fn get_skills_handler(data: web::Data<AppState>) -> impl Responder {
    ApiResponse::success(data.content.get_skills.execute().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::content::application::domain::entities::SkillCategory;
    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder, read_json, stubs::StubGetSkillsUseCase,
    };

    #[actix_web::test]
    async fn get_skills_returns_list() {
        let skills = vec![Skill {
            id: "1".to_string(),
            name: "Rust".to_string(),
            category: SkillCategory::Backend,
            proficiency: 75,
            icon: Some("🦀".to_string()),
        }];

        let state = TestAppStateBuilder::default()
            .with_get_skills(StubGetSkillsUseCase(skills))
            .build();

        let app = test::init_service(App::new().app_data(state).service(get_skills_handler)).await;

        let req = test::TestRequest::get().uri("/api/skills").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        assert_eq!(json[0]["name"], "Rust");
        assert_eq!(json[0]["category"], "backend");
        assert_eq!(json[0]["proficiency"], 75);
    }
}
