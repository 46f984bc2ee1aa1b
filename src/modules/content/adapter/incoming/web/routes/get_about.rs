use actix_web::{get, web, Responder};

use crate::api::schemas::ErrorResponse;
use crate::content::application::domain::entities::About;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get the site owner's profile
///
/// Served from the content store, or from the built-in profile when the
/// store cannot be read.
#[utoipa::path(
    get,
    path = "/api/about",
    tag = "content",
    responses(
        (status = 200, description = "Profile", body = About),
        (
            status = 404,
            description = "Store is reachable but holds no profile",
            body = ErrorResponse,
            example = json!({ "error": "Profile not found" })
        ),
    )
)]
#[get("/api/about")]
pub async fn get_about_handler(data: web::Data<AppState>) -> impl Responder {
    match data.content.get_about.execute().await {
        Some(about) => ApiResponse::success(about),
        None => ApiResponse::not_found("Profile not found"),
    }
}
