use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, MessageResponse};
use crate::contact::application::ports::incoming::use_cases::{
    SubmitContactError, SubmitContactInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ContactRequestDto {
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[schema(example = "Project inquiry")]
    pub subject: Option<String>,
    #[schema(example = "Hi, I'd like to talk about a project.")]
    pub message: Option<String>,
}

impl From<ContactRequestDto> for SubmitContactInput {
    fn from(dto: ContactRequestDto) -> Self {
        Self {
            name: dto.name,
            email: dto.email,
            subject: dto.subject,
            message: dto.message,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Send a contact message
///
/// Relays the message to the site owner's mailbox.
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactRequestDto,
    responses(
        (status = 200, description = "Message relayed", body = MessageResponse,
            example = json!({ "message": "Email sent successfully" })),
        (status = 400, description = "A field is missing or the body is not valid JSON", body = ErrorResponse,
            example = json!({ "error": "All fields are required" })),
        (status = 500, description = "Relay not configured or relay failure", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    req: web::Json<ContactRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .submit_contact_use_case
        .execute(req.into_inner().into())
        .await
    {
        Ok(()) => ApiResponse::message("Email sent successfully"),
        Err(e) => map_submit_contact_error(e),
    }
}

pub fn map_submit_contact_error(err: SubmitContactError) -> HttpResponse {
    match &err {
        SubmitContactError::MissingFields => ApiResponse::bad_request(&err.to_string()),
        SubmitContactError::NotConfigured => ApiResponse::internal_error(&err.to_string()),
        SubmitContactError::Relay(relay) => ApiResponse::internal_error(&relay.user_message()),
    }
}
