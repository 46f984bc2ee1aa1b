// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Bodies are parsed as JSON whatever the `Content-Type` header says.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| {
            let message = format!("Invalid request body: {}", err);
            actix_web::error::InternalError::from_response(err, ApiResponse::bad_request(&message))
                .into()
        })
}
