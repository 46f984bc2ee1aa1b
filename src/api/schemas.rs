// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Acknowledgement body
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Email sent successfully")]
    pub message: String,
}

/// Error body returned by every failing endpoint
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message
    #[schema(example = "All fields are required")]
    pub error: String,
}
