use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const WELCOME_MESSAGE: &str = "Welcome to Alertic API";

/// Response DTO for the welcome endpoint
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WelcomeResponseDto {
    pub message: String,
}

/// Static welcome response
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = WelcomeResponseDto)
    ),
    tag = "home"
)]
pub async fn welcome() -> Json<WelcomeResponseDto> {
    Json(WelcomeResponseDto {
        message: WELCOME_MESSAGE.to_string(),
    })
}
