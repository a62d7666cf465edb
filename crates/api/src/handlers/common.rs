use axum::{extract::rejection::JsonRejection, http::StatusCode, response::Json};
use enhancer_types::EnhancementValidationError;
use serde::Serialize;

/// Error response format shared by handlers
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
	pub timestamp: i64,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn error_response(status: StatusCode, error: &str, message: impl Into<String>) -> ApiError {
	(
		status,
		Json(ErrorResponse {
			error: error.to_string(),
			message: message.into(),
			timestamp: chrono::Utc::now().timestamp(),
		}),
	)
}

pub fn validation_error(e: &EnhancementValidationError) -> ApiError {
	error_response(
		StatusCode::BAD_REQUEST,
		"VALIDATION_ERROR",
		format!("Invalid request: {}", e),
	)
}

/// Malformed or non-JSON bodies get the shared error shape
pub fn json_rejection(rejection: JsonRejection) -> ApiError {
	error_response(StatusCode::BAD_REQUEST, "INVALID_JSON", rejection.body_text())
}
