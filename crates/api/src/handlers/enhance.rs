use axum::{
	extract::{rejection::JsonRejection, State},
	http::StatusCode,
	response::Json,
};
use enhancer_service::OrchestratorError;
use enhancer_types::{EnhanceResponse, EnhancementRequest};
use tracing::{info, warn};

use crate::handlers::common::{error_response, json_rejection, validation_error, ApiError};
use crate::state::AppState;

/// POST /v1/ai/enhance - Run the full enhancement pipeline
///
/// The pipeline runs inside this handler's future, so a client disconnect
/// cancels in-flight provider calls.
pub async fn post_enhance(
	State(state): State<AppState>,
	payload: Result<Json<EnhancementRequest>, JsonRejection>,
) -> Result<Json<EnhanceResponse>, ApiError> {
	let Json(request) = payload.map_err(json_rejection)?;
	info!(
		samples = request.training_data_sample.len(),
		metrics = request.performance_metrics.len(),
		"Received enhancement request"
	);

	request.validate().map_err(|e| {
		warn!("Rejected enhancement request: {}", e);
		validation_error(&e)
	})?;

	match state
		.orchestrator
		.enhance_with_deadline(&request, state.request_timeout)
		.await
	{
		Ok(report) => Ok(Json(EnhanceResponse::completed(report))),
		Err(e @ OrchestratorError::DeadlineExceeded { .. }) => Err(error_response(
			StatusCode::GATEWAY_TIMEOUT,
			"DEADLINE_EXCEEDED",
			e.to_string(),
		)),
		Err(e @ OrchestratorError::Cancelled) => Err(error_response(
			StatusCode::SERVICE_UNAVAILABLE,
			"CANCELLED",
			e.to_string(),
		)),
	}
}
