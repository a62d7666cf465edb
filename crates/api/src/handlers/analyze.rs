use axum::{
	extract::{rejection::JsonRejection, State},
	response::Json,
};
use enhancer_types::{ModelAnalysisRequest, ModelAnalysisResponse};
use tracing::info;

use crate::handlers::common::{json_rejection, validation_error, ApiError};
use crate::state::AppState;

/// POST /v1/ai/analyze - Reasoning provider only
pub async fn post_analyze(
	State(state): State<AppState>,
	payload: Result<Json<ModelAnalysisRequest>, JsonRejection>,
) -> Result<Json<ModelAnalysisResponse>, ApiError> {
	let Json(request) = payload.map_err(json_rejection)?;
	request.validate().map_err(|e| validation_error(&e))?;

	info!(analysis_type = %request.analysis_type, "Analyzing model");
	Ok(Json(state.orchestrator.analyze_model(&request).await))
}
