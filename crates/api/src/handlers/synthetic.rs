use axum::{
	extract::{rejection::JsonRejection, State},
	response::Json,
};
use enhancer_types::{SyntheticDataRequest, SyntheticDataResponse};
use tracing::info;

use crate::handlers::common::{json_rejection, validation_error, ApiError};
use crate::state::AppState;

/// POST /v1/ai/synthetic-data - Generative provider only
pub async fn post_synthetic_data(
	State(state): State<AppState>,
	payload: Result<Json<SyntheticDataRequest>, JsonRejection>,
) -> Result<Json<SyntheticDataResponse>, ApiError> {
	let Json(request) = payload.map_err(json_rejection)?;
	request.validate().map_err(|e| validation_error(&e))?;

	info!(
		target_count = request.target_count,
		samples = request.existing_data_sample.len(),
		"Generating synthetic data"
	);
	Ok(Json(state.orchestrator.generate_synthetic_data(&request).await))
}
