use axum::{extract::State, response::Json};
use enhancer_types::ServiceStatus;

use crate::state::AppState;

/// GET /v1/ai/status - Provider configuration snapshot
pub async fn get_ai_status(State(state): State<AppState>) -> Json<ServiceStatus> {
	Json(state.orchestrator.service_status())
}
