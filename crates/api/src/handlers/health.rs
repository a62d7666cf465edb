use axum::response::Json;
use serde::Serialize;

/// Service health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
	pub status: &'static str,
	pub service: &'static str,
	pub version: &'static str,
	pub features: Vec<&'static str>,
	pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// GET /health - Liveness with the feature list
pub async fn health() -> Json<HealthResponse> {
	Json(HealthResponse {
		status: "healthy",
		service: "ai-model-enhancer",
		version: env!("CARGO_PKG_VERSION"),
		features: vec![
			"external_ai_integration",
			"multi_provider_orchestration",
			"model_enhancement_pipeline",
			"synthetic_data_generation",
			"advanced_model_analysis",
		],
		timestamp: chrono::Utc::now(),
	})
}
