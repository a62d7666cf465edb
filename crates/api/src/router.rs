use axum::{
	routing::{get, post},
	Router,
};
use tower::ServiceBuilder;
use tower_http::{
	cors::CorsLayer,
	limit::RequestBodyLimitLayer,
	request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
	trace::TraceLayer,
};
use tracing::Level;

use crate::handlers::{get_ai_status, health, post_analyze, post_enhance, post_synthetic_data};
use crate::state::AppState;

/// Routes served, for startup logging
pub const ROUTES: &[&str] = &[
	"GET  /health",
	"GET  /v1/ai/status",
	"POST /v1/ai/enhance",
	"POST /v1/ai/synthetic-data",
	"POST /v1/ai/analyze",
];

pub fn create_router() -> Router<AppState> {
	let cors = CorsLayer::permissive();
	let body_limit = RequestBodyLimitLayer::new(1024 * 1024);
	let trace = TraceLayer::new_for_http()
		.make_span_with(|req: &axum::http::Request<_>| {
			let req_id = req
				.headers()
				.get("x-request-id")
				.and_then(|v| v.to_str().ok())
				.unwrap_or("-");
			tracing::info_span!(
				"http_request",
				method = %req.method(),
				uri = %req.uri(),
				req_id
			)
		})
		.on_request(tower_http::trace::DefaultOnRequest::new().level(Level::INFO))
		.on_response(
			tower_http::trace::DefaultOnResponse::new()
				.level(Level::INFO)
				.latency_unit(tower_http::LatencyUnit::Millis),
		);
	let req_id = ServiceBuilder::new()
		.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
		.layer(PropagateRequestIdLayer::x_request_id());

	Router::new()
		.route("/health", get(health))
		.route("/v1/ai/status", get(get_ai_status))
		.route("/v1/ai/enhance", post(post_enhance))
		.route("/v1/ai/synthetic-data", post(post_synthetic_data))
		.route("/v1/ai/analyze", post(post_analyze))
		.layer(cors)
		.layer(trace)
		.layer(req_id)
		.layer(body_limit)
}
