// Standalone model analysis endpoint

use crate::e2e::TestServer;
use crate::mocks::{analyze_body, model_registry};
use enhancer::mocks::MockCompletionClient;
use reqwest::Client;
use serde_json::{json, Value};

async fn post_analyze(server: &TestServer, body: &Value) -> (u16, Value) {
	let resp = Client::new()
		.post(server.url("/v1/ai/analyze"))
		.json(body)
		.send()
		.await
		.expect("Analyze request failed");
	let status = resp.status().as_u16();
	(status, resp.json().await.expect("Analyze body is not JSON"))
}

#[tokio::test]
async fn test_analyze_success_includes_recommendations() {
	let generative = MockCompletionClient::new("unused");
	let reasoning =
		MockCompletionClient::new("Regularize more.").with_model("anthropic", "claude-test");
	let server = TestServer::spawn_with_registry(model_registry(&generative, &reasoning))
		.await
		.expect("Failed to start test server");

	let (status, body) = post_analyze(&server, &analyze_body()).await;
	assert_eq!(status, 200);
	assert_eq!(body["status"], "completed");
	assert_eq!(body["analysis_type"], "reasoning");
	assert!(body["analysis_id"].is_string());

	let results = &body["analysis_results"];
	assert_eq!(results["status"], "success");
	assert_eq!(results["source_model"], "claude-test");
	assert_eq!(results["reasoning"], "Regularize more.");
	assert_eq!(
		body["generated_recommendations"].as_array().map(Vec::len),
		Some(4)
	);
	assert_eq!(generative.call_count(), 0);
}

#[tokio::test]
async fn test_analyze_unconfigured_has_no_recommendations() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	let (status, body) = post_analyze(&server, &analyze_body()).await;
	assert_eq!(status, 200);
	assert_eq!(body["status"], "failed");
	assert_eq!(body["analysis_results"]["status"], "unconfigured");
	assert!(body["analysis_results"]["reasoning"].is_string());
	assert_eq!(body["generated_recommendations"], json!([]));
}

#[tokio::test]
async fn test_analyze_defaults_analysis_type() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	let (status, body) = post_analyze(
		&server,
		&json!({"model_description": "ranker", "performance_metrics": {"ndcg": 0.6}}),
	)
	.await;
	assert_eq!(status, 200);
	assert_eq!(body["analysis_type"], "reasoning");
}

#[tokio::test]
async fn test_analyze_requires_metrics() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	let (status, body) = post_analyze(&server, &json!({"model_description": "ranker"})).await;
	assert_eq!(status, 400);
	assert_eq!(body["error"], "VALIDATION_ERROR");
}
