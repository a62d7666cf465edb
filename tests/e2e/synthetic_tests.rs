// Standalone synthetic data endpoint

use crate::e2e::TestServer;
use crate::mocks::{model_registry, synthetic_body};
use enhancer::mocks::MockCompletionClient;
use reqwest::Client;
use serde_json::{json, Value};

async fn post_synthetic(server: &TestServer, body: &Value) -> (u16, Value) {
	let resp = Client::new()
		.post(server.url("/v1/ai/synthetic-data"))
		.json(body)
		.send()
		.await
		.expect("Synthetic data request failed");
	let status = resp.status().as_u16();
	(status, resp.json().await.expect("Synthetic body is not JSON"))
}

#[tokio::test]
async fn test_synthetic_data_truncates_to_target() {
	let generative = MockCompletionClient::with_lines(10).with_model("openai", "gpt-test");
	let reasoning = MockCompletionClient::new("unused");
	let server = TestServer::spawn_with_registry(model_registry(&generative, &reasoning))
		.await
		.expect("Failed to start test server");

	let (status, body) = post_synthetic(&server, &synthetic_body(3)).await;
	assert_eq!(status, 200);
	assert_eq!(body["status"], "completed");
	assert_eq!(body["generated_count"], 3);
	assert_eq!(
		body["synthetic_data"],
		json!(["Mock example 1", "Mock example 2", "Mock example 3"])
	);

	let metadata = &body["generation_metadata"];
	assert_eq!(metadata["generation_method"], "openai_gpt-test");
	assert_eq!(metadata["source_services"], json!(["openai"]));
	assert_eq!(metadata["original_sample_size"], 2);
	assert_eq!(metadata["target_count"], 3);
	assert!(body.get("error").is_none());
	assert_eq!(reasoning.call_count(), 0);
}

#[tokio::test]
async fn test_synthetic_data_unconfigured_falls_back() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	let (status, body) = post_synthetic(&server, &synthetic_body(8)).await;
	assert_eq!(status, 200);
	assert_eq!(body["status"], "failed");
	assert_eq!(body["generated_count"], 5);
	assert_eq!(body["generation_metadata"]["generation_method"], "demo_fallback");
	assert_eq!(
		body["generation_metadata"]["source_services"],
		json!(["demo_fallback"])
	);
	assert!(body["error"].is_string());
	assert!(body["note"]
		.as_str()
		.is_some_and(|n| n.contains("OPENAI_API_KEY")));
}

#[tokio::test]
async fn test_synthetic_data_defaults_target_count() {
	let generative = MockCompletionClient::with_lines(30);
	let reasoning = MockCompletionClient::new("unused");
	let server = TestServer::spawn_with_registry(model_registry(&generative, &reasoning))
		.await
		.expect("Failed to start test server");

	let (status, body) = post_synthetic(
		&server,
		&json!({"model_description": "ner tagger", "training_data_sample": ["x"]}),
	)
	.await;
	assert_eq!(status, 200);
	assert_eq!(body["generated_count"], 10);
	assert_eq!(body["generation_metadata"]["original_sample_size"], 1);
}

#[tokio::test]
async fn test_synthetic_data_rejects_bad_input() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	let (status, body) = post_synthetic(&server, &synthetic_body(0)).await;
	assert_eq!(status, 400);
	assert_eq!(body["error"], "VALIDATION_ERROR");

	let (status, _) = post_synthetic(&server, &json!({"target_count": 4})).await;
	assert_eq!(status, 400);
}
