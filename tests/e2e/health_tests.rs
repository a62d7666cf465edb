// Liveness and provider status endpoints

use crate::e2e::TestServer;
use crate::mocks::{model_registry, registry_with};
use enhancer::mocks::MockCompletionClient;
use enhancer::ProviderKind;
use reqwest::Client;
use serde_json::Value;

#[tokio::test]
async fn test_health_reports_feature_list() {
	let server = TestServer::spawn().await.expect("Failed to start test server");
	let client = Client::new();

	let resp = client
		.get(server.url("/health"))
		.send()
		.await
		.expect("Health request failed");
	assert_eq!(resp.status(), 200);

	let body: Value = resp.json().await.expect("Health body is not JSON");
	assert_eq!(body["status"], "healthy");
	assert_eq!(body["service"], "ai-model-enhancer");
	let features = body["features"].as_array().expect("features array");
	assert_eq!(features.len(), 5);
	assert!(features.iter().any(|f| f == "synthetic_data_generation"));
	assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_status_requires_configuration_when_nothing_configured() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	let body: Value = Client::new()
		.get(server.url("/v1/ai/status"))
		.send()
		.await
		.expect("Status request failed")
		.json()
		.await
		.expect("Status body is not JSON");

	assert_eq!(body["status"], "requires_configuration");
	let services = body["services"].as_object().expect("services map");
	assert_eq!(services.len(), 5);
	for kind in ProviderKind::ALL {
		let entry = &services[kind.as_str()];
		assert_eq!(entry["configured"], false, "{} should be unconfigured", kind);
		assert_eq!(entry["available"], true);
		assert_eq!(entry["credential_source"], kind.default_credential_env());
	}
	assert_eq!(body["orchestrator"]["available"], true);
}

#[tokio::test]
async fn test_status_operational_with_one_provider() {
	let unused = MockCompletionClient::new("");
	let registry = registry_with(&[ProviderKind::Multimodal], &unused, &unused);
	let server = TestServer::spawn_with_registry(registry)
		.await
		.expect("Failed to start test server");

	let body: Value = Client::new()
		.get(server.url("/v1/ai/status"))
		.send()
		.await
		.expect("Status request failed")
		.json()
		.await
		.expect("Status body is not JSON");

	assert_eq!(body["status"], "operational");
	assert_eq!(body["services"]["multimodal"]["configured"], true);
	assert_eq!(body["services"]["generative"]["configured"], false);
}

#[tokio::test]
async fn test_status_lists_vendor_capabilities() {
	let generative = MockCompletionClient::new("x");
	let reasoning = MockCompletionClient::new("y");
	let server = TestServer::spawn_with_registry(model_registry(&generative, &reasoning))
		.await
		.expect("Failed to start test server");

	let body: Value = Client::new()
		.get(server.url("/v1/ai/status"))
		.send()
		.await
		.expect("Status request failed")
		.json()
		.await
		.expect("Status body is not JSON");

	let generative_entry = &body["services"]["generative"];
	assert_eq!(generative_entry["vendor"], "openai");
	assert!(!generative_entry["capabilities"]
		.as_array()
		.expect("capabilities array")
		.is_empty());
	// Status never calls a provider
	assert_eq!(generative.call_count(), 0);
	assert_eq!(reasoning.call_count(), 0);
}
