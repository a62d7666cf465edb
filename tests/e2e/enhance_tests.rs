// Full enhancement pipeline over HTTP

use std::time::Duration;

use crate::e2e::TestServer;
use crate::mocks::{enhance_body, isolated_settings, model_registry};
use enhancer::mocks::MockCompletionClient;
use enhancer::ProviderRegistry;
use reqwest::Client;
use serde_json::{json, Value};

async fn post_enhance(server: &TestServer, body: &Value) -> (u16, Value) {
	let resp = Client::new()
		.post(server.url("/v1/ai/enhance"))
		.json(body)
		.send()
		.await
		.expect("Enhance request failed");
	let status = resp.status().as_u16();
	let body = resp.json().await.expect("Enhance body is not JSON");
	(status, body)
}

#[tokio::test]
async fn test_enhance_with_nothing_configured_returns_fallbacks() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	let (status, body) = post_enhance(&server, &enhance_body()).await;
	assert_eq!(status, 200);
	assert_eq!(body["status"], "completed");
	assert_eq!(body["job_id"], body["enhancement_report"]["job_id"]);

	let report = &body["enhancement_report"];
	assert_eq!(report["enhancement_version"], "2.1.0");

	let synthetic = &report["synthetic_data_generation"];
	assert_eq!(synthetic["status"], "unconfigured");
	let examples = synthetic["synthetic_data"].as_array().expect("fallback examples");
	assert!(!examples.is_empty() && examples.len() <= 5);

	let analysis = &report["training_strategy_analysis"];
	assert_eq!(analysis["status"], "unconfigured");
	assert!(analysis["reasoning"].as_str().is_some_and(|r| !r.is_empty()));

	for key in [
		"search_enhanced_training",
		"multimodal_analysis",
		"innovative_solutions",
	] {
		assert_eq!(report[key]["status"], "not_configured", "{}", key);
		assert!(report[key]["demo_capability"].is_string(), "{}", key);
	}

	let distillation = &report["distillation_guidance"];
	assert_eq!(distillation["status"], "applied");
	assert_eq!(distillation["teacher_services"], json!(["demo_fallback"]));
	assert_eq!(distillation["innovation_factor"], 0.7);

	let summary = &report["orchestration_summary"];
	assert_eq!(summary["total_providers"], 5);
	assert_eq!(summary["configured_count"], 0);
	assert_eq!(summary["completeness_score"], 0.0);

	let profile = &report["input_parameters"]["training_data_profile"];
	assert_eq!(profile["sample_count"], 3);
}

#[tokio::test]
async fn test_enhance_with_model_providers_configured() {
	let generative = MockCompletionClient::with_lines(40).with_model("openai", "gpt-test");
	let reasoning = MockCompletionClient::new("Use curriculum learning.");
	let server = TestServer::spawn_with_registry(model_registry(&generative, &reasoning))
		.await
		.expect("Failed to start test server");

	let (status, body) = post_enhance(&server, &enhance_body()).await;
	assert_eq!(status, 200);

	let report = &body["enhancement_report"];
	let synthetic = &report["synthetic_data_generation"];
	assert_eq!(synthetic["status"], "success");
	assert_eq!(synthetic["source_model"], "gpt-test");
	// Default synthetic_data_count
	assert_eq!(synthetic["synthetic_data"].as_array().map(Vec::len), Some(20));

	let analysis = &report["training_strategy_analysis"];
	assert_eq!(analysis["status"], "success");
	assert_eq!(analysis["reasoning"], "Use curriculum learning.");

	assert_eq!(
		report["distillation_guidance"]["teacher_services"],
		json!(["generative", "reasoning"])
	);
	assert_eq!(report["distillation_guidance"]["search_enhancement_applied"], false);

	let summary = &report["orchestration_summary"];
	assert_eq!(summary["configured_count"], 2);
	assert_eq!(summary["completeness_score"], 0.4);
	assert_eq!(summary["utilization"]["generative"], true);
	assert_eq!(summary["utilization"]["innovative"], false);

	assert_eq!(generative.call_count(), 1);
	assert_eq!(reasoning.call_count(), 1);
}

#[tokio::test]
async fn test_enhance_skips_disabled_steps() {
	let generative = MockCompletionClient::with_lines(5);
	let reasoning = MockCompletionClient::new("analysis");
	let server = TestServer::spawn_with_registry(model_registry(&generative, &reasoning))
		.await
		.expect("Failed to start test server");

	let mut body = enhance_body();
	body["enhancement_config"] = json!({
		"generate_synthetic_data": false,
		"optimize_training_strategy": false,
		"enable_distillation": false,
		"some_unknown_option": "ignored"
	});

	let (status, body) = post_enhance(&server, &body).await;
	assert_eq!(status, 200);

	let report = &body["enhancement_report"];
	assert_eq!(report["synthetic_data_generation"]["status"], "skipped");
	assert!(report["synthetic_data_generation"].get("synthetic_data").is_none());
	assert_eq!(report["training_strategy_analysis"]["status"], "skipped");
	assert_eq!(report["distillation_guidance"], json!({"status": "skipped"}));
	// Skipping does not change what counts as configured
	assert_eq!(report["orchestration_summary"]["configured_count"], 2);

	assert_eq!(generative.call_count(), 0);
	assert_eq!(reasoning.call_count(), 0);
}

#[tokio::test]
async fn test_enhance_provider_failure_is_reported_not_raised() {
	let generative = MockCompletionClient::failing(500);
	let reasoning = MockCompletionClient::failing(429);
	let server = TestServer::spawn_with_registry(model_registry(&generative, &reasoning))
		.await
		.expect("Failed to start test server");

	let (status, body) = post_enhance(&server, &enhance_body()).await;
	assert_eq!(status, 200);

	let report = &body["enhancement_report"];
	let synthetic = &report["synthetic_data_generation"];
	assert_eq!(synthetic["status"], "failed");
	assert!(synthetic["error"].as_str().is_some_and(|e| e.contains("500")));
	assert!(synthetic["synthetic_data"].as_array().is_some_and(|d| d.len() <= 3));
	assert_eq!(report["training_strategy_analysis"]["status"], "failed");
	assert_eq!(report["orchestration_summary"]["configured_count"], 2);
}

#[tokio::test]
async fn test_enhance_validation_errors() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	let cases = [
		json!({"performance_metrics": {"accuracy": 0.9}}),
		json!({"model_description": "   ", "performance_metrics": {"accuracy": 0.9}}),
		json!({"model_description": "model"}),
		json!({
			"model_description": "model",
			"performance_metrics": {"accuracy": 0.9},
			"enhancement_config": {"synthetic_data_count": 0}
		}),
	];

	for case in cases {
		let (status, body) = post_enhance(&server, &case).await;
		assert_eq!(status, 400, "expected rejection for {}", case);
		assert_eq!(body["error"], "VALIDATION_ERROR");
		assert!(body["message"].is_string());
	}
}

#[tokio::test]
async fn test_enhance_malformed_json() {
	let server = TestServer::spawn().await.expect("Failed to start test server");

	let resp = Client::new()
		.post(server.url("/v1/ai/enhance"))
		.header("content-type", "application/json")
		.body("{not json")
		.send()
		.await
		.expect("Enhance request failed");
	assert_eq!(resp.status(), 400);

	let body: Value = resp.json().await.expect("Error body is not JSON");
	assert_eq!(body["error"], "INVALID_JSON");
}

#[tokio::test]
async fn test_enhance_slow_providers_time_out_per_call() {
	let generative = MockCompletionClient::with_lines(3).with_delay(Duration::from_secs(5));
	let reasoning = MockCompletionClient::new("slow").with_delay(Duration::from_secs(5));

	let mut settings = isolated_settings();
	settings.timeouts.per_provider_ms = 50;
	settings.timeouts.request_ms = 5_000;
	let server = TestServer::spawn_with(settings, model_registry(&generative, &reasoning))
		.await
		.expect("Failed to start test server");

	let started = std::time::Instant::now();
	let (status, body) = post_enhance(&server, &enhance_body()).await;
	assert_eq!(status, 200);
	assert!(started.elapsed() < Duration::from_secs(4));

	let report = &body["enhancement_report"];
	for key in ["synthetic_data_generation", "training_strategy_analysis"] {
		assert_eq!(report[key]["status"], "failed", "{}", key);
		assert!(
			report[key]["error"]
				.as_str()
				.is_some_and(|e| e.contains("Timeout")),
			"{}",
			key
		);
	}
}

#[tokio::test]
async fn test_unconfigured_reports_are_stable_across_requests() {
	let server = TestServer::spawn_with_registry(ProviderRegistry::unconfigured())
		.await
		.expect("Failed to start test server");

	let (_, first) = post_enhance(&server, &enhance_body()).await;
	let (_, second) = post_enhance(&server, &enhance_body()).await;

	let strip = |mut body: Value| {
		let report = body["enhancement_report"]
			.as_object_mut()
			.expect("report object");
		report.remove("job_id");
		report.remove("created_at");
		body["enhancement_report"].clone()
	};
	assert_ne!(first["job_id"], second["job_id"]);
	assert_eq!(strip(first), strip(second));
}
