//! Builder wiring tests

mod mocks;

use enhancer::mocks::MockCompletionClient;
use enhancer::{EnhancerBuilder, ProviderKind, ProviderRegistry};
use mocks::{isolated_settings, model_registry};

#[test]
fn test_builder_defaults() {
	let builder = EnhancerBuilder::new();
	assert!(builder.settings().is_none());
}

#[test]
fn test_builder_keeps_settings() {
	let mut settings = isolated_settings();
	settings.server.port = 6123;
	let builder = EnhancerBuilder::new().with_settings(settings);
	assert_eq!(builder.settings().map(|s| s.server.port), Some(6123));
}

#[tokio::test]
async fn test_start_rejects_invalid_timeouts() {
	let mut settings = isolated_settings();
	settings.timeouts.per_provider_ms = 10_000;
	settings.timeouts.request_ms = 1_000;

	let result = EnhancerBuilder::new()
		.with_settings(settings)
		.with_registry(ProviderRegistry::unconfigured())
		.start()
		.await;

	let err = result.err().expect("invalid timeouts must be rejected");
	assert!(err.to_string().contains("Invalid configuration"));
}

#[tokio::test]
async fn test_start_uses_supplied_registry() {
	let generative = MockCompletionClient::new("x");
	let reasoning = MockCompletionClient::new("y");

	let (_router, state) = EnhancerBuilder::new()
		.with_settings(isolated_settings())
		.with_registry(model_registry(&generative, &reasoning))
		.start()
		.await
		.expect("builder starts");

	let status = state.orchestrator.service_status();
	assert!(status.services[&ProviderKind::Generative].configured);
	assert!(status.services[&ProviderKind::Reasoning].configured);
	assert!(!status.services[&ProviderKind::Innovative].configured);
}

#[tokio::test]
async fn test_start_without_credentials_builds_unconfigured_registry() {
	let (_router, state) = EnhancerBuilder::new()
		.with_settings(isolated_settings())
		.start()
		.await
		.expect("builder starts");

	let status = state.orchestrator.service_status();
	assert!(status.services.values().all(|c| !c.configured));
	assert_eq!(state.request_timeout.as_millis(), 90_000);
}
