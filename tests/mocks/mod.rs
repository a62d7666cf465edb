//! Shared fixtures for integration tests
//!
//! Registries wired to mock completion clients, settings that never pick up
//! credentials from the ambient environment, and request bodies.

#![allow(dead_code)]

use enhancer::mocks::MockCompletionClient;
use enhancer::{ProviderKind, ProviderRegistry, Settings};
use enhancer_config::ConfigurableValue;
use serde_json::{json, Value};

/// Default settings with every credential pointed at an unset variable
pub fn isolated_settings() -> Settings {
	let mut settings = Settings::default();
	let unset = ConfigurableValue::from_env("ENHANCER_TEST_CREDENTIAL_NEVER_SET");
	settings.providers.generative.api_key = unset.clone();
	settings.providers.reasoning.api_key = unset.clone();
	settings.providers.search_augmented.api_key = unset.clone();
	settings.providers.multimodal.api_key = unset.clone();
	settings.providers.innovative.api_key = unset;
	settings
}

/// Registry with exactly `configured` marked configured
///
/// Model providers are backed by the given mock clients; the capability-only
/// providers carry no client.
pub fn registry_with(
	configured: &[ProviderKind],
	generative: &MockCompletionClient,
	reasoning: &MockCompletionClient,
) -> ProviderRegistry {
	configured
		.iter()
		.fold(ProviderRegistry::unconfigured(), |registry, kind| match kind {
			ProviderKind::Generative => registry.with_generative(generative.shared()),
			ProviderKind::Reasoning => registry.with_reasoning(reasoning.shared()),
			other => registry.with_capability(*other),
		})
}

/// Generative and Reasoning configured, the other three not
pub fn model_registry(
	generative: &MockCompletionClient,
	reasoning: &MockCompletionClient,
) -> ProviderRegistry {
	registry_with(
		&[ProviderKind::Generative, ProviderKind::Reasoning],
		generative,
		reasoning,
	)
}

pub fn enhance_body() -> Value {
	json!({
		"model_description": "image classifier",
		"training_data_sample": ["a cat", "a dog", "a cat"],
		"performance_metrics": {"accuracy": 0.82, "loss": 0.41}
	})
}

pub fn synthetic_body(target_count: i64) -> Value {
	json!({
		"model_description": "sentiment model",
		"existing_data_sample": ["great product", "terrible service"],
		"target_count": target_count
	})
}

pub fn analyze_body() -> Value {
	json!({
		"model_description": "fraud detector",
		"training_data_sample": ["txn 1", "txn 2"],
		"performance_metrics": {"precision": 0.7},
		"analysis_type": "reasoning"
	})
}
