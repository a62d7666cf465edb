//! Startup snapshot of which providers are configured
//!
//! The registry is resolved once from `Settings` and is read-only afterwards;
//! a credential added after startup has no effect until restart.

use crate::clients::{AnthropicClient, OpenAiClient};
use enhancer_config::Settings;
use enhancer_types::{
	CompletionClient, ProviderConfig, ProviderError, ProviderKind, ServiceStatus,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct ProviderRegistry {
	providers: BTreeMap<ProviderKind, ProviderConfig>,
	generative: Option<Arc<dyn CompletionClient>>,
	reasoning: Option<Arc<dyn CompletionClient>>,
}

impl ProviderRegistry {
	/// Registry with every provider unconfigured
	pub fn unconfigured() -> Self {
		Self {
			providers: ProviderKind::ALL
				.iter()
				.map(|kind| (*kind, ProviderConfig::unconfigured(*kind)))
				.collect(),
			generative: None,
			reasoning: None,
		}
	}

	/// Resolve credentials and build clients from settings
	///
	/// Fails open: an unresolvable credential or a client that cannot be
	/// constructed leaves that provider unconfigured.
	pub fn from_settings(settings: &Settings) -> Self {
		let mut registry = Self::unconfigured();
		let timeout = Duration::from_millis(settings.timeouts.per_provider_ms);

		for kind in ProviderKind::ALL {
			let credential = settings.providers.credential(kind);
			let source = credential.source_name();
			if let Some(entry) = registry.providers.get_mut(&kind) {
				entry.credential_source = source.clone();
			}

			let Some(secret) = credential.resolve_optional() else {
				debug!(provider = %kind, "No credential found in {}", source);
				continue;
			};

			match kind {
				ProviderKind::Generative => {
					let model = &settings.providers.generative;
					match OpenAiClient::new(&secret, &model.endpoint, &model.model, timeout) {
						Ok(client) => {
							registry = registry.with_generative(Arc::new(
								client.with_sampling(model.max_tokens, model.temperature),
							));
						},
						Err(e) => warn_construction(kind, e),
					}
				},
				ProviderKind::Reasoning => {
					let model = &settings.providers.reasoning;
					match AnthropicClient::new(&secret, &model.endpoint, &model.model, timeout) {
						Ok(client) => {
							registry = registry.with_reasoning(Arc::new(
								client.with_sampling(model.max_tokens, model.temperature),
							));
						},
						Err(e) => warn_construction(kind, e),
					}
				},
				_ => registry = registry.with_capability(kind),
			}
		}

		registry
	}

	/// Install the generative client and mark the provider configured
	pub fn with_generative(mut self, client: Arc<dyn CompletionClient>) -> Self {
		self.mark_configured(ProviderKind::Generative);
		self.generative = Some(client);
		self
	}

	/// Install the reasoning client and mark the provider configured
	pub fn with_reasoning(mut self, client: Arc<dyn CompletionClient>) -> Self {
		self.mark_configured(ProviderKind::Reasoning);
		self.reasoning = Some(client);
		self
	}

	/// Mark a capability-only provider configured
	///
	/// Model providers are configured through their client instead and are
	/// left untouched here.
	pub fn with_capability(mut self, kind: ProviderKind) -> Self {
		if kind.is_capability_only() {
			self.mark_configured(kind);
		}
		self
	}

	fn mark_configured(&mut self, kind: ProviderKind) {
		if let Some(entry) = self.providers.get_mut(&kind) {
			entry.configured = true;
		}
	}

	pub fn get(&self, kind: ProviderKind) -> &ProviderConfig {
		// Every kind is inserted by `unconfigured()` and never removed
		&self.providers[&kind]
	}

	pub fn is_configured(&self, kind: ProviderKind) -> bool {
		self.get(kind).configured
	}

	/// Configured providers in canonical report order
	pub fn configured_providers(&self) -> Vec<ProviderKind> {
		self.providers
			.values()
			.filter(|c| c.configured)
			.map(|c| c.name)
			.collect()
	}

	/// All provider configs in canonical order
	pub fn configs(&self) -> impl Iterator<Item = &ProviderConfig> {
		self.providers.values()
	}

	pub fn generative_client(&self) -> Option<Arc<dyn CompletionClient>> {
		self.generative.clone()
	}

	pub fn reasoning_client(&self) -> Option<Arc<dyn CompletionClient>> {
		self.reasoning.clone()
	}

	/// `GetStatus()` snapshot
	pub fn status(&self) -> ServiceStatus {
		ServiceStatus::from_configs(self.providers.values())
	}
}

impl Default for ProviderRegistry {
	fn default() -> Self {
		Self::unconfigured()
	}
}

fn warn_construction(kind: ProviderKind, error: ProviderError) {
	warn!(
		provider = %kind,
		error = %error,
		"Client construction failed, provider treated as unconfigured"
	);
}
