//! Configuration settings structures

use crate::configurable_value::ConfigurableValue;
use enhancer_types::ProviderKind;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use thiserror::Error;

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub providers: ProvidersSettings,
	pub timeouts: TimeoutSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 5000,
		}
	}
}

/// Credentials and client options for the five providers
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProvidersSettings {
	#[serde(default = "ModelProviderSettings::openai")]
	pub generative: ModelProviderSettings,
	#[serde(default = "ModelProviderSettings::anthropic")]
	pub reasoning: ModelProviderSettings,
	#[serde(default = "CredentialSettings::perplexity")]
	pub search_augmented: CredentialSettings,
	#[serde(default = "CredentialSettings::gemini")]
	pub multimodal: CredentialSettings,
	#[serde(default = "CredentialSettings::grok")]
	pub innovative: CredentialSettings,
}

impl Default for ProvidersSettings {
	fn default() -> Self {
		Self {
			generative: ModelProviderSettings::openai(),
			reasoning: ModelProviderSettings::anthropic(),
			search_augmented: CredentialSettings::perplexity(),
			multimodal: CredentialSettings::gemini(),
			innovative: CredentialSettings::grok(),
		}
	}
}

impl ProvidersSettings {
	/// Credential reference for any provider category
	pub fn credential(&self, kind: ProviderKind) -> &ConfigurableValue {
		match kind {
			ProviderKind::Generative => &self.generative.api_key,
			ProviderKind::Reasoning => &self.reasoning.api_key,
			ProviderKind::SearchAugmented => &self.search_augmented.api_key,
			ProviderKind::Multimodal => &self.multimodal.api_key,
			ProviderKind::Innovative => &self.innovative.api_key,
		}
	}

	/// Client options for the two providers that make live calls
	pub fn model(&self, kind: ProviderKind) -> Option<&ModelProviderSettings> {
		match kind {
			ProviderKind::Generative => Some(&self.generative),
			ProviderKind::Reasoning => Some(&self.reasoning),
			_ => None,
		}
	}
}

/// A provider that is called for completions
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ModelProviderSettings {
	pub api_key: ConfigurableValue,
	pub model: String,
	pub endpoint: String,
	pub max_tokens: u32,
	pub temperature: f64,
}

impl ModelProviderSettings {
	pub fn openai() -> Self {
		Self {
			api_key: ConfigurableValue::from_env(ProviderKind::Generative.default_credential_env()),
			model: "gpt-4o".to_string(),
			endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
			max_tokens: 2000,
			temperature: 0.8,
		}
	}

	pub fn anthropic() -> Self {
		Self {
			api_key: ConfigurableValue::from_env(ProviderKind::Reasoning.default_credential_env()),
			model: "claude-3-5-sonnet-20241022".to_string(),
			endpoint: "https://api.anthropic.com/v1/messages".to_string(),
			max_tokens: 2000,
			temperature: 0.7,
		}
	}
}

/// A capability-only provider; only credential presence matters
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CredentialSettings {
	pub api_key: ConfigurableValue,
}

impl CredentialSettings {
	fn for_kind(kind: ProviderKind) -> Self {
		Self {
			api_key: ConfigurableValue::from_env(kind.default_credential_env()),
		}
	}

	pub fn perplexity() -> Self {
		Self::for_kind(ProviderKind::SearchAugmented)
	}

	pub fn gemini() -> Self {
		Self::for_kind(ProviderKind::Multimodal)
	}

	pub fn grok() -> Self {
		Self::for_kind(ProviderKind::Innovative)
	}
}

/// Timeout configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TimeoutSettings {
	/// Timeout applied to each individual provider call
	pub per_provider_ms: u64,
	/// Deadline for a whole enhancement request at the HTTP boundary
	pub request_ms: u64,
}

impl Default for TimeoutSettings {
	fn default() -> Self {
		Self {
			per_provider_ms: 30_000,
			request_ms: 90_000,
		}
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

/// Settings that parse but cannot be run with
#[derive(Error, Debug, PartialEq)]
pub enum ConfigValidationError {
	#[error("Timeout '{field}' must be greater than zero")]
	ZeroTimeout { field: String },

	#[error("Per-provider timeout ({per_provider_ms}ms) exceeds request timeout ({request_ms}ms)")]
	TimeoutOrdering {
		per_provider_ms: u64,
		request_ms: u64,
	},

	#[error("Invalid endpoint for {provider}: {reason}")]
	InvalidEndpoint { provider: String, reason: String },

	#[error("Model name for {provider} must not be empty")]
	EmptyModel { provider: String },

	#[error("Invalid bind address '{address}'")]
	InvalidBindAddress { address: String },
}

impl Settings {
	/// Get server bind address
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	pub fn validate(&self) -> Result<(), ConfigValidationError> {
		for (field, value) in [
			("per_provider_ms", self.timeouts.per_provider_ms),
			("request_ms", self.timeouts.request_ms),
		] {
			if value == 0 {
				return Err(ConfigValidationError::ZeroTimeout {
					field: field.to_string(),
				});
			}
		}

		if self.timeouts.per_provider_ms > self.timeouts.request_ms {
			return Err(ConfigValidationError::TimeoutOrdering {
				per_provider_ms: self.timeouts.per_provider_ms,
				request_ms: self.timeouts.request_ms,
			});
		}

		for kind in [ProviderKind::Generative, ProviderKind::Reasoning] {
			let Some(model) = self.providers.model(kind) else {
				continue;
			};
			if model.model.trim().is_empty() {
				return Err(ConfigValidationError::EmptyModel {
					provider: kind.to_string(),
				});
			}
			url::Url::parse(&model.endpoint).map_err(|e| {
				ConfigValidationError::InvalidEndpoint {
					provider: kind.to_string(),
					reason: e.to_string(),
				}
			})?;
		}

		let address = self.bind_address();
		if address.parse::<SocketAddr>().is_err() {
			return Err(ConfigValidationError::InvalidBindAddress { address });
		}

		Ok(())
	}
}
