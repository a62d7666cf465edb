//! Seam between adapters and live model providers

use super::ProviderCallResult;
use async_trait::async_trait;
use std::fmt::Debug;

/// A single prompt sent to a completion endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
	pub system: Option<String>,
	pub prompt: String,
}

impl CompletionRequest {
	pub fn new(prompt: impl Into<String>) -> Self {
		Self {
			system: None,
			prompt: prompt.into(),
		}
	}

	pub fn with_system(mut self, system: impl Into<String>) -> Self {
		self.system = Some(system.into());
		self
	}
}

/// Text completion client for a configured model provider
///
/// Implemented by the HTTP clients in `enhancer-adapters` and by test mocks.
/// One call to `complete` is exactly one outbound request; retries are not
/// performed at this layer.
#[async_trait]
pub trait CompletionClient: Send + Sync + Debug {
	/// Vendor identifier, e.g. `openai`
	fn vendor(&self) -> &str;

	/// Model the client requests completions from
	fn model(&self) -> &str;

	/// Request one completion and return its text content
	async fn complete(&self, request: &CompletionRequest) -> ProviderCallResult<String>;
}
