//! Mock completion client for examples and testing
//!
//! Stands in for a live model provider: scripted text, optional delay,
//! optional failure, and a shared call counter.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use enhancer_types::{CompletionClient, CompletionRequest, ProviderCallResult, ProviderError};

/// Scripted `CompletionClient`
#[derive(Debug, Clone)]
pub struct MockCompletionClient {
	vendor: String,
	model: String,
	response: Result<String, u16>,
	delay: Duration,
	calls: Arc<AtomicUsize>,
}

impl MockCompletionClient {
	/// Client that answers every call with `text`
	pub fn new(text: impl Into<String>) -> Self {
		Self {
			vendor: "mock".to_string(),
			model: "mock-model".to_string(),
			response: Ok(text.into()),
			delay: Duration::ZERO,
			calls: Arc::new(AtomicUsize::new(0)),
		}
	}

	/// Client answering with `count` numbered example lines
	pub fn with_lines(count: usize) -> Self {
		let text = (1..=count)
			.map(|i| format!("Mock example {}", i))
			.collect::<Vec<_>>()
			.join("\n");
		Self::new(text)
	}

	/// Client whose every call fails with the given HTTP status
	pub fn failing(status_code: u16) -> Self {
		Self {
			response: Err(status_code),
			..Self::new("")
		}
	}

	pub fn with_delay(mut self, delay: Duration) -> Self {
		self.delay = delay;
		self
	}

	pub fn with_model(mut self, vendor: &str, model: &str) -> Self {
		self.vendor = vendor.to_string();
		self.model = model.to_string();
		self
	}

	/// Calls started so far, across all clones
	pub fn call_count(&self) -> usize {
		self.calls.load(Ordering::SeqCst)
	}

	/// Shareable handle for a registry
	pub fn shared(&self) -> Arc<dyn CompletionClient> {
		Arc::new(self.clone())
	}
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
	fn vendor(&self) -> &str {
		&self.vendor
	}

	fn model(&self) -> &str {
		&self.model
	}

	async fn complete(&self, _request: &CompletionRequest) -> ProviderCallResult<String> {
		self.calls.fetch_add(1, Ordering::SeqCst);
		if !self.delay.is_zero() {
			tokio::time::sleep(self.delay).await;
		}
		match &self.response {
			Ok(text) => Ok(text.clone()),
			Err(status_code) => Err(ProviderError::HttpStatus {
				status_code: *status_code,
				reason: "mock provider failure".to_string(),
			}),
		}
	}
}
