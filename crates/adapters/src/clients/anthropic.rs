//! Anthropic Messages API client

use super::{build_client, post_json};
use async_trait::async_trait;
use enhancer_types::{
	CompletionClient, CompletionRequest, ProviderCallResult, ProviderError, SecretString,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The Anthropic API version header value.
const API_VERSION: &str = "2023-06-01";

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
	model: &'a str,
	max_tokens: u32,
	temperature: f64,
	#[serde(skip_serializing_if = "Option::is_none")]
	system: Option<&'a str>,
	messages: [Message<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Message<'a> {
	role: &'static str,
	content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
	content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
	#[serde(rename = "type")]
	kind: String,
	#[serde(default)]
	text: Option<String>,
}

/// Client for `POST /v1/messages`
#[derive(Debug, Clone)]
pub struct AnthropicClient {
	client: Client,
	endpoint: String,
	model: String,
	max_tokens: u32,
	temperature: f64,
}

impl AnthropicClient {
	pub fn new(
		api_key: &SecretString,
		endpoint: impl Into<String>,
		model: impl Into<String>,
		timeout: Duration,
	) -> ProviderCallResult<Self> {
		let client = build_client(
			&[
				("x-api-key", api_key.expose_secret().to_string()),
				("anthropic-version", API_VERSION.to_string()),
			],
			timeout,
		)?;

		Ok(Self {
			client,
			endpoint: endpoint.into(),
			model: model.into(),
			max_tokens: 2000,
			temperature: 0.7,
		})
	}

	pub fn with_sampling(mut self, max_tokens: u32, temperature: f64) -> Self {
		self.max_tokens = max_tokens;
		self.temperature = temperature;
		self
	}
}

#[async_trait]
impl CompletionClient for AnthropicClient {
	fn vendor(&self) -> &str {
		"anthropic"
	}

	fn model(&self) -> &str {
		&self.model
	}

	async fn complete(&self, request: &CompletionRequest) -> ProviderCallResult<String> {
		let body = MessagesRequest {
			model: &self.model,
			max_tokens: self.max_tokens,
			temperature: self.temperature,
			system: request.system.as_deref(),
			messages: [Message {
				role: "user",
				content: &request.prompt,
			}],
		};

		let response: MessagesResponse = post_json(&self.client, &self.endpoint, &body).await?;
		let text: Vec<String> = response
			.content
			.into_iter()
			.filter(|block| block.kind == "text")
			.filter_map(|block| block.text)
			.collect();

		if text.is_empty() {
			return Err(ProviderError::InvalidResponse {
				reason: "message contained no text content".to_string(),
			});
		}
		Ok(text.join("\n"))
	}
}
