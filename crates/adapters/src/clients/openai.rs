//! OpenAI-compatible chat completions client

use super::{build_client, post_json};
use async_trait::async_trait;
use enhancer_types::{
	CompletionClient, CompletionRequest, ProviderCallResult, ProviderError, SecretString,
};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
	model: &'a str,
	messages: Vec<ChatMessage<'a>>,
	max_tokens: u32,
	temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
	role: &'static str,
	content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
	choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
	message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
	content: Option<String>,
}

/// Client for `POST /v1/chat/completions`
#[derive(Debug, Clone)]
pub struct OpenAiClient {
	client: Client,
	endpoint: String,
	model: String,
	max_tokens: u32,
	temperature: f64,
}

impl OpenAiClient {
	pub fn new(
		api_key: &SecretString,
		endpoint: impl Into<String>,
		model: impl Into<String>,
		timeout: Duration,
	) -> ProviderCallResult<Self> {
		let client = build_client(
			&[(
				"authorization",
				format!("Bearer {}", api_key.expose_secret()),
			)],
			timeout,
		)?;

		Ok(Self {
			client,
			endpoint: endpoint.into(),
			model: model.into(),
			max_tokens: 2000,
			temperature: 0.8,
		})
	}

	pub fn with_sampling(mut self, max_tokens: u32, temperature: f64) -> Self {
		self.max_tokens = max_tokens;
		self.temperature = temperature;
		self
	}
}

#[async_trait]
impl CompletionClient for OpenAiClient {
	fn vendor(&self) -> &str {
		"openai"
	}

	fn model(&self) -> &str {
		&self.model
	}

	async fn complete(&self, request: &CompletionRequest) -> ProviderCallResult<String> {
		let mut messages = Vec::with_capacity(2);
		if let Some(system) = &request.system {
			messages.push(ChatMessage {
				role: "system",
				content: system,
			});
		}
		messages.push(ChatMessage {
			role: "user",
			content: &request.prompt,
		});

		let body = ChatRequest {
			model: &self.model,
			messages,
			max_tokens: self.max_tokens,
			temperature: self.temperature,
		};

		let response: ChatResponse = post_json(&self.client, &self.endpoint, &body).await?;
		response
			.choices
			.into_iter()
			.next()
			.and_then(|choice| choice.message.content)
			.ok_or_else(|| ProviderError::InvalidResponse {
				reason: "chat completion contained no message content".to_string(),
			})
	}
}
