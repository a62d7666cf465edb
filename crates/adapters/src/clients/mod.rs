//! HTTP completion clients for the two providers that make live calls
//!
//! Both clients hold one pooled `reqwest::Client` with the vendor's auth
//! headers installed as default headers, built once at startup.

pub mod anthropic;
pub mod openai;

pub use anthropic::AnthropicClient;
pub use openai::OpenAiClient;

use enhancer_types::{ProviderCallResult, ProviderError};
use reqwest::{
	header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE, USER_AGENT},
	Client,
};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::debug;

/// Longest error body kept in an `HttpStatus` reason
const MAX_ERROR_BODY: usize = 512;

/// Build a client with JSON defaults plus the given auth headers
pub(crate) fn build_client(
	auth_headers: &[(&'static str, String)],
	timeout: Duration,
) -> ProviderCallResult<Client> {
	let mut headers = HeaderMap::new();
	headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
	headers.insert(USER_AGENT, HeaderValue::from_static("AI-Model-Enhancer/2.1"));

	for (name, value) in auth_headers {
		let mut value =
			HeaderValue::from_str(value).map_err(|_| ProviderError::ClientConstruction {
				reason: format!("invalid value for header '{}'", name),
			})?;
		value.set_sensitive(true);
		headers.insert(HeaderName::from_static(name), value);
	}

	Client::builder()
		.default_headers(headers)
		.timeout(timeout)
		.pool_max_idle_per_host(4)
		.build()
		.map_err(|e| ProviderError::ClientConstruction {
			reason: e.to_string(),
		})
}

/// POST a JSON body and decode a JSON response
///
/// Non-2xx responses become `HttpStatus` carrying a truncated body.
pub(crate) async fn post_json<B, R>(client: &Client, endpoint: &str, body: &B) -> ProviderCallResult<R>
where
	B: Serialize + ?Sized,
	R: DeserializeOwned,
{
	debug!("POST {}", endpoint);
	let response = client.post(endpoint).json(body).send().await?;
	let status = response.status();

	if !status.is_success() {
		let mut reason = response.text().await.unwrap_or_default();
		if reason.len() > MAX_ERROR_BODY {
			let mut cut = MAX_ERROR_BODY;
			while !reason.is_char_boundary(cut) {
				cut -= 1;
			}
			reason.truncate(cut);
		}
		if reason.is_empty() {
			reason = status.canonical_reason().unwrap_or("unknown").to_string();
		}
		return Err(ProviderError::HttpStatus {
			status_code: status.as_u16(),
			reason,
		});
	}

	let bytes = response.bytes().await?;
	Ok(serde_json::from_slice(&bytes)?)
}
