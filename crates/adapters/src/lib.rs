//! Enhancer Adapters
//!
//! Provider registry and per-provider adapters for the enhancement
//! orchestrator. Adapters never return errors: every outcome, including an
//! unconfigured provider, a failed call or a timeout, is folded into a
//! `ProviderResult` or `CapabilityBlock`.

pub mod capability;
pub mod clients;
pub mod generative;
pub mod reasoning;
pub mod registry;

pub use capability::CapabilityAdapter;
pub use clients::{AnthropicClient, OpenAiClient};
pub use generative::GenerativeAdapter;
pub use reasoning::ReasoningAdapter;
pub use registry::ProviderRegistry;

use enhancer_config::INLINE_SOURCE_NAME;
use enhancer_types::{CompletionClient, CompletionRequest, ProviderCallResult, ProviderError};
use std::time::Duration;

/// One completion call bounded by `timeout`
///
/// Elapsing the timeout drops the in-flight request.
pub(crate) async fn complete_with_timeout(
	client: &dyn CompletionClient,
	request: &CompletionRequest,
	timeout: Duration,
) -> ProviderCallResult<String> {
	match tokio::time::timeout(timeout, client.complete(request)).await {
		Ok(result) => result,
		Err(_) => Err(ProviderError::Timeout {
			timeout_ms: timeout.as_millis() as u64,
		}),
	}
}

/// The first `n` samples, used as prompt guidance
pub(crate) fn leading_samples(samples: &[String], n: usize) -> &[String] {
	&samples[..samples.len().min(n)]
}

/// Whether a credential source is an inline plain value rather than an env var
pub(crate) fn is_inline_source(source: &str) -> bool {
	source == INLINE_SOURCE_NAME
}

/// How an operator should refer to a missing credential
///
/// The environment variable name, or a request for an inline key when the
/// credential was configured as a (blank) plain value.
pub(crate) fn credential_name(source: &str) -> &str {
	if is_inline_source(source) {
		"a non-empty inline API key"
	} else {
		source
	}
}

/// Opening of a configuration hint for a missing credential
pub(crate) fn credential_hint(source: &str) -> String {
	if is_inline_source(source) {
		format!("Provide {} in the provider configuration", credential_name(source))
	} else {
		format!("Set {} environment variable", source)
	}
}
