//! Synthetic training data generation

use crate::{complete_with_timeout, credential_hint, leading_samples, ProviderRegistry};
use enhancer_types::{
	CompletionClient, CompletionRequest, ProviderKind, ProviderResult, SyntheticData,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Unconfigured fallback never exceeds this many examples
const MAX_DEMO_EXAMPLES: usize = 5;
/// Failure fallback never exceeds this many examples
const MAX_FAILURE_EXAMPLES: usize = 3;
/// Existing samples quoted in the prompt
const GUIDANCE_SAMPLES: usize = 3;

const SYSTEM_PROMPT: &str = "You are an expert synthetic data generator. Your task is to create \
	diverse, high-quality, and representative training examples based on the provided context. \
	Ensure variety in format and content where appropriate.";

const FAILURE_NOTE: &str =
	"Please check your OpenAI API key, organization settings, and available quota.";

/// Wraps the generative provider
#[derive(Debug, Clone)]
pub struct GenerativeAdapter {
	client: Option<Arc<dyn CompletionClient>>,
	credential_source: String,
	timeout: Duration,
}

impl GenerativeAdapter {
	pub fn new(
		client: Option<Arc<dyn CompletionClient>>,
		credential_source: impl Into<String>,
		timeout: Duration,
	) -> Self {
		Self {
			client,
			credential_source: credential_source.into(),
			timeout,
		}
	}

	pub fn from_registry(registry: &ProviderRegistry, timeout: Duration) -> Self {
		Self::new(
			registry.generative_client(),
			registry.get(ProviderKind::Generative).credential_source.clone(),
			timeout,
		)
	}

	pub fn is_configured(&self) -> bool {
		self.client.is_some()
	}

	/// `Generate(description, existing_samples, target_count)`
	///
	/// One provider call at most. The returned list is truncated to
	/// `target_count` and never padded.
	pub async fn generate(
		&self,
		description: &str,
		existing_samples: &[String],
		target_count: usize,
	) -> ProviderResult<SyntheticData> {
		let Some(client) = &self.client else {
			return ProviderResult::Unconfigured {
				provider: ProviderKind::Generative,
				note: format!(
					"{} for real AI-generated data.",
					credential_hint(&self.credential_source)
				),
				payload: SyntheticData::new(demo_examples(description, target_count)),
			};
		};

		let request = CompletionRequest::new(build_prompt(description, existing_samples, target_count))
			.with_system(SYSTEM_PROMPT);

		debug!(
			provider = %ProviderKind::Generative,
			model = client.model(),
			target_count,
			"Requesting synthetic examples"
		);

		match complete_with_timeout(client.as_ref(), &request, self.timeout).await {
			Ok(text) => {
				let examples = split_examples(&text, target_count);
				debug!(
					provider = %ProviderKind::Generative,
					generated = examples.len(),
					"Synthetic generation succeeded"
				);
				ProviderResult::Success {
					provider: ProviderKind::Generative,
					source_model: client.model().to_string(),
					payload: SyntheticData::new(examples),
				}
			},
			Err(e) => {
				warn!(
					provider = %ProviderKind::Generative,
					timeout = e.is_timeout(),
					"Synthetic generation failed: {}",
					e
				);
				ProviderResult::Failed {
					provider: ProviderKind::Generative,
					error: e.to_string(),
					note: FAILURE_NOTE.to_string(),
					payload: SyntheticData::new(failure_examples(target_count)),
				}
			},
		}
	}
}

fn build_prompt(description: &str, existing_samples: &[String], target_count: usize) -> String {
	format!(
		"Generate {} diverse and realistic training examples for a model described as: '{}'. \
		 These examples should be inspired by the following existing data samples: {:?}. \
		 Please format each example clearly, and return them as a list, with each example on a new line.",
		target_count,
		description,
		leading_samples(existing_samples, GUIDANCE_SAMPLES)
	)
}

/// Trimmed non-empty lines, at most `target_count` of them
fn split_examples(text: &str, target_count: usize) -> Vec<String> {
	text.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.take(target_count)
		.map(str::to_string)
		.collect()
}

fn demo_examples(description: &str, target_count: usize) -> Vec<String> {
	(1..=target_count.min(MAX_DEMO_EXAMPLES))
		.map(|i| format!("Demo synthetic example {} for {}", i, description))
		.collect()
}

fn failure_examples(target_count: usize) -> Vec<String> {
	(1..=target_count.min(MAX_FAILURE_EXAMPLES))
		.map(|i| format!("Fallback example {}", i))
		.collect()
}
