//! Free-text model analysis

use crate::{
	complete_with_timeout, credential_hint, credential_name, leading_samples, ProviderRegistry,
};
use enhancer_types::{
	CompletionClient, CompletionRequest, ProviderKind, ProviderResult, ReasoningAnalysis,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

const GUIDANCE_SAMPLES: usize = 3;

const FAILURE_REASONING: &str =
	"Demo reasoning analysis completed. Please check your Anthropic API key and quota.";
const FAILURE_NOTE: &str = "Check Anthropic API key and quota.";

/// Wraps the reasoning provider
#[derive(Debug, Clone)]
pub struct ReasoningAdapter {
	client: Option<Arc<dyn CompletionClient>>,
	credential_source: String,
	timeout: Duration,
}

impl ReasoningAdapter {
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
			registry.reasoning_client(),
			registry.get(ProviderKind::Reasoning).credential_source.clone(),
			timeout,
		)
	}

	pub fn is_configured(&self) -> bool {
		self.client.is_some()
	}

	/// `Analyze(description, data_sample, metrics)`
	pub async fn analyze(
		&self,
		description: &str,
		data_sample: &[String],
		metrics: &BTreeMap<String, f64>,
	) -> ProviderResult<ReasoningAnalysis> {
		let Some(client) = &self.client else {
			return ProviderResult::Unconfigured {
				provider: ProviderKind::Reasoning,
				note: format!(
					"{} for actual reasoning analysis.",
					credential_hint(&self.credential_source)
				),
				payload: ReasoningAnalysis::new(format!(
					"Demo reasoning analysis for model: {}. Provide {} for real analysis.",
					description,
					credential_name(&self.credential_source)
				)),
			};
		};

		let request = CompletionRequest::new(build_prompt(description, data_sample, metrics));
		debug!(
			provider = %ProviderKind::Reasoning,
			model = client.model(),
			metrics = metrics.len(),
			"Requesting model analysis"
		);

		match complete_with_timeout(client.as_ref(), &request, self.timeout).await {
			Ok(reasoning) => ProviderResult::Success {
				provider: ProviderKind::Reasoning,
				source_model: client.model().to_string(),
				payload: ReasoningAnalysis::new(reasoning),
			},
			Err(e) => {
				warn!(
					provider = %ProviderKind::Reasoning,
					timeout = e.is_timeout(),
					"Model analysis failed: {}",
					e
				);
				ProviderResult::Failed {
					provider: ProviderKind::Reasoning,
					error: e.to_string(),
					note: FAILURE_NOTE.to_string(),
					payload: ReasoningAnalysis::new(FAILURE_REASONING),
				}
			},
		}
	}
}

/// Fixed analysis template; only the three inputs vary
fn build_prompt(description: &str, data_sample: &[String], metrics: &BTreeMap<String, f64>) -> String {
	let metrics_json =
		serde_json::to_string_pretty(metrics).unwrap_or_else(|_| format!("{:?}", metrics));

	format!(
		"You are an expert AI consultant specializing in ML model optimization. \
		 Analyze the following ML model and provide actionable insights:\n\n\
		 **Model Description:**\n{}\n\n\
		 **Training Data Sample (first 3 entries):**\n{:?}\n\n\
		 **Performance Metrics:**\n{}\n\n\
		 Provide specific, detailed recommendations for the following areas:\n\
		 1. **Architecture Improvements:** Suggest alternative architectures or modifications.\n\
		 2. **Training Strategy Optimization:** Recommend adjustments to hyperparameters, data augmentation, or training procedures.\n\
		 3. **Potential Bottlenecks:** Identify areas that might limit performance or scalability.\n\
		 4. **Risk Mitigation Approaches:** Advise on reducing bias, improving robustness, or enhancing interpretability.",
		description,
		leading_samples(data_sample, GUIDANCE_SAMPLES),
		metrics_json
	)
}
