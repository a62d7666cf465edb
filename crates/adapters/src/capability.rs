//! Capability-only providers
//!
//! No live call is made for these; the block is fully determined by the
//! provider's configured flag.

use crate::{credential_name, is_inline_source, ProviderRegistry};
use enhancer_types::{CapabilityBlock, CapabilityDetail, ProviderKind};

/// Fixed report content for one capability-only provider
struct CapabilityProfile {
	capabilities: &'static [&'static str],
	usage_note: &'static str,
	demo_capability: &'static str,
	/// Completes "Set {credential} ..."
	hint_suffix: &'static str,
}

static SEARCH_AUGMENTED: CapabilityProfile = CapabilityProfile {
	capabilities: &[
		"real_time_research_integration",
		"industry_benchmarks",
		"competitive_analysis",
		"research_backed_augmentation",
	],
	usage_note: "Leveraging Perplexity for up-to-date research and benchmarks.",
	demo_capability: "Simulated search-enhanced training with real-time research integration.",
	hint_suffix: "to enable real-time industry insights and research.",
};

static MULTIMODAL: CapabilityProfile = CapabilityProfile {
	capabilities: &[
		"multimodal_analysis",
		"code_optimization",
		"testing_strategies",
		"deployment_planning",
	],
	usage_note: "Utilizing Gemini for advanced multimodal analysis and optimization planning.",
	demo_capability: "Simulated multimodal analysis, code optimization, and deployment strategies.",
	hint_suffix: "to access Google's multimodal AI capabilities.",
};

static INNOVATIVE: CapabilityProfile = CapabilityProfile {
	capabilities: &[
		"innovative_architecture",
		"creative_problem_solving",
		"experimental_training",
		"breakthrough_evaluation",
	],
	usage_note: "Leveraging Grok for cutting-edge architecture and creative problem-solving.",
	demo_capability:
		"Simulated innovative architecture design and creative problem-solving approaches.",
	hint_suffix: "for xAI's advanced innovation capabilities.",
};

fn profile(kind: ProviderKind) -> Option<&'static CapabilityProfile> {
	match kind {
		ProviderKind::SearchAugmented => Some(&SEARCH_AUGMENTED),
		ProviderKind::Multimodal => Some(&MULTIMODAL),
		ProviderKind::Innovative => Some(&INNOVATIVE),
		ProviderKind::Generative | ProviderKind::Reasoning => None,
	}
}

/// Status-only adapter for SearchAugmented, Multimodal and Innovative
#[derive(Clone)]
pub struct CapabilityAdapter {
	kind: ProviderKind,
	profile: &'static CapabilityProfile,
	configured: bool,
	credential_source: String,
}

impl std::fmt::Debug for CapabilityAdapter {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CapabilityAdapter")
			.field("kind", &self.kind)
			.field("configured", &self.configured)
			.field("credential_source", &self.credential_source)
			.finish()
	}
}

impl CapabilityAdapter {
	/// `None` for the two model providers, which are not capability-only
	pub fn new(
		kind: ProviderKind,
		configured: bool,
		credential_source: impl Into<String>,
	) -> Option<Self> {
		let profile = profile(kind)?;
		Some(Self {
			kind,
			profile,
			configured,
			credential_source: credential_source.into(),
		})
	}

	fn from_profile(
		kind: ProviderKind,
		profile: &'static CapabilityProfile,
		registry: &ProviderRegistry,
	) -> Self {
		let config = registry.get(kind);
		Self {
			kind,
			profile,
			configured: config.configured,
			credential_source: config.credential_source.clone(),
		}
	}

	pub fn search_augmented(registry: &ProviderRegistry) -> Self {
		Self::from_profile(ProviderKind::SearchAugmented, &SEARCH_AUGMENTED, registry)
	}

	pub fn multimodal(registry: &ProviderRegistry) -> Self {
		Self::from_profile(ProviderKind::Multimodal, &MULTIMODAL, registry)
	}

	pub fn innovative(registry: &ProviderRegistry) -> Self {
		Self::from_profile(ProviderKind::Innovative, &INNOVATIVE, registry)
	}

	/// The three capability adapters in canonical order
	pub fn all_from_registry(registry: &ProviderRegistry) -> Vec<Self> {
		registry
			.configs()
			.filter_map(|config| {
				Self::new(config.name, config.configured, config.credential_source.clone())
			})
			.collect()
	}

	pub fn is_configured(&self) -> bool {
		self.configured
	}

	pub fn kind(&self) -> ProviderKind {
		self.kind
	}

	/// `Status()`; pure, never fails
	pub fn status(&self) -> CapabilityBlock {
		let p = self.profile;
		let detail = if self.configured {
			CapabilityDetail::Configured {
				capabilities: p.capabilities.iter().map(|c| c.to_string()).collect(),
				note: p.usage_note.to_string(),
			}
		} else {
			CapabilityDetail::NotConfigured {
				demo_capability: p.demo_capability.to_string(),
				note: if is_inline_source(&self.credential_source) {
					format!(
						"Provide {} {}",
						credential_name(&self.credential_source),
						p.hint_suffix
					)
				} else {
					format!("Set {} {}", self.credential_source, p.hint_suffix)
				},
			}
		};

		CapabilityBlock {
			service: self.kind,
			vendor: self.kind.vendor().to_string(),
			detail,
		}
	}
}
