//! Provider domain models
//!
//! The five external capability sources the orchestrator fans out to, and the
//! startup snapshot of which of them are configured.

pub mod errors;
pub mod status;
pub mod traits;

pub use errors::{ProviderCallResult, ProviderError};
pub use status::{OrchestratorInfo, OverallStatus, ServiceStatus};
pub use traits::{CompletionClient, CompletionRequest};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of providers every report accounts for
pub const TOTAL_PROVIDERS: usize = 5;

/// Provider category
///
/// The declaration order is the canonical report order, and `Ord` follows it,
/// so ordered collections keyed by `ProviderKind` iterate Generative first and
/// Innovative last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
	Generative,
	Reasoning,
	SearchAugmented,
	Multimodal,
	Innovative,
}

impl ProviderKind {
	pub const ALL: [ProviderKind; TOTAL_PROVIDERS] = [
		ProviderKind::Generative,
		ProviderKind::Reasoning,
		ProviderKind::SearchAugmented,
		ProviderKind::Multimodal,
		ProviderKind::Innovative,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			ProviderKind::Generative => "generative",
			ProviderKind::Reasoning => "reasoning",
			ProviderKind::SearchAugmented => "search_augmented",
			ProviderKind::Multimodal => "multimodal",
			ProviderKind::Innovative => "innovative",
		}
	}

	/// Vendor backing this category
	pub fn vendor(&self) -> &'static str {
		match self {
			ProviderKind::Generative => "openai",
			ProviderKind::Reasoning => "anthropic",
			ProviderKind::SearchAugmented => "perplexity",
			ProviderKind::Multimodal => "gemini",
			ProviderKind::Innovative => "grok",
		}
	}

	/// Environment variable the credential is read from unless configured otherwise
	pub fn default_credential_env(&self) -> &'static str {
		match self {
			ProviderKind::Generative => "OPENAI_API_KEY",
			ProviderKind::Reasoning => "ANTHROPIC_API_KEY",
			ProviderKind::SearchAugmented => "PERPLEXITY_API_KEY",
			ProviderKind::Multimodal => "GEMINI_API_KEY",
			ProviderKind::Innovative => "XAI_API_KEY",
		}
	}

	/// Capability tags advertised in the service status
	pub fn capabilities(&self) -> &'static [&'static str] {
		match self {
			ProviderKind::Generative => &[
				"synthetic_data",
				"knowledge_extraction",
				"embeddings",
				"optimization",
			],
			ProviderKind::Reasoning => &[
				"reasoning",
				"interpretability",
				"strategy_generation",
				"debugging",
			],
			ProviderKind::SearchAugmented => &[
				"search_enhanced_training",
				"industry_benchmarks",
				"competitive_analysis",
				"research_backed_augmentation",
			],
			ProviderKind::Multimodal => &[
				"multimodal_analysis",
				"code_optimization",
				"testing_strategies",
				"deployment_planning",
			],
			ProviderKind::Innovative => &[
				"innovative_architecture",
				"creative_problem_solving",
				"experimental_training",
				"breakthrough_evaluation",
			],
		}
	}

	/// Capability-only providers report status but are never called
	pub fn is_capability_only(&self) -> bool {
		matches!(
			self,
			ProviderKind::SearchAugmented | ProviderKind::Multimodal | ProviderKind::Innovative
		)
	}
}

impl fmt::Display for ProviderKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Startup snapshot of one provider's configuration state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
	pub name: ProviderKind,
	pub vendor: String,
	/// Credential present and, for model providers, client construction succeeded
	pub configured: bool,
	/// The adapter type exists in this build
	pub available: bool,
	pub capabilities: Vec<String>,
	/// Where the credential is expected to come from, e.g. `OPENAI_API_KEY`
	pub credential_source: String,
}

impl ProviderConfig {
	pub fn new(name: ProviderKind, configured: bool, credential_source: impl Into<String>) -> Self {
		Self {
			name,
			vendor: name.vendor().to_string(),
			configured,
			available: true,
			capabilities: name.capabilities().iter().map(|c| c.to_string()).collect(),
			credential_source: credential_source.into(),
		}
	}

	/// Unconfigured entry pointing at the default credential variable
	pub fn unconfigured(name: ProviderKind) -> Self {
		Self::new(name, false, name.default_credential_env())
	}
}
