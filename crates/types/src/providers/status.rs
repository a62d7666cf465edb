//! Service status view exposed to the HTTP layer

use super::{ProviderConfig, ProviderKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
	Operational,
	RequiresConfiguration,
}

/// Static description of the orchestrator itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrchestratorInfo {
	pub available: bool,
	pub features: Vec<String>,
}

impl Default for OrchestratorInfo {
	fn default() -> Self {
		Self {
			available: true,
			features: [
				"multi_provider_enhancement",
				"knowledge_distillation",
				"comprehensive_analysis",
				"innovative_solutions",
			]
			.iter()
			.map(|f| f.to_string())
			.collect(),
		}
	}
}

/// `GetServiceStatus()` result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceStatus {
	pub status: OverallStatus,
	pub services: BTreeMap<ProviderKind, ProviderConfig>,
	pub orchestrator: OrchestratorInfo,
	pub message: String,
}

impl ServiceStatus {
	/// Operational iff at least one provider is configured
	pub fn from_configs<'a>(configs: impl IntoIterator<Item = &'a ProviderConfig>) -> Self {
		let services: BTreeMap<ProviderKind, ProviderConfig> = configs
			.into_iter()
			.map(|c| (c.name, c.clone()))
			.collect();

		let any_configured = services.values().any(|c| c.configured);
		let (status, message) = if any_configured {
			(
				OverallStatus::Operational,
				"AI services ready for model enhancement".to_string(),
			)
		} else {
			let sources: Vec<&str> = services
				.values()
				.map(|c| c.credential_source.as_str())
				.collect();
			(
				OverallStatus::RequiresConfiguration,
				format!("Configure API keys: {}", sources.join(", ")),
			)
		};

		Self {
			status,
			services,
			orchestrator: OrchestratorInfo::default(),
			message,
		}
	}
}
