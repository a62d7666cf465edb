//! Enhancement report models

use super::request::EnhancementConfig;
use super::result::{ProviderResult, ReasoningAnalysis, SyntheticData};
use crate::providers::{ProviderKind, TOTAL_PROVIDERS};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use uuid::Uuid;

pub const ENHANCEMENT_VERSION: &str = "2.1.0";
pub const DISTILLATION_METHOD: &str = "multi_provider_ai_enhanced_distillation";
/// Teacher list entry used when no provider is configured
pub const FALLBACK_TEACHER: &str = "demo_fallback";

/// Final structured report of one enhancement request
///
/// The five provider slots are always present regardless of which providers
/// are configured; absent capability is reported as fallback content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnhancementReport {
	pub job_id: Uuid,
	pub created_at: DateTime<Utc>,
	#[serde(rename = "enhancement_version")]
	pub version: String,
	pub input_parameters: InputParameters,
	pub synthetic_data_generation: ProviderResult<SyntheticData>,
	pub training_strategy_analysis: ProviderResult<ReasoningAnalysis>,
	pub search_enhanced_training: CapabilityBlock,
	pub multimodal_analysis: CapabilityBlock,
	pub innovative_solutions: CapabilityBlock,
	pub distillation_guidance: DistillationGuidance,
	pub orchestration_summary: SummaryBlock,
}

/// Echo of the inputs the report was computed from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputParameters {
	pub model_description: String,
	pub performance_metrics: BTreeMap<String, f64>,
	/// Effective configuration with defaults and policy values applied
	pub enhancement_config: EnhancementConfig,
	pub training_data_profile: TrainingDataProfile,
}

/// Cheap statistics over the supplied training sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingDataProfile {
	pub sample_count: usize,
	/// Mean length in characters
	pub avg_length: f64,
	/// Unique samples over total samples
	pub diversity_estimate: f64,
}

impl TrainingDataProfile {
	pub fn from_samples(samples: &[String]) -> Self {
		if samples.is_empty() {
			return Self {
				sample_count: 0,
				avg_length: 0.0,
				diversity_estimate: 0.0,
			};
		}

		let count = samples.len() as f64;
		let total_chars: usize = samples.iter().map(|s| s.chars().count()).sum();
		let unique = samples.iter().collect::<HashSet<_>>().len() as f64;

		Self {
			sample_count: samples.len(),
			avg_length: total_chars as f64 / count,
			diversity_estimate: unique / count,
		}
	}
}

/// Status block of a capability-only provider
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CapabilityBlock {
	pub service: ProviderKind,
	pub vendor: String,
	#[serde(flatten)]
	pub detail: CapabilityDetail,
}

impl CapabilityBlock {
	pub fn is_configured(&self) -> bool {
		matches!(self.detail, CapabilityDetail::Configured { .. })
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CapabilityDetail {
	Configured {
		capabilities: Vec<String>,
		note: String,
	},
	NotConfigured {
		demo_capability: String,
		note: String,
	},
}

/// Knowledge distillation guidance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistillationBlock {
	pub method: String,
	pub teacher_services: Vec<String>,
	pub distillation_temperature: f64,
	pub knowledge_transfer_rate: f64,
	pub innovation_factor: f64,
	pub search_enhancement_applied: bool,
	pub multimodal_integration_applied: bool,
	pub note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DistillationGuidance {
	Applied(DistillationBlock),
	Skipped,
}

impl DistillationGuidance {
	pub fn block(&self) -> Option<&DistillationBlock> {
		match self {
			DistillationGuidance::Applied(block) => Some(block),
			DistillationGuidance::Skipped => None,
		}
	}
}

/// Per-category configured flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProviderUtilization {
	pub generative: bool,
	pub reasoning: bool,
	pub search_augmented: bool,
	pub multimodal: bool,
	pub innovative: bool,
}

impl ProviderUtilization {
	pub fn from_configured(configured: &[ProviderKind]) -> Self {
		let has = |kind| configured.contains(&kind);
		Self {
			generative: has(ProviderKind::Generative),
			reasoning: has(ProviderKind::Reasoning),
			search_augmented: has(ProviderKind::SearchAugmented),
			multimodal: has(ProviderKind::Multimodal),
			innovative: has(ProviderKind::Innovative),
		}
	}

	pub fn get(&self, kind: ProviderKind) -> bool {
		match kind {
			ProviderKind::Generative => self.generative,
			ProviderKind::Reasoning => self.reasoning,
			ProviderKind::SearchAugmented => self.search_augmented,
			ProviderKind::Multimodal => self.multimodal,
			ProviderKind::Innovative => self.innovative,
		}
	}
}

/// Orchestration summary with completeness score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryBlock {
	pub total_providers: usize,
	pub configured_count: usize,
	pub utilization: ProviderUtilization,
	pub completeness_score: f64,
	pub message: String,
}

impl SummaryBlock {
	/// `round(configured_count / 5, 2)`, clamped to [0, 1]
	pub fn completeness_score(configured_count: usize) -> f64 {
		let ratio = configured_count.min(TOTAL_PROVIDERS) as f64 / TOTAL_PROVIDERS as f64;
		(ratio * 100.0).round() / 100.0
	}
}
