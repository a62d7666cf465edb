//! Report assembly
//!
//! Pure functions from step outputs to the final report; no I/O and no
//! failure mode.

use chrono::{DateTime, Utc};
use enhancer_types::enhancement::{DISTILLATION_METHOD, FALLBACK_TEACHER};
use enhancer_types::{
	CapabilityBlock, DistillationBlock, DistillationGuidance, EnhancementReport,
	EnhancementRequest, InputParameters, ProviderKind, ProviderResult, ProviderUtilization,
	ReasoningAnalysis, SummaryBlock, SyntheticData, TrainingDataProfile, ENHANCEMENT_VERSION,
	TOTAL_PROVIDERS,
};
use uuid::Uuid;

const DISTILLATION_NOTE: &str =
	"Guidance for distilling knowledge from multiple AI teachers into a student model.";

/// Outputs of the fan-out steps, joined before aggregation
#[derive(Debug, Clone)]
pub struct PipelineOutputs {
	pub synthetic_data_generation: ProviderResult<SyntheticData>,
	pub training_strategy_analysis: ProviderResult<ReasoningAnalysis>,
	pub search_enhanced_training: CapabilityBlock,
	pub multimodal_analysis: CapabilityBlock,
	pub innovative_solutions: CapabilityBlock,
}

/// Assemble the report
///
/// `configured` is the set of configured providers in canonical order,
/// independent of which steps actually ran.
pub fn build_report(
	job_id: Uuid,
	created_at: DateTime<Utc>,
	request: &EnhancementRequest,
	configured: &[ProviderKind],
	outputs: PipelineOutputs,
) -> EnhancementReport {
	let is_configured = |kind| configured.contains(&kind);
	let innovation_factor = request
		.config
		.resolved_innovation_factor(is_configured(ProviderKind::Innovative));

	let mut effective_config = request.config.clone();
	effective_config.innovation_factor = Some(innovation_factor);

	let distillation_guidance = if request.config.enable_distillation {
		DistillationGuidance::Applied(DistillationBlock {
			method: DISTILLATION_METHOD.to_string(),
			teacher_services: teacher_services(configured),
			distillation_temperature: request.config.distillation_temperature,
			knowledge_transfer_rate: request.config.knowledge_transfer_rate,
			innovation_factor,
			search_enhancement_applied: is_configured(ProviderKind::SearchAugmented),
			multimodal_integration_applied: is_configured(ProviderKind::Multimodal),
			note: DISTILLATION_NOTE.to_string(),
		})
	} else {
		DistillationGuidance::Skipped
	};

	EnhancementReport {
		job_id,
		created_at,
		version: ENHANCEMENT_VERSION.to_string(),
		input_parameters: InputParameters {
			model_description: request.model_description.clone(),
			performance_metrics: request.performance_metrics.clone(),
			enhancement_config: effective_config,
			training_data_profile: TrainingDataProfile::from_samples(&request.training_data_sample),
		},
		synthetic_data_generation: outputs.synthetic_data_generation,
		training_strategy_analysis: outputs.training_strategy_analysis,
		search_enhanced_training: outputs.search_enhanced_training,
		multimodal_analysis: outputs.multimodal_analysis,
		innovative_solutions: outputs.innovative_solutions,
		distillation_guidance,
		orchestration_summary: summarize(configured),
	}
}

/// Teacher list for distillation; a single fallback marker when empty
pub fn teacher_services(configured: &[ProviderKind]) -> Vec<String> {
	if configured.is_empty() {
		return vec![FALLBACK_TEACHER.to_string()];
	}
	configured.iter().map(|kind| kind.as_str().to_string()).collect()
}

pub fn summarize(configured: &[ProviderKind]) -> SummaryBlock {
	let configured_count = configured.len();
	SummaryBlock {
		total_providers: TOTAL_PROVIDERS,
		configured_count,
		utilization: ProviderUtilization::from_configured(configured),
		completeness_score: SummaryBlock::completeness_score(configured_count),
		message: format!(
			"Comprehensive enhancement completed using {} of {} available AI services.",
			configured_count, TOTAL_PROVIDERS
		),
	}
}
