//! Enhancement pipeline
//!
//! One `Orchestrator` is built at startup from the registry snapshot and
//! shared by reference with every request. It holds no mutable state.

use crate::report::{build_report, PipelineOutputs};
use async_trait::async_trait;
use chrono::Utc;
use enhancer_adapters::{CapabilityAdapter, GenerativeAdapter, ProviderRegistry, ReasoningAdapter};
use enhancer_types::{
	EnhancementReport, EnhancementRequest, GenerationMetadata, JobStatus, ModelAnalysisRequest,
	ModelAnalysisResponse, ProviderKind, ProviderResult, ServiceStatus, SyntheticDataRequest,
	SyntheticDataResponse,
};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Follow-up recommendations attached to a successful analysis
pub const ANALYSIS_RECOMMENDATIONS: [&str; 4] = [
	"Carefully review the detailed AI-driven recommendations provided.",
	"Prioritize changes based on potential impact and feasibility.",
	"Consider A/B testing any significant architectural or strategy modifications.",
	"Monitor key metrics closely after implementing suggested changes.",
];

const DEMO_GENERATION_METHOD: &str = "demo_fallback";

/// Errors that end a request before a report exists
///
/// Provider failures never appear here; they are part of the report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrchestratorError {
	#[error("Enhancement did not complete within {timeout_ms}ms")]
	DeadlineExceeded { timeout_ms: u64 },

	#[error("Enhancement was cancelled")]
	Cancelled,
}

/// Operations the HTTP layer depends on
#[async_trait]
pub trait OrchestratorTrait: Send + Sync {
	async fn enhance_with_deadline(
		&self,
		request: &EnhancementRequest,
		deadline: Duration,
	) -> Result<EnhancementReport, OrchestratorError>;

	async fn generate_synthetic_data(&self, request: &SyntheticDataRequest)
		-> SyntheticDataResponse;

	async fn analyze_model(&self, request: &ModelAnalysisRequest) -> ModelAnalysisResponse;

	fn service_status(&self) -> ServiceStatus;
}

#[derive(Debug, Clone)]
pub struct Orchestrator {
	registry: Arc<ProviderRegistry>,
	generative: GenerativeAdapter,
	reasoning: ReasoningAdapter,
	search_augmented: CapabilityAdapter,
	multimodal: CapabilityAdapter,
	innovative: CapabilityAdapter,
	configured: Vec<ProviderKind>,
}

impl Orchestrator {
	/// Build adapters from the registry; `per_call_timeout` bounds every provider call
	pub fn new(registry: Arc<ProviderRegistry>, per_call_timeout: Duration) -> Self {
		Self {
			generative: GenerativeAdapter::from_registry(&registry, per_call_timeout),
			reasoning: ReasoningAdapter::from_registry(&registry, per_call_timeout),
			search_augmented: CapabilityAdapter::search_augmented(&registry),
			multimodal: CapabilityAdapter::multimodal(&registry),
			innovative: CapabilityAdapter::innovative(&registry),
			configured: registry.configured_providers(),
			registry,
		}
	}

	/// `Enhance(request)`
	///
	/// The request must already be validated. The generative and reasoning
	/// steps run concurrently inside this future, so dropping it cancels both.
	pub async fn enhance(&self, request: &EnhancementRequest) -> EnhancementReport {
		let job_id = Uuid::new_v4();
		info!(
			%job_id,
			configured = self.configured.len(),
			"Starting enhancement pipeline"
		);

		let config = &request.config;
		let synthetic = async {
			if !config.generate_synthetic_data {
				debug!(%job_id, "Synthetic data generation skipped");
				return ProviderResult::skipped(ProviderKind::Generative);
			}
			self.generative
				.generate(
					&request.model_description,
					&request.training_data_sample,
					config.synthetic_target(),
				)
				.await
		};
		let reasoning = async {
			if !config.optimize_training_strategy {
				debug!(%job_id, "Training strategy analysis skipped");
				return ProviderResult::skipped(ProviderKind::Reasoning);
			}
			self.reasoning
				.analyze(
					&request.model_description,
					&request.training_data_sample,
					&request.performance_metrics,
				)
				.await
		};

		let (synthetic_data_generation, training_strategy_analysis) =
			tokio::join!(synthetic, reasoning);

		let outputs = PipelineOutputs {
			synthetic_data_generation,
			training_strategy_analysis,
			search_enhanced_training: self.search_augmented.status(),
			multimodal_analysis: self.multimodal.status(),
			innovative_solutions: self.innovative.status(),
		};

		let report = build_report(job_id, Utc::now(), request, &self.configured, outputs);
		info!(
			%job_id,
			synthetic = report.synthetic_data_generation.status_label(),
			reasoning = report.training_strategy_analysis.status_label(),
			completeness = report.orchestration_summary.completeness_score,
			"Enhancement pipeline finished"
		);
		report
	}

	/// `enhance` raced against a cancellation signal
	///
	/// When `cancel` resolves first, in-flight provider calls are dropped
	/// and the partial report is discarded.
	pub async fn enhance_until<F>(
		&self,
		request: &EnhancementRequest,
		cancel: F,
	) -> Result<EnhancementReport, OrchestratorError>
	where
		F: Future<Output = ()> + Send,
	{
		tokio::select! {
			report = self.enhance(request) => Ok(report),
			_ = cancel => {
				warn!("Enhancement cancelled before completion");
				Err(OrchestratorError::Cancelled)
			}
		}
	}

	/// `enhance` bounded by a whole-request deadline
	pub async fn enhance_with_deadline(
		&self,
		request: &EnhancementRequest,
		deadline: Duration,
	) -> Result<EnhancementReport, OrchestratorError> {
		match tokio::time::timeout(deadline, self.enhance(request)).await {
			Ok(report) => Ok(report),
			Err(_) => {
				let timeout_ms = deadline.as_millis() as u64;
				warn!("Enhancement deadline reached after {}ms", timeout_ms);
				Err(OrchestratorError::DeadlineExceeded { timeout_ms })
			},
		}
	}

	/// Standalone synthetic data generation through the generative adapter
	pub async fn generate_synthetic_data(
		&self,
		request: &SyntheticDataRequest,
	) -> SyntheticDataResponse {
		let target_count = request.target();
		let result = self
			.generative
			.generate(&request.model_description, &request.existing_data_sample, target_count)
			.await;

		let (status, generation_method, error, note) = match &result {
			ProviderResult::Success { source_model, .. } => (
				JobStatus::Completed,
				format!("{}_{}", ProviderKind::Generative.vendor(), source_model),
				None,
				None,
			),
			ProviderResult::Unconfigured { note, .. } => (
				JobStatus::Failed,
				DEMO_GENERATION_METHOD.to_string(),
				Some("Generative provider not configured or API key missing.".to_string()),
				Some(note.clone()),
			),
			ProviderResult::Failed { error, note, .. } => (
				JobStatus::Failed,
				DEMO_GENERATION_METHOD.to_string(),
				Some(error.clone()),
				Some(note.clone()),
			),
			ProviderResult::Skipped { .. } => (
				JobStatus::Failed,
				DEMO_GENERATION_METHOD.to_string(),
				None,
				None,
			),
		};

		let synthetic_data = result
			.payload()
			.map(|p| p.synthetic_data.clone())
			.unwrap_or_default();
		let source_service = if self.generative.is_configured() {
			ProviderKind::Generative.vendor()
		} else {
			DEMO_GENERATION_METHOD
		};

		SyntheticDataResponse {
			job_id: Uuid::new_v4(),
			status,
			generated_count: synthetic_data.len(),
			synthetic_data,
			generation_metadata: GenerationMetadata {
				generation_method,
				source_services: vec![source_service.to_string()],
				original_sample_size: request.existing_data_sample.len(),
				target_count,
			},
			error,
			note,
		}
	}

	/// Standalone model analysis through the reasoning adapter
	pub async fn analyze_model(&self, request: &ModelAnalysisRequest) -> ModelAnalysisResponse {
		let result = self
			.reasoning
			.analyze(
				&request.model_description,
				&request.training_data_sample,
				&request.performance_metrics,
			)
			.await;

		let (status, generated_recommendations) = if result.is_success() {
			(
				JobStatus::Completed,
				ANALYSIS_RECOMMENDATIONS.iter().map(|r| r.to_string()).collect(),
			)
		} else {
			(JobStatus::Failed, Vec::new())
		};

		ModelAnalysisResponse {
			analysis_id: Uuid::new_v4(),
			analysis_type: request.analysis_type.clone(),
			status,
			analysis_results: result,
			generated_recommendations,
		}
	}

	/// `GetServiceStatus()`
	pub fn service_status(&self) -> ServiceStatus {
		self.registry.status()
	}
}

#[async_trait]
impl OrchestratorTrait for Orchestrator {
	async fn enhance_with_deadline(
		&self,
		request: &EnhancementRequest,
		deadline: Duration,
	) -> Result<EnhancementReport, OrchestratorError> {
		Orchestrator::enhance_with_deadline(self, request, deadline).await
	}

	async fn generate_synthetic_data(
		&self,
		request: &SyntheticDataRequest,
	) -> SyntheticDataResponse {
		Orchestrator::generate_synthetic_data(self, request).await
	}

	async fn analyze_model(&self, request: &ModelAnalysisRequest) -> ModelAnalysisResponse {
		Orchestrator::analyze_model(self, request).await
	}

	fn service_status(&self) -> ServiceStatus {
		Orchestrator::service_status(self)
	}
}
