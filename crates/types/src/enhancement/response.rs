//! Response bodies for the enhancement operations

use super::report::EnhancementReport;
use super::result::{ProviderResult, ReasoningAnalysis};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
	Completed,
	Failed,
}

/// Body returned by the enhance operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnhanceResponse {
	pub job_id: Uuid,
	pub status: JobStatus,
	pub enhancement_report: EnhancementReport,
	pub message: String,
}

impl EnhanceResponse {
	pub fn completed(report: EnhancementReport) -> Self {
		Self {
			job_id: report.job_id,
			status: JobStatus::Completed,
			enhancement_report: report,
			message: "Model enhancement process initiated and results compiled.".to_string(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationMetadata {
	pub generation_method: String,
	pub source_services: Vec<String>,
	pub original_sample_size: usize,
	pub target_count: usize,
}

/// Body returned by the standalone synthetic data operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyntheticDataResponse {
	pub job_id: Uuid,
	pub status: JobStatus,
	pub generated_count: usize,
	pub synthetic_data: Vec<String>,
	pub generation_metadata: GenerationMetadata,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub note: Option<String>,
}

/// Body returned by the standalone analysis operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelAnalysisResponse {
	pub analysis_id: Uuid,
	pub analysis_type: String,
	pub status: JobStatus,
	pub analysis_results: ProviderResult<ReasoningAnalysis>,
	pub generated_recommendations: Vec<String>,
}
