//! Enhancement domain models
//!
//! Request, per-provider result, and report types for the enhancement
//! pipeline, plus the request/response shapes of the single-provider
//! operations.

pub mod errors;
pub mod report;
pub mod request;
pub mod response;
pub mod result;

pub use errors::{EnhancementValidationError, ValidationResult};
pub use report::{
	CapabilityBlock, CapabilityDetail, DistillationBlock, DistillationGuidance, EnhancementReport,
	InputParameters, ProviderUtilization, SummaryBlock, TrainingDataProfile,
	DISTILLATION_METHOD, ENHANCEMENT_VERSION, FALLBACK_TEACHER,
};
pub use request::{
	EnhancementConfig, EnhancementRequest, ModelAnalysisRequest, SyntheticDataRequest,
};
pub use response::{
	EnhanceResponse, GenerationMetadata, JobStatus, ModelAnalysisResponse, SyntheticDataResponse,
};
pub use result::{ProviderResult, ReasoningAnalysis, SyntheticData};
