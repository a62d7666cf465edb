//! Enhancer Types
//!
//! Shared models and traits for the multi-provider enhancement orchestrator.
//! This crate contains the domain models organized by business entity.

pub mod enhancement;
pub mod models;
pub mod providers;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

pub use enhancement::{
	CapabilityBlock, CapabilityDetail, DistillationBlock, DistillationGuidance, EnhanceResponse,
	EnhancementConfig, EnhancementReport, EnhancementRequest, EnhancementValidationError,
	GenerationMetadata, InputParameters, JobStatus, ModelAnalysisRequest, ModelAnalysisResponse,
	ProviderResult, ProviderUtilization, ReasoningAnalysis, SummaryBlock, SyntheticData,
	SyntheticDataRequest, SyntheticDataResponse, TrainingDataProfile, ValidationResult,
	ENHANCEMENT_VERSION,
};

pub use providers::{
	CompletionClient, CompletionRequest, OrchestratorInfo, OverallStatus, ProviderCallResult,
	ProviderConfig, ProviderError, ProviderKind, ServiceStatus, TOTAL_PROVIDERS,
};

pub use models::SecretString;
