//! Enhancement request models
//!
//! These are the parsed forms of the JSON bodies accepted at the HTTP
//! boundary. `validate()` must pass before a request is handed to the
//! orchestrator; the pipeline itself assumes valid input.

use super::errors::{EnhancementValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_SYNTHETIC_DATA_COUNT: i64 = 20;
pub const DEFAULT_DISTILLATION_TEMPERATURE: f64 = 3.0;
pub const DEFAULT_KNOWLEDGE_TRANSFER_RATE: f64 = 0.8;
/// Innovation factor when the innovative provider is configured
pub const INNOVATION_FACTOR_BOOSTED: f64 = 0.9;
pub const INNOVATION_FACTOR_BASELINE: f64 = 0.7;
pub const DEFAULT_TARGET_COUNT: i64 = 10;
pub const DEFAULT_ANALYSIS_TYPE: &str = "reasoning";

/// Recognized enhancement options
///
/// Every field has a default, and unrecognized keys in the incoming mapping
/// are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnhancementConfig {
	pub generate_synthetic_data: bool,
	pub synthetic_data_count: i64,
	pub optimize_training_strategy: bool,
	pub enable_distillation: bool,
	pub distillation_temperature: f64,
	pub knowledge_transfer_rate: f64,
	/// Explicit override; when absent the value depends on whether the
	/// innovative provider is configured
	#[serde(skip_serializing_if = "Option::is_none")]
	pub innovation_factor: Option<f64>,
}

impl Default for EnhancementConfig {
	fn default() -> Self {
		Self {
			generate_synthetic_data: true,
			synthetic_data_count: DEFAULT_SYNTHETIC_DATA_COUNT,
			optimize_training_strategy: true,
			enable_distillation: true,
			distillation_temperature: DEFAULT_DISTILLATION_TEMPERATURE,
			knowledge_transfer_rate: DEFAULT_KNOWLEDGE_TRANSFER_RATE,
			innovation_factor: None,
		}
	}
}

impl EnhancementConfig {
	pub fn validate(&self) -> ValidationResult<()> {
		if self.synthetic_data_count <= 0 {
			return Err(EnhancementValidationError::NonPositiveCount {
				field: "synthetic_data_count".to_string(),
				value: self.synthetic_data_count,
			});
		}
		for (field, value) in [
			("distillation_temperature", Some(self.distillation_temperature)),
			("knowledge_transfer_rate", Some(self.knowledge_transfer_rate)),
			("innovation_factor", self.innovation_factor),
		] {
			if matches!(value, Some(v) if !v.is_finite()) {
				return Err(EnhancementValidationError::NonFiniteNumber {
					field: field.to_string(),
				});
			}
		}
		Ok(())
	}

	/// Synthetic example count as a usize (never below one)
	pub fn synthetic_target(&self) -> usize {
		usize::try_from(self.synthetic_data_count)
			.unwrap_or(1)
			.max(1)
	}

	/// Innovation factor with the policy default applied
	pub fn resolved_innovation_factor(&self, innovative_configured: bool) -> f64 {
		self.innovation_factor.unwrap_or(if innovative_configured {
			INNOVATION_FACTOR_BOOSTED
		} else {
			INNOVATION_FACTOR_BASELINE
		})
	}
}

/// Full enhancement request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancementRequest {
	#[serde(default)]
	pub model_description: String,
	#[serde(default, alias = "existing_data_sample")]
	pub training_data_sample: Vec<String>,
	#[serde(default)]
	pub performance_metrics: BTreeMap<String, f64>,
	#[serde(default, rename = "enhancement_config")]
	pub config: EnhancementConfig,
}

impl EnhancementRequest {
	pub fn new(model_description: impl Into<String>) -> Self {
		Self {
			model_description: model_description.into(),
			training_data_sample: Vec::new(),
			performance_metrics: BTreeMap::new(),
			config: EnhancementConfig::default(),
		}
	}

	pub fn with_metric(mut self, name: impl Into<String>, value: f64) -> Self {
		self.performance_metrics.insert(name.into(), value);
		self
	}

	pub fn with_samples<I, S>(mut self, samples: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.training_data_sample = samples.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_config(mut self, config: EnhancementConfig) -> Self {
		self.config = config;
		self
	}

	pub fn validate(&self) -> ValidationResult<()> {
		require_description(&self.model_description)?;
		require_metrics(&self.performance_metrics)?;
		self.config.validate()
	}
}

/// Standalone synthetic data generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticDataRequest {
	#[serde(default)]
	pub model_description: String,
	#[serde(default, alias = "training_data_sample")]
	pub existing_data_sample: Vec<String>,
	#[serde(default = "default_target_count")]
	pub target_count: i64,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub data_type: Option<String>,
}

impl SyntheticDataRequest {
	pub fn validate(&self) -> ValidationResult<()> {
		require_description(&self.model_description)?;
		if self.target_count <= 0 {
			return Err(EnhancementValidationError::NonPositiveCount {
				field: "target_count".to_string(),
				value: self.target_count,
			});
		}
		Ok(())
	}

	pub fn target(&self) -> usize {
		usize::try_from(self.target_count).unwrap_or(1).max(1)
	}
}

/// Standalone model analysis request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelAnalysisRequest {
	#[serde(default)]
	pub model_description: String,
	#[serde(default, alias = "existing_data_sample")]
	pub training_data_sample: Vec<String>,
	#[serde(default)]
	pub performance_metrics: BTreeMap<String, f64>,
	#[serde(default = "default_analysis_type")]
	pub analysis_type: String,
}

impl ModelAnalysisRequest {
	pub fn validate(&self) -> ValidationResult<()> {
		require_description(&self.model_description)?;
		require_metrics(&self.performance_metrics)
	}
}

fn default_target_count() -> i64 {
	DEFAULT_TARGET_COUNT
}

fn default_analysis_type() -> String {
	DEFAULT_ANALYSIS_TYPE.to_string()
}

fn require_description(description: &str) -> ValidationResult<()> {
	if description.trim().is_empty() {
		return Err(EnhancementValidationError::MissingRequiredField {
			field: "model_description".to_string(),
		});
	}
	Ok(())
}

fn require_metrics(metrics: &BTreeMap<String, f64>) -> ValidationResult<()> {
	if metrics.is_empty() {
		return Err(EnhancementValidationError::MissingRequiredField {
			field: "performance_metrics".to_string(),
		});
	}
	Ok(())
}
