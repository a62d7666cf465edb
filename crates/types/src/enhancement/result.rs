//! Per-provider step outcome

use crate::providers::ProviderKind;
use serde::Serialize;

/// Outcome of one provider step
///
/// Serialized internally tagged by `status`, with the payload fields
/// flattened next to it, so every variant of a given step exposes the same
/// payload key (`synthetic_data` or `reasoning`) except `Skipped`, which has
/// no payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProviderResult<P> {
	Success {
		provider: ProviderKind,
		source_model: String,
		#[serde(flatten)]
		payload: P,
	},
	Skipped {
		provider: ProviderKind,
	},
	Unconfigured {
		provider: ProviderKind,
		note: String,
		#[serde(flatten)]
		payload: P,
	},
	Failed {
		provider: ProviderKind,
		error: String,
		note: String,
		#[serde(flatten)]
		payload: P,
	},
}

impl<P> ProviderResult<P> {
	pub fn skipped(provider: ProviderKind) -> Self {
		ProviderResult::Skipped { provider }
	}

	/// Live or fallback payload; `None` only when the step was skipped
	pub fn payload(&self) -> Option<&P> {
		match self {
			ProviderResult::Success { payload, .. }
			| ProviderResult::Unconfigured { payload, .. }
			| ProviderResult::Failed { payload, .. } => Some(payload),
			ProviderResult::Skipped { .. } => None,
		}
	}

	pub fn status_label(&self) -> &'static str {
		match self {
			ProviderResult::Success { .. } => "success",
			ProviderResult::Skipped { .. } => "skipped",
			ProviderResult::Unconfigured { .. } => "unconfigured",
			ProviderResult::Failed { .. } => "failed",
		}
	}

	pub fn is_success(&self) -> bool {
		matches!(self, ProviderResult::Success { .. })
	}

	pub fn is_skipped(&self) -> bool {
		matches!(self, ProviderResult::Skipped { .. })
	}

	pub fn error(&self) -> Option<&str> {
		match self {
			ProviderResult::Failed { error, .. } => Some(error),
			_ => None,
		}
	}

	pub fn note(&self) -> Option<&str> {
		match self {
			ProviderResult::Unconfigured { note, .. } | ProviderResult::Failed { note, .. } => {
				Some(note)
			},
			_ => None,
		}
	}
}

/// Generated training examples
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyntheticData {
	pub synthetic_data: Vec<String>,
}

impl SyntheticData {
	pub fn new(synthetic_data: Vec<String>) -> Self {
		Self { synthetic_data }
	}

	pub fn len(&self) -> usize {
		self.synthetic_data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.synthetic_data.is_empty()
	}
}

/// Free-text model analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReasoningAnalysis {
	pub reasoning: String,
}

impl ReasoningAnalysis {
	pub fn new(reasoning: impl Into<String>) -> Self {
		Self {
			reasoning: reasoning.into(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_success_serialization_flattens_payload() {
		let result = ProviderResult::Success {
			provider: ProviderKind::Generative,
			source_model: "gpt-4o".to_string(),
			payload: SyntheticData::new(vec!["a".to_string()]),
		};
		assert_eq!(
			serde_json::to_value(&result).unwrap(),
			json!({
				"status": "success",
				"provider": "generative",
				"source_model": "gpt-4o",
				"synthetic_data": ["a"]
			})
		);
	}

	#[test]
	fn test_skipped_has_no_payload() {
		let result: ProviderResult<ReasoningAnalysis> =
			ProviderResult::skipped(ProviderKind::Reasoning);
		assert!(result.is_skipped());
		assert!(result.payload().is_none());
		assert_eq!(
			serde_json::to_value(&result).unwrap(),
			json!({"status": "skipped", "provider": "reasoning"})
		);
	}

	#[test]
	fn test_failed_accessors() {
		let result = ProviderResult::Failed {
			provider: ProviderKind::Reasoning,
			error: "HTTP 500: boom".to_string(),
			note: "check quota".to_string(),
			payload: ReasoningAnalysis::new("fallback"),
		};
		assert_eq!(result.status_label(), "failed");
		assert_eq!(result.error(), Some("HTTP 500: boom"));
		assert_eq!(result.note(), Some("check quota"));
		assert_eq!(result.payload().unwrap().reasoning, "fallback");

		let json = serde_json::to_value(&result).unwrap();
		assert_eq!(json["reasoning"], "fallback");
		assert_eq!(json["error"], "HTTP 500: boom");
	}
}
