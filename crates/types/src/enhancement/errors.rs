//! Boundary validation errors for enhancement requests

use thiserror::Error;

/// Validation errors raised before a request enters the pipeline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EnhancementValidationError {
	#[error("{field} is required")]
	MissingRequiredField { field: String },

	#[error("{field} must be a positive integer (got {value})")]
	NonPositiveCount { field: String, value: i64 },

	#[error("{field} must be a finite number")]
	NonFiniteNumber { field: String },
}

pub type ValidationResult<T> = Result<T, EnhancementValidationError>;
