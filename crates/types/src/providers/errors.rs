//! Error types for outbound provider calls

use thiserror::Error;

/// Failure of a single call to an external provider
///
/// Adapters never surface these to callers; they are folded into
/// `ProviderResult::Failed` together with fallback content.
#[derive(Error, Debug)]
pub enum ProviderError {
	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("HTTP {status_code}: {reason}")]
	HttpStatus { status_code: u16, reason: String },

	#[error("Timeout occurred after {timeout_ms}ms")]
	Timeout { timeout_ms: u64 },

	#[error("Invalid response format: {reason}")]
	InvalidResponse { reason: String },

	#[error("Client construction failed: {reason}")]
	ClientConstruction { reason: String },

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

impl ProviderError {
	/// HTTP status code carried by the error, if any
	pub fn status_code(&self) -> Option<u16> {
		match self {
			ProviderError::HttpStatus { status_code, .. } => Some(*status_code),
			ProviderError::Http(e) => e.status().map(|s| s.as_u16()),
			_ => None,
		}
	}

	pub fn is_timeout(&self) -> bool {
		match self {
			ProviderError::Timeout { .. } => true,
			ProviderError::Http(e) => e.is_timeout(),
			_ => false,
		}
	}
}

/// Result type for provider calls
pub type ProviderCallResult<T> = Result<T, ProviderError>;
