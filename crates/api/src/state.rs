use std::sync::Arc;
use std::time::Duration;

use enhancer_service::OrchestratorTrait;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub orchestrator: Arc<dyn OrchestratorTrait>,
	/// Deadline applied to each enhancement request
	pub request_timeout: Duration,
}

impl AppState {
	pub fn new(orchestrator: Arc<dyn OrchestratorTrait>, request_timeout: Duration) -> Self {
		Self {
			orchestrator,
			request_timeout,
		}
	}
}
