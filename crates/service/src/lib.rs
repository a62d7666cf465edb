//! Enhancer Service
//!
//! The enhancement pipeline: fan-out to provider adapters, fan-in, and
//! report assembly.

pub mod orchestrator;
pub mod report;

pub use orchestrator::{Orchestrator, OrchestratorError, OrchestratorTrait, ANALYSIS_RECOMMENDATIONS};
pub use report::{build_report, summarize, teacher_services, PipelineOutputs};
