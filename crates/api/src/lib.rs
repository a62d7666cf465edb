//! Enhancer API
//!
//! Axum-based HTTP surface for the enhancement orchestrator.

pub mod handlers;
pub mod router;
pub mod state;

pub use router::{create_router, ROUTES};
pub use state::AppState;
