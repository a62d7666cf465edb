//! AI Model Enhancer Server
//!
//! Main entry point for the enhancement server

use enhancer::EnhancerBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	EnhancerBuilder::new().start_server().await
}
