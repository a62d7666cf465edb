//! AI Model Enhancer Library
//!
//! A multi-provider orchestrator that fans one model-enhancement request out
//! to up to five external AI providers and merges every outcome into a
//! uniformly shaped report with a completeness score.

// Core domain types - the most commonly used types
pub use enhancer_types::{
	chrono,
	serde_json,
	CapabilityBlock,
	CompletionClient,
	CompletionRequest,
	EnhanceResponse,
	EnhancementConfig,
	EnhancementReport,
	EnhancementRequest,
	EnhancementValidationError,
	ModelAnalysisRequest,
	ProviderConfig,
	ProviderError,
	ProviderKind,
	ProviderResult,
	ServiceStatus,
	SyntheticDataRequest,
};

// Service layer
pub use enhancer_service::{Orchestrator, OrchestratorError, OrchestratorTrait};

// API layer
pub use enhancer_api::{create_router, AppState, ROUTES};

// Adapters
pub use enhancer_adapters::{
	AnthropicClient, CapabilityAdapter, GenerativeAdapter, OpenAiClient, ProviderRegistry,
	ReasoningAdapter,
};

// Config
pub use enhancer_config::{load_config, Settings};

pub mod mocks;

use enhancer_config::{
	log_provider_status, log_service_info, log_service_shutdown, log_startup_complete, LogFormat,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

// Re-export external dependencies for downstream tests
pub use async_trait;

/// Builder for the enhancement service
#[derive(Default)]
pub struct EnhancerBuilder {
	settings: Option<Settings>,
	registry: Option<ProviderRegistry>,
}

impl EnhancerBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Use a prebuilt registry instead of resolving one from settings
	pub fn with_registry(mut self, registry: ProviderRegistry) -> Self {
		self.registry = Some(registry);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(
		&self,
		settings: &Settings,
	) -> Result<(), Box<dyn std::error::Error>> {
		// RUST_LOG wins over the configured level
		let log_level = &settings.logging.level;
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

		match settings.logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber
						.with_target(true)
						.with_thread_ids(true)
						.try_init()
						.map_err(|e| e as Box<dyn std::error::Error>)?;
				} else {
					subscriber
						.try_init()
						.map_err(|e| e as Box<dyn std::error::Error>)?;
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber
						.with_target(true)
						.with_thread_ids(true)
						.try_init()
						.map_err(|e| e as Box<dyn std::error::Error>)?;
				} else {
					subscriber
						.try_init()
						.map_err(|e| e as Box<dyn std::error::Error>)?;
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);

				if settings.logging.structured {
					subscriber
						.with_target(true)
						.with_thread_ids(true)
						.try_init()
						.map_err(|e| e as Box<dyn std::error::Error>)?;
				} else {
					subscriber
						.try_init()
						.map_err(|e| e as Box<dyn std::error::Error>)?;
				}
			},
		}

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}

	/// Build the orchestrator and return the configured router with state
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.unwrap_or_default();
		settings
			.validate()
			.map_err(|e| format!("Invalid configuration: {}", e))?;

		let registry = self
			.registry
			.unwrap_or_else(|| ProviderRegistry::from_settings(&settings));
		log_provider_status(registry.configs());

		let orchestrator = Orchestrator::new(
			Arc::new(registry),
			Duration::from_millis(settings.timeouts.per_provider_ms),
		);
		let app_state = AppState::new(
			Arc::new(orchestrator) as Arc<dyn OrchestratorTrait>,
			Duration::from_millis(settings.timeouts.request_ms),
		);

		let router = create_router().with_state(app_state.clone());
		Ok((router, app_state))
	}

	/// Start the complete server
	///
	/// Loads `.env` and the configuration, initializes tracing, resolves the
	/// provider registry once, then binds and serves until Ctrl+C.
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		// Load .env file if it exists
		dotenvy::dotenv().ok();

		let using_provided_settings = self.settings.is_some();
		let (settings, load_error) = match self.settings.take() {
			Some(settings) => (settings, None),
			None => match load_config() {
				Ok(settings) => (settings, None),
				Err(e) => (Settings::default(), Some(e)),
			},
		};

		self.init_tracing_from_settings(&settings)?;
		log_service_info();

		if let Some(e) = load_error {
			warn!("Failed to load configuration, using defaults: {}", e);
		}
		info!(
			"Using configuration: loaded from {}",
			if using_provided_settings {
				"provided settings"
			} else {
				"config file, environment or defaults"
			}
		);

		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		self.settings = Some(settings);
		let (app, _) = self.start().await?;

		let listener = tokio::net::TcpListener::bind(addr).await?;
		log_startup_complete(&bind_addr, ROUTES);

		axum::serve(listener, app)
			.with_graceful_shutdown(async {
				let _ = tokio::signal::ctrl_c().await;
			})
			.await?;

		log_service_shutdown();
		Ok(())
	}
}
