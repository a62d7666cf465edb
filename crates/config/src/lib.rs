//! Enhancer Configuration
//!
//! Configuration management and startup utilities for the enhancement orchestrator.

pub mod configurable_value;
pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use configurable_value::{
	ConfigurableValue, ConfigurableValueError, ValueType, INLINE_SOURCE_NAME,
};
pub use loader::{load_config, load_config_from, ConfigLoadError};
pub use settings::{
	ConfigValidationError, CredentialSettings, LogFormat, LoggingSettings, ModelProviderSettings,
	ProvidersSettings, ServerSettings, Settings, TimeoutSettings,
};
pub use startup_logger::{
	log_provider_status, log_service_info, log_service_shutdown, log_startup_complete,
};
