//! Configuration loading utilities

use crate::Settings;
use config::{Config, ConfigError, Environment, File};

/// Error returned when settings cannot be read or deserialized
pub type ConfigLoadError = ConfigError;

/// Prefix of environment variables that override file settings
pub const ENV_PREFIX: &str = "ENHANCER";

/// Load configuration from defaults, `config/config.*` and `ENHANCER__*` variables
///
/// Later sources win. Nested keys are separated by `__`, so
/// `ENHANCER__TIMEOUTS__PER_PROVIDER_MS=5000` sets `timeouts.per_provider_ms`.
pub fn load_config() -> Result<Settings, ConfigLoadError> {
	load_config_from("config/config")
}

/// Same as [`load_config`] with an explicit file stem
pub fn load_config_from(file_stem: &str) -> Result<Settings, ConfigLoadError> {
	let s = Config::builder()
		.add_source(Config::try_from(&Settings::default())?)
		.add_source(File::with_name(file_stem).required(false))
		.add_source(
			Environment::with_prefix(ENV_PREFIX)
				.prefix_separator("__")
				.separator("__")
				.try_parsing(true),
		)
		.build()?;

	s.try_deserialize()
}
