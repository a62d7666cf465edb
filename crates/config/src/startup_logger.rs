//! Service startup logging for the enhancement orchestrator
//!
//! Service information, per-provider configuration state and the route table
//! are logged once at startup. Credentials are never logged, only where they
//! are expected to come from.

use enhancer_types::ProviderConfig;
use std::env;
use tracing::{info, warn};

/// Logs service information at startup
pub fn log_service_info() {
	// Use the root package name, not the current crate
	let service_name = "enhancer";
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== AI Model Enhancer Starting ===");
	info!("🚀 Service: {} v{}", service_name, service_version);
	info!("💻 Platform: {} ({})", env::consts::OS, env::consts::ARCH);

	if let Ok(cwd) = env::current_dir() {
		info!("📁 Working Directory: {}", cwd.display());
	}

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Level: {}", rust_log);
	}

	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs one line per provider with its configuration state
pub fn log_provider_status<'a>(providers: impl IntoIterator<Item = &'a ProviderConfig>) {
	let mut configured = 0usize;
	for provider in providers {
		if provider.configured {
			configured += 1;
			info!(
				provider = %provider.name,
				vendor = %provider.vendor,
				"✅ {} ({}) configured",
				provider.name,
				provider.vendor
			);
		} else {
			warn!(
				provider = %provider.name,
				vendor = %provider.vendor,
				"⚠️ {} ({}) not configured, set {} to enable",
				provider.name,
				provider.vendor,
				provider.credential_source
			);
		}
	}

	if configured == 0 {
		warn!("No AI providers configured; all reports will contain demo content");
	} else {
		info!("🤖 {} of {} providers configured", configured, enhancer_types::TOTAL_PROVIDERS);
	}
}

/// Logs service shutdown information
pub fn log_service_shutdown() {
	info!("🛑 AI Model Enhancer Shutting Down");
	info!(
		"🕒 Shutdown at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs startup completion with the bind address and route table
pub fn log_startup_complete(bind_address: &str, routes: &[&str]) {
	info!("✅ AI Model Enhancer Started Successfully");
	info!("🌐 Server listening on: {}", bind_address);
	for route in routes {
		info!("   {}", route);
	}
	info!("📡 Ready to accept requests");
}
