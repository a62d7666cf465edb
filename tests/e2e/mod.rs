//! End-to-end harness: a real server on an ephemeral port

#![allow(dead_code)]

use enhancer::{EnhancerBuilder, ProviderRegistry, Settings};
use tokio::task::JoinHandle;

use crate::mocks::isolated_settings;

pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

impl TestServer {
	/// Server with no provider configured
	pub async fn spawn() -> Result<Self, Box<dyn std::error::Error>> {
		Self::spawn_with(isolated_settings(), ProviderRegistry::unconfigured()).await
	}

	pub async fn spawn_with_registry(
		registry: ProviderRegistry,
	) -> Result<Self, Box<dyn std::error::Error>> {
		Self::spawn_with(isolated_settings(), registry).await
	}

	pub async fn spawn_with(
		settings: Settings,
		registry: ProviderRegistry,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let (app, _state) = EnhancerBuilder::new()
			.with_settings(settings)
			.with_registry(registry)
			.start()
			.await?;

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let base_url = format!("http://{}", addr);

		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		Ok(Self { base_url, handle })
	}

	pub fn url(&self, path: &str) -> String {
		format!("{}{}", self.base_url, path)
	}
}

impl Drop for TestServer {
	fn drop(&mut self) {
		self.handle.abort();
	}
}
