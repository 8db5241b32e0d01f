//! Development backend for UI work
//!
//! Runs the in-process REST mock on a fixed port, seeded with a
//! recruitment dataset large enough that every list paginates.
//!
//! Usage: cargo run -p dev-server

use anyhow::Result;
use test_helpers::backend::{self, MockBackend, MockConfig};
use test_helpers::mock::DevDataset;
use tracing::info;

const DEFAULT_PORT: u16 = 54321;
const DEFAULT_API_KEY: &str = "dev-anon-key";

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = test_helpers::telemetry::get_subscriber("info".into());
    test_helpers::telemetry::init_subscriber(subscriber)?;

    info!("🚀 Starting development backend");

    let port = match std::env::var("DEV_SERVER_PORT") {
        Ok(port) => port.parse()?,
        Err(_) => DEFAULT_PORT,
    };
    let api_key = std::env::var("BACKEND_API_KEY")
        .unwrap_or_else(|_| DEFAULT_API_KEY.to_string());
    let mut config = MockConfig {
        ip: "127.0.0.1".into(),
        port,
        api_key: api_key.clone(),
    };

    info!("📊 Setting up development test data...");
    let mock = MockBackend::default();
    let dataset = DevDataset::create(&mock)?;

    let server = backend::build(&mut config, mock)?;
    let handle = server.handle();
    tokio::spawn(server);

    info!("🎯 Development backend ready!");
    info!("   REST: http://127.0.0.1:{}/rest/v1", config.port);
    info!(
        "   UI:   cd ui && BACKEND_URL=http://127.0.0.1:{} BACKEND_API_KEY={} trunk serve",
        config.port, api_key
    );
    info!("");
    dataset.print_summary();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development backend");
    handle.stop(true).await;
    Ok(())
}
