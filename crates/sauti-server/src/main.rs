//! Sauti Voice Gateway - HTTP front for a third-party TTS provider

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sauti_core::{GatewayConfig, SynthesisClient};
use sauti_server::{api, state::AppState};

/// Optional `sauti.toml` next to the binary, overridden by `SAUTI_*`
/// environment variables (e.g. `SAUTI_SERVER__API_SECRET`).
fn load_config() -> anyhow::Result<GatewayConfig> {
    let config = config::Config::builder()
        .add_source(config::File::with_name("sauti").required(false))
        .add_source(config::Environment::with_prefix("SAUTI").separator("__"))
        .build()?
        .try_deserialize()
        .context("invalid gateway configuration")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sauti_server=debug,sauti_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Sauti voice gateway");

    let config = load_config()?;
    config.validate()?;

    let synth = SynthesisClient::new(config.provider.clone())?;
    let state = AppState::new(config.clone(), synth);

    // Build router
    let app = api::create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
