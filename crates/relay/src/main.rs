use std::sync::Arc;

use anyhow::Context;

use quill_infra::RelayConfig;
use quill_relay::{Relay, app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    quill_observability::init("relay");

    let config = RelayConfig::from_env();
    let relay = Arc::new(Relay::from_config(&config));
    let app = app::build_app(relay);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;

    tracing::info!(
        addr = %listener.local_addr()?,
        participants = ?config.participants,
        "relay listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
