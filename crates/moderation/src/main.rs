use std::sync::Arc;

use anyhow::Context;

use quill_infra::{HttpEventPublisher, ServiceConfig, config::MODERATION_PORT};
use quill_moderation::{ModerationPolicy, ModerationService, app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    quill_observability::init("moderation");

    let config = ServiceConfig::from_env(MODERATION_PORT);
    let policy = ModerationPolicy::from_env();
    tracing::info!(blocked = ?policy.blocked(), "moderation policy loaded");

    let relay = Arc::new(HttpEventPublisher::new(&config.relay_url));
    let service = Arc::new(ModerationService::new(policy, relay));
    let app = app::build_app(service);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;

    tracing::info!(addr = %listener.local_addr()?, relay = %config.relay_url, "moderation listening");

    axum::serve(listener, app).await?;
    Ok(())
}
