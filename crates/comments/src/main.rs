use std::sync::Arc;

use anyhow::Context;

use quill_comments::{CommentService, app};
use quill_infra::{HttpEventPublisher, ServiceConfig, config::COMMENTS_PORT};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    quill_observability::init("comments");

    let config = ServiceConfig::from_env(COMMENTS_PORT);
    let relay = Arc::new(HttpEventPublisher::new(&config.relay_url));
    let service = Arc::new(CommentService::in_memory(relay));
    let app = app::build_app(service);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;

    tracing::info!(addr = %listener.local_addr()?, relay = %config.relay_url, "comments listening");

    axum::serve(listener, app).await?;
    Ok(())
}
