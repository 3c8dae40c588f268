use std::sync::Arc;

use anyhow::Context;

use quill_infra::{HttpEventPublisher, ServiceConfig, config::POSTS_PORT};
use quill_posts::{PostService, app};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    quill_observability::init("posts");

    let config = ServiceConfig::from_env(POSTS_PORT);
    let relay = Arc::new(HttpEventPublisher::new(&config.relay_url));
    let service = Arc::new(PostService::in_memory(relay));
    let app = app::build_app(service);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr()))?;

    tracing::info!(addr = %listener.local_addr()?, relay = %config.relay_url, "posts listening");

    axum::serve(listener, app).await?;
    Ok(())
}
