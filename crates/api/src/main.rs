use anyhow::{Context, Result};
use beacon_api::{build_app, ApiConfig};
use beacon_observability::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("beacon_api");

    let config = ApiConfig::from_env();
    let app = build_app(&config);

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    tracing::info!(
        bind = %config.bind,
        max_body_bytes = config.max_body_bytes,
        "beacon guidance api started"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
