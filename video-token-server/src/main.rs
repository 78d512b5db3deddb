/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Video room token server entry point.

use anyhow::Context;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;
use video_token_server::config::Config;
use video_token_server::routes;
use video_token_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    let listen_addr = config.listen_addr.clone();

    tracing::info!(
        rooms = config.whitelist.len(),
        issuer = %config.issuer.api_key_sid,
        "Loaded room whitelist"
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = AppState::from(config);
    let app = routes::router().layer(cors).with_state(state);

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;

    tracing::info!("Token server listening on {listen_addr}");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
