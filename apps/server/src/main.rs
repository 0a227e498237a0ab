// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use anyhow::Context;
use lux_lite_server::{app, AppState, Config};
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug,lux_lite_server=debug"));
    if config.log_json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).pretty().init();
    }

    tracing::info!(
        port = config.port,
        max_body_kb = config.max_body_kb,
        request_timeout_secs = config.request_timeout_secs,
        cost_per_kwh = config.energy_cost_per_kwh,
        daily_hours = config.daily_usage_hours,
        "Starting Lux-Lite Server"
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let router = app(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!("Listening on http://{}", addr);
    axum::serve(listener, router).await?;

    Ok(())
}
