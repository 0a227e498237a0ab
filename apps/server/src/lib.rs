// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lux-Lite Server - HTTP API for room lighting plans.
//!
//! Thin adapter over `lux-lite-core`: every endpoint takes a room
//! description as JSON and returns the computed plan, a 3D preview or a PDF
//! report.
//!
//! # Endpoints
//!
//! - `GET /` - API information
//! - `GET /api/v1/health` - Health check
//! - `GET /api/v1/catalog` - Room types, orientations, fixtures, mountings
//! - `POST /api/v1/room-config` - Echo a room configuration (also `/get-room-config`)
//! - `POST /api/v1/analyze` - Lighting plan as JSON
//! - `POST /api/v1/scene` - 3D room preview as JSON
//! - `POST /api/v1/report` - PDF report download

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use lux_lite_core::UsageProfile;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod routes;
pub mod types;

pub use config::Config;
pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub usage: UsageProfile,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            usage: config.usage(),
            config: Arc::new(config),
        }
    }
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.allows_any_origin() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

/// Build the router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let config = state.config.clone();

    Router::new()
        // Root endpoint - API information
        .route("/", get(routes::health::info))
        // Health check
        .route("/api/v1/health", get(routes::health::check))
        .route("/api/v1/catalog", get(routes::catalog::list))
        // Room configuration echo
        .route("/get-room-config", post(routes::room_config::echo))
        .route("/api/v1/room-config", post(routes::room_config::echo))
        // Lighting plan endpoints
        .route("/api/v1/analyze", post(routes::lighting::analyze))
        .route("/api/v1/scene", post(routes::lighting::scene))
        .route("/api/v1/report", post(routes::lighting::report))
        // Middleware
        .layer(DefaultBodyLimit::max(config.max_body_kb * 1024))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config))
        .with_state(state)
}
