// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Recommendations Platform

use recommendation_service::{
    api,
    auth::{AccessPolicy, TokenValidator},
    config::{Config, LOG_FORMAT_ENV},
    cors::CorsPolicy,
    state::AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = Config::from_env().expect("invalid configuration");
    if config.uses_dev_secret() {
        tracing::warn!(
            "JWT_SECRET is not set; using the development default. \
             Do not run this configuration in production."
        );
    }

    let state = AppState::new(
        TokenValidator::new(&config.jwt_secret),
        AccessPolicy::default(),
    );
    let cors = CorsPolicy::new(config.cors_allowed_origins.clone());
    let app = api::router(state, &cors);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .expect("failed to bind server address");

    tracing::info!(addr = %config.addr, "recommendation service listening (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server failed");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    let json = std::env::var(LOG_FORMAT_ENV)
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install ctrl-c handler");
}
