// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Recommendations Platform

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

/// Health check response for liveness probes.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Health check endpoint handler.
///
/// Public by policy; always returns 200 if the process is running. The
/// validator performs no I/O, so there are no dependencies to probe.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
