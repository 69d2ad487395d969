// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Recommendations Platform

//! Router assembly.
//!
//! The middleware chain is composed explicitly at startup, outermost first:
//! CORS → request-id → trace → request gate → handlers. The gate wraps every
//! route, including the docs and the 404 fallback, so the access policy is
//! the single source of truth for what is public.

use axum::{
    http::{HeaderName, StatusCode},
    middleware::from_fn_with_state,
    routing::{any, get},
    Router,
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{auth, cors::CorsPolicy, error::ApiError, state::AppState};

pub mod health;
pub mod recommendations;

pub fn router(state: AppState, cors: &CorsPolicy) -> Router {
    let x_request_id = HeaderName::from_static("x-request-id");

    Router::new()
        .route(
            "/api/recommendations/{user_id}",
            get(recommendations::get_recommendation),
        )
        .route("/health", get(health::health))
        .route("/error", any(error_page))
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .layer(from_fn_with_state(state, auth::authenticate))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
        .layer(cors.layer())
}

/// The service's error page: public by policy, mirrors the 404 fallback.
async fn error_page() -> ApiError {
    not_found().await
}

async fn not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "Resource not found")
}

#[derive(OpenApi)]
#[openapi(
    paths(health::health, recommendations::get_recommendation),
    components(schemas(health::HealthResponse, recommendations::Recommendation)),
    tags(
        (name = "Health", description = "Liveness probes"),
        (name = "Recommendations", description = "Calorie-burn predictions")
    )
)]
struct ApiDoc;
