// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Recommendations Platform

//! Request gate: the per-request authentication pipeline.
//!
//! Runs exactly once per inbound request, before protected handlers:
//!
//! 1. Read the bearer credential from the `Authorization` header
//! 2. Verify it with [`TokenValidator`]
//! 3. On success, attach an [`Identity`] to request extensions
//!    (first-writer-wins: an identity set by an earlier stage is kept and
//!    validation is skipped)
//! 4. Evaluate the [`AccessPolicy`] for the request method and path
//! 5. Forward the request, or terminate with the structured 401 body
//!
//! A missing or invalid credential is not an error here: the request simply
//! proceeds without an identity and the policy decides the outcome. No panic
//! or error type crosses this boundary.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::{claims::Identity, error::AuthError, policy::Requirement};
use crate::state::AppState;

/// Authentication middleware function.
///
/// Apply to the whole router with
/// `axum::middleware::from_fn_with_state(state, authenticate)`.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if request.extensions().get::<Identity>().is_none() {
        match bearer_token(request.headers()) {
            Ok(token) => match state.validator.validate(token) {
                Ok(claims) => match claims.subject() {
                    Some(subject) => {
                        request.extensions_mut().insert(Identity::user(subject));
                    }
                    // A verified token without a subject is indistinguishable
                    // from no token at all; the policy decides the outcome.
                    None => tracing::warn!("verified token carries no subject claim"),
                },
                Err(err) => tracing::warn!(error = %err, "token validation failed"),
            },
            Err(err) => tracing::debug!(error = %err, "request has no bearer credential"),
        }
    }

    match state.policy.evaluate(request.method(), request.uri().path()) {
        Requirement::Public => next.run(request).await,
        Requirement::Authenticated if request.extensions().get::<Identity>().is_some() => {
            next.run(request).await
        }
        Requirement::Authenticated => AuthError::PolicyDenied.into_response(),
    }
}

/// Extract the raw token from the `Authorization` header.
///
/// A malformed prefix is treated the same as an absent header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(AuthError::MissingCredential)
}
