// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Recommendations Platform

//! Authentication and authorization errors.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Authentication error taxonomy.
///
/// Only `PolicyDenied` and `AccessDenied` ever become HTTP responses; the
/// first two resolve inside the gate to "proceed unauthenticated" and exist
/// so the gate can log why no identity was established.
#[derive(Debug)]
pub enum AuthError {
    /// No `Authorization` header, or one without a `Bearer ` prefix
    MissingCredential,
    /// Signature mismatch, malformed structure, algorithm mismatch or expiry.
    /// The reason is for logs only; callers see a single collapsed outcome.
    InvalidToken { reason: &'static str },
    /// Authentication required by the path policy but no identity present
    PolicyDenied,
    /// Authenticated but not authorized. No rule in the current policy table
    /// produces this; it is the extension point for future role checks.
    AccessDenied,
}

/// Stable JSON body for terminal auth responses.
#[derive(Serialize)]
struct AuthErrorBody {
    error: &'static str,
    message: String,
}

impl AuthError {
    pub fn invalid_token(reason: &'static str) -> Self {
        Self::InvalidToken { reason }
    }

    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingCredential
            | AuthError::InvalidToken { .. }
            | AuthError::PolicyDenied => StatusCode::UNAUTHORIZED,
            AuthError::AccessDenied => StatusCode::FORBIDDEN,
        }
    }

    /// Value of the `error` field in the response body.
    fn error_label(&self) -> &'static str {
        match self {
            AuthError::AccessDenied => "Forbidden",
            _ => "Unauthorized",
        }
    }

    /// Value of the `message` field in the response body.
    fn public_message(&self) -> String {
        match self {
            AuthError::AccessDenied => "Accès refusé".to_string(),
            _ => "Token manquant ou invalide".to_string(),
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::MissingCredential => {
                write!(f, "no bearer credential in the Authorization header")
            }
            AuthError::InvalidToken { reason } => write!(f, "invalid token: {reason}"),
            AuthError::PolicyDenied => write!(f, "authentication required"),
            AuthError::AccessDenied => write!(f, "access denied"),
        }
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(AuthErrorBody {
            error: self.error_label(),
            message: self.public_message(),
        });
        (
            self.status_code(),
            [(header::CONTENT_TYPE, "application/json; charset=UTF-8")],
            body,
        )
            .into_response()
    }
}
