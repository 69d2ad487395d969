// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Recommendations Platform

//! CORS policy for browser clients.
//!
//! The policy is immutable data built once at startup; [`CorsPolicy::layer`]
//! turns it into the tower-http layer applied at the router level. Preflights
//! from listed origins are answered before authentication runs. Requests from
//! unlisted origins get no CORS headers; the browser's same-origin policy then
//! blocks the response, the request itself is not rejected here.

use std::time::Duration;

use axum::http::{header, HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer, ExposeHeaders};

/// Preflight cache lifetime.
const PREFLIGHT_MAX_AGE: Duration = Duration::from_secs(3600);

/// Origins allowed when `CORS_ALLOWED_ORIGINS` is not set: the Angular dev
/// server, the Angular production server, and the alternative port.
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:4200",
    "http://localhost:4000",
    "http://localhost:3000",
];

/// Static cross-origin policy, applied to all paths.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    pub allowed_origins: Vec<String>,
    pub allowed_methods: Vec<Method>,
    pub allowed_headers: Vec<HeaderName>,
    pub exposed_headers: Vec<HeaderName>,
    pub allow_credentials: bool,
    pub max_age: Duration,
}

impl CorsPolicy {
    /// Build the policy for the given origin allow-list; everything else is
    /// fixed for this API.
    pub fn new(allowed_origins: Vec<String>) -> Self {
        Self {
            allowed_origins,
            allowed_methods: vec![
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
                Method::PATCH,
            ],
            allowed_headers: vec![
                header::AUTHORIZATION,
                header::CONTENT_TYPE,
                HeaderName::from_static("x-requested-with"),
                header::ACCEPT,
                header::ORIGIN,
                header::ACCESS_CONTROL_REQUEST_METHOD,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ],
            exposed_headers: vec![header::AUTHORIZATION, header::CONTENT_TYPE],
            allow_credentials: true,
            max_age: PREFLIGHT_MAX_AGE,
        }
    }

    /// Build the router-level layer for this policy.
    ///
    /// Origins are matched exactly; an invalid entry in the allow-list is
    /// silently skipped rather than allowing none or all.
    pub fn layer(&self) -> CorsLayer {
        let allowed: Vec<HeaderValue> = self
            .allowed_origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(allowed))
            .allow_methods(AllowMethods::list(self.allowed_methods.clone()))
            .allow_headers(AllowHeaders::list(self.allowed_headers.clone()))
            .expose_headers(ExposeHeaders::list(self.exposed_headers.clone()))
            .allow_credentials(self.allow_credentials)
            .max_age(self.max_age)
    }
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_lists_the_angular_origins() {
        let policy = CorsPolicy::default();
        assert_eq!(policy.allowed_origins, DEFAULT_ALLOWED_ORIGINS.to_vec());
        assert!(policy.allow_credentials);
        assert_eq!(policy.max_age, Duration::from_secs(3600));
    }

    #[test]
    fn all_six_methods_are_allowed() {
        let policy = CorsPolicy::default();
        for method in [
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
            Method::PATCH,
        ] {
            assert!(policy.allowed_methods.contains(&method), "{method} missing");
        }
    }

    #[test]
    fn layer_builds_from_a_list_with_invalid_entries() {
        let policy = CorsPolicy::new(vec![
            "http://localhost:4200".to_string(),
            "\u{0}not-a-header-value".to_string(),
        ]);
        // Must not panic; the invalid origin is dropped.
        let _ = policy.layer();
    }
}
