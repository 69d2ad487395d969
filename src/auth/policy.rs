// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Recommendations Platform

//! Path-based access policy.
//!
//! The policy is plain immutable data built once at startup and evaluated
//! first-match-wins against every request. The authoritative table:
//!
//! | rule | requirement |
//! |------|-------------|
//! | method `OPTIONS` | public (CORS preflight) |
//! | `/api/recommendations/**` | authenticated |
//! | `/actuator/**`, `/health`, `/error` | public |
//! | `**` (default) | authenticated |

use axum::http::Method;

/// What a matched rule requires of the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Forward the request regardless of identity
    Public,
    /// An identity must be present, otherwise 401
    Authenticated,
}

#[derive(Debug, Clone)]
enum Matcher {
    /// Match any request with this HTTP method
    Method(Method),
    /// Match the request path against a pattern: exact, `/prefix/**`
    /// (the prefix itself or anything below it), or `**` (everything)
    Path(String),
}

/// One ordered entry of the policy table.
#[derive(Debug, Clone)]
pub struct PolicyRule {
    matcher: Matcher,
    requirement: Requirement,
}

impl PolicyRule {
    pub fn method(method: Method, requirement: Requirement) -> Self {
        Self {
            matcher: Matcher::Method(method),
            requirement,
        }
    }

    pub fn path(pattern: impl Into<String>, requirement: Requirement) -> Self {
        Self {
            matcher: Matcher::Path(pattern.into()),
            requirement,
        }
    }

    fn matches(&self, method: &Method, path: &str) -> bool {
        match &self.matcher {
            Matcher::Method(m) => m == method,
            Matcher::Path(pattern) => path_matches(pattern, path),
        }
    }
}

/// Ordered first-match-wins rule table.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    rules: Vec<PolicyRule>,
}

impl AccessPolicy {
    pub fn new(rules: Vec<PolicyRule>) -> Self {
        Self { rules }
    }

    /// Evaluate the table against a request. Unmatched requests require
    /// authentication, same as the table's trailing `**` rule.
    pub fn evaluate(&self, method: &Method, path: &str) -> Requirement {
        self.rules
            .iter()
            .find(|rule| rule.matches(method, path))
            .map(|rule| rule.requirement)
            .unwrap_or(Requirement::Authenticated)
    }
}

impl Default for AccessPolicy {
    /// The authoritative table for the recommendations API.
    fn default() -> Self {
        Self::new(vec![
            PolicyRule::method(Method::OPTIONS, Requirement::Public),
            PolicyRule::path("/api/recommendations/**", Requirement::Authenticated),
            PolicyRule::path("/actuator/**", Requirement::Public),
            PolicyRule::path("/health", Requirement::Public),
            PolicyRule::path("/error", Requirement::Public),
            PolicyRule::path("**", Requirement::Authenticated),
        ])
    }
}

fn path_matches(pattern: &str, path: &str) -> bool {
    if pattern == "**" {
        return true;
    }
    if let Some(prefix) = pattern.strip_suffix("/**") {
        return path == prefix
            || path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/'));
    }
    pattern == path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_is_public_regardless_of_path() {
        let policy = AccessPolicy::default();
        assert_eq!(
            policy.evaluate(&Method::OPTIONS, "/api/recommendations/42"),
            Requirement::Public
        );
        assert_eq!(
            policy.evaluate(&Method::OPTIONS, "/anything"),
            Requirement::Public
        );
    }

    #[test]
    fn recommendations_prefix_requires_authentication() {
        let policy = AccessPolicy::default();
        assert_eq!(
            policy.evaluate(&Method::GET, "/api/recommendations/42"),
            Requirement::Authenticated
        );
        assert_eq!(
            policy.evaluate(&Method::GET, "/api/recommendations"),
            Requirement::Authenticated
        );
    }

    #[test]
    fn diagnostics_paths_are_public() {
        let policy = AccessPolicy::default();
        assert_eq!(policy.evaluate(&Method::GET, "/health"), Requirement::Public);
        assert_eq!(policy.evaluate(&Method::GET, "/error"), Requirement::Public);
        assert_eq!(
            policy.evaluate(&Method::GET, "/actuator/metrics"),
            Requirement::Public
        );
    }

    #[test]
    fn default_rule_authenticates_everything_else() {
        let policy = AccessPolicy::default();
        assert_eq!(
            policy.evaluate(&Method::GET, "/something-else"),
            Requirement::Authenticated
        );
        assert_eq!(policy.evaluate(&Method::POST, "/"), Requirement::Authenticated);
    }

    #[test]
    fn prefix_pattern_does_not_match_lookalike_siblings() {
        assert!(path_matches("/api/recommendations/**", "/api/recommendations/42"));
        assert!(path_matches("/api/recommendations/**", "/api/recommendations"));
        assert!(!path_matches("/api/recommendations/**", "/api/recommendations-v2"));
    }

    #[test]
    fn empty_table_defaults_to_authenticated() {
        let policy = AccessPolicy::new(Vec::new());
        assert_eq!(
            policy.evaluate(&Method::GET, "/health"),
            Requirement::Authenticated
        );
    }
}
