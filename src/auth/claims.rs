// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Recommendations Platform

//! JWT claims and the request-scoped identity derived from them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::authority::Authority;

/// Claim names tried, in order, when extracting the subject.
const SUBJECT_CLAIMS: [&str; 2] = ["sub", "userId"];

/// The full claims mapping of a verified token.
///
/// Only `exp` is required for verification (enforced by the validator);
/// everything else is carried as-is so callers can apply their own claim
/// policies. No `Claims` value exists for a token that failed verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Claims(serde_json::Map<String, Value>);

impl Claims {
    /// Look up a raw claim by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Extract the subject identifier.
    ///
    /// Tries the standard `sub` claim first, then a claim literally named
    /// `userId`; the first string value wins. `None` means no identity can be
    /// established from this token.
    pub fn subject(&self) -> Option<&str> {
        SUBJECT_CLAIMS
            .iter()
            .find_map(|name| self.0.get(*name).and_then(Value::as_str))
    }

    /// Expiry timestamp (seconds since the Unix epoch), if present.
    pub fn expires_at(&self) -> Option<i64> {
        self.0.get("exp").and_then(Value::as_i64)
    }
}

/// The verified outcome of token validation, scoped to one request.
///
/// Created by the request gate after a successful validation, read by
/// downstream handlers through request extensions, dropped at request end.
/// Exactly one identity may exist per request; the gate never overwrites an
/// identity set by an earlier stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    subject: String,
    authorities: Vec<Authority>,
}

impl Identity {
    /// Build the identity for a validated token: the subject plus the fixed
    /// `USER` authority.
    pub fn user(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            authorities: vec![Authority::User],
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn authorities(&self) -> &[Authority] {
        &self.authorities
    }

    pub fn has_authority(&self, authority: Authority) -> bool {
        self.authorities.contains(&authority)
    }
}
