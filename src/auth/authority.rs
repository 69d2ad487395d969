// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Recommendations Platform

//! Authorities granted to authenticated requests.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Authority attached to a verified identity.
///
/// Every successfully validated token is granted exactly `User`. Finer-grained
/// authorities can be added here; [`Authority::has_privilege`] is the hook the
/// 403 path uses once a rule requires more than "authenticated".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Authority {
    /// Normal authenticated user
    User,
}

impl Authority {
    /// Check if this authority has at least the privileges of the required one.
    pub fn has_privilege(&self, required: Authority) -> bool {
        match (self, required) {
            (Authority::User, Authority::User) => true,
        }
    }
}

impl std::fmt::Display for Authority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Authority::User => write!(f, "USER"),
        }
    }
}
