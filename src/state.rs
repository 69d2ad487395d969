// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Recommendations Platform

use std::sync::Arc;

use crate::auth::{AccessPolicy, TokenValidator};

/// Shared, read-only application state.
///
/// Built once at startup; clones are cheap Arc bumps. Nothing in here is
/// mutable after construction, so concurrent request handlers read it without
/// synchronization.
#[derive(Debug, Clone)]
pub struct AppState {
    pub validator: Arc<TokenValidator>,
    pub policy: Arc<AccessPolicy>,
}

impl AppState {
    pub fn new(validator: TokenValidator, policy: AccessPolicy) -> Self {
        Self {
            validator: Arc::new(validator),
            policy: Arc::new(policy),
        }
    }
}
