// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Recommendations Platform

//! Recommendation Service - Authentication Edge
//!
//! This crate is the security edge for the recommendations REST API: it
//! validates bearer JWTs, establishes a request-scoped identity, enforces a
//! path-based access policy, and answers CORS preflights. Token issuance is
//! a separate service; this crate only verifies what it is presented.
//!
//! ## Modules
//!
//! - `api` - HTTP routes and handlers (Axum)
//! - `auth` - Token validation, identity, access policy, request gate
//! - `cors` - Cross-origin policy
//! - `config` - Environment-derived startup configuration

pub mod api;
pub mod auth;
pub mod config;
pub mod cors;
pub mod error;
pub mod state;
