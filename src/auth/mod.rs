// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Recommendations Platform

//! # Authentication Module
//!
//! This module provides JWT bearer authentication for the recommendations API.
//!
//! ## Auth Flow
//!
//! 1. The frontend obtains a JWT from the separate auth service
//! 2. The frontend sends `Authorization: Bearer <JWT>`
//! 3. This service:
//!    - Verifies the HMAC-SHA-256 signature with the shared secret
//!    - Verifies the `exp` claim
//!    - Extracts the subject (`sub`, falling back to `userId`)
//!    - Attaches a request-scoped [`Identity`] with the `USER` authority
//! 4. The path-based [`AccessPolicy`] decides whether the request proceeds
//!
//! ## Security
//!
//! - The verification algorithm is pinned to the HS256 family; a token whose
//!   header declares anything else is rejected
//! - A failed validation never terminates the request by itself: the request
//!   proceeds without an identity and the policy produces the 401
//! - Identity lives in request extensions, one per request, first-writer-wins

pub mod authority;
pub mod claims;
pub mod error;
pub mod middleware;
pub mod policy;
pub mod validator;

pub use authority::Authority;
pub use claims::{Claims, Identity};
pub use error::AuthError;
pub use middleware::authenticate;
pub use policy::{AccessPolicy, PolicyRule, Requirement};
pub use validator::TokenValidator;
