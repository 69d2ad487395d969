// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Recommendations Platform

//! # Runtime Configuration
//!
//! Configuration is loaded from the environment once at startup and is
//! read-only afterwards.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `JWT_SECRET` | Shared HMAC secret for token verification | dev-only default, warns at startup |
//! | `CORS_ALLOWED_ORIGINS` | Comma-separated origin allow-list | the three localhost origins |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8084` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::net::SocketAddr;

use thiserror::Error;

use crate::cors::DEFAULT_ALLOWED_ORIGINS;

/// Environment variable name for the shared signing secret.
pub const JWT_SECRET_ENV: &str = "JWT_SECRET";

/// Environment variable name for the CORS origin allow-list.
pub const CORS_ALLOWED_ORIGINS_ENV: &str = "CORS_ALLOWED_ORIGINS";

/// Environment variable names for the bind address.
pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";

/// Environment variable name for the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Development-only fallback secret. Must never be used in production; the
/// server warns loudly when it is in effect.
pub const DEV_JWT_SECRET: &str = "your-secret-key-change-in-production-min-256-bits";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {0}")]
    Invalid(&'static str),
}

/// Immutable startup configuration.
pub struct Config {
    pub jwt_secret: String,
    pub cors_allowed_origins: Vec<String>,
    pub addr: SocketAddr,
}

// Do not print the secret.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("addr", &self.addr)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret =
            std::env::var(JWT_SECRET_ENV).unwrap_or_else(|_| DEV_JWT_SECRET.to_string());

        let cors_allowed_origins = match std::env::var(CORS_ALLOWED_ORIGINS_ENV) {
            Ok(value) => value
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            Err(_) => DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };

        let host = std::env::var(HOST_ENV).unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = match std::env::var(PORT_ENV) {
            Ok(value) => value.parse().map_err(|_| ConfigError::Invalid(PORT_ENV))?,
            Err(_) => 8084,
        };

        let addr: SocketAddr = format!("{host}:{port}")
            .parse()
            .map_err(|_| ConfigError::Invalid(HOST_ENV))?;

        Ok(Self {
            jwt_secret,
            cors_allowed_origins,
            addr,
        })
    }

    /// Whether the development fallback secret is in effect.
    pub fn uses_dev_secret(&self) -> bool {
        self.jwt_secret == DEV_JWT_SECRET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_secret_detection() {
        let config = Config {
            jwt_secret: DEV_JWT_SECRET.to_string(),
            cors_allowed_origins: Vec::new(),
            addr: "0.0.0.0:8084".parse().unwrap(),
        };
        assert!(config.uses_dev_secret());

        let config = Config {
            jwt_secret: "a-real-secret-at-least-256-bits-long-0123456789".to_string(),
            ..config
        };
        assert!(!config.uses_dev_secret());
    }

    #[test]
    fn debug_does_not_leak_the_secret() {
        let config = Config {
            jwt_secret: "super-secret".to_string(),
            cors_allowed_origins: Vec::new(),
            addr: "0.0.0.0:8084".parse().unwrap(),
        };
        assert!(!format!("{config:?}").contains("super-secret"));
    }
}
