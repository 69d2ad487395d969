// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Recommendations Platform

//! JWT verification against the shared signing secret.

use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};

use super::{claims::Claims, error::AuthError};

/// Clock skew tolerance (60 seconds).
const CLOCK_SKEW_LEEWAY: u64 = 60;

/// HS256 token verifier.
///
/// Pure function of the token, the configured secret and the current time:
/// no I/O, no shared mutable state, safe for concurrent use.
///
/// Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct TokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenValidator")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenValidator {
    /// Build a validator from the shared-secret string.
    ///
    /// The verification key is the UTF-8 byte encoding of the secret. The
    /// algorithm is pinned to HS256: a token whose header declares a different
    /// algorithm family fails verification.
    pub fn new(secret: &str) -> Self {
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp"]);
        validation.validate_aud = false;
        validation.leeway = CLOCK_SKEW_LEEWAY;

        Self {
            decoding_key,
            validation,
        }
    }

    /// Verify a token and return its claims mapping.
    ///
    /// Expects the raw token text, `Bearer ` prefix already stripped. Every
    /// structural, signature or expiry failure collapses to
    /// [`AuthError::InvalidToken`]; no partial claims are surfaced.
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AuthError::invalid_token(failure_reason(e.kind())))?;

        Ok(data.claims)
    }
}

/// Collapse a jsonwebtoken error into the short reason used for logging.
fn failure_reason(kind: &ErrorKind) -> &'static str {
    match kind {
        ErrorKind::ExpiredSignature => "token expired",
        ErrorKind::InvalidSignature => "signature mismatch",
        ErrorKind::InvalidAlgorithm => "algorithm mismatch",
        ErrorKind::ImmatureSignature => "token not yet valid",
        ErrorKind::MissingRequiredClaim(_) => "missing required claim",
        _ => "malformed token",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "test-secret-used-only-in-unit-tests-0123456789";

    fn sign(claims: &serde_json::Value, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn future_exp() -> i64 {
        chrono::Utc::now().timestamp() + 3600
    }

    #[test]
    fn valid_token_returns_full_claims() {
        let token = sign(
            &serde_json::json!({"sub": "user-7", "exp": future_exp(), "plan": "premium"}),
            SECRET,
        );

        let claims = TokenValidator::new(SECRET).validate(&token).unwrap();
        assert_eq!(claims.subject(), Some("user-7"));
        assert_eq!(claims.get("plan").and_then(|v| v.as_str()), Some("premium"));
        assert!(claims.expires_at().unwrap() > chrono::Utc::now().timestamp());
    }

    #[test]
    fn wrong_key_is_rejected() {
        let token = sign(&serde_json::json!({"sub": "user-7", "exp": future_exp()}), "another-secret");

        let err = TokenValidator::new(SECRET).validate(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken { reason: "signature mismatch" }));
    }

    #[test]
    fn expired_token_is_rejected() {
        // Well past the clock-skew leeway.
        let exp = chrono::Utc::now().timestamp() - 3600;
        let token = sign(&serde_json::json!({"sub": "user-7", "exp": exp}), SECRET);

        let err = TokenValidator::new(SECRET).validate(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken { reason: "token expired" }));
    }

    #[test]
    fn declared_algorithm_must_match_the_expected_family() {
        let token = encode(
            &Header::new(Algorithm::HS384),
            &serde_json::json!({"sub": "user-7", "exp": future_exp()}),
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let err = TokenValidator::new(SECRET).validate(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken { reason: "algorithm mismatch" }));
    }

    #[test]
    fn token_without_exp_is_rejected() {
        let token = sign(&serde_json::json!({"sub": "user-7"}), SECRET);

        let err = TokenValidator::new(SECRET).validate(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken { .. }));
    }

    #[test]
    fn garbage_input_is_rejected() {
        let err = TokenValidator::new(SECRET)
            .validate("not-a-jwt-at-all")
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken { reason: "malformed token" }));
    }
}
