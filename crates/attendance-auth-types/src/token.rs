//! Session token issuance and validation.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session token lifetime in seconds (24 hours).
pub const SESSION_TOKEN_EXP: u64 = 86_400;

/// Algorithms a presented token may be signed with. Anything outside the HMAC
/// family is rejected before the signature is looked at.
pub const ALLOWED_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// JWT claims payload.
///
/// | Field | JWT claim | Meaning |
/// |-------|-----------|---------|
/// | `user_id` | `userId` | user UUID |
/// | `mobile` | `mobile` | mobile number the OTP was sent to |
/// | `exp` | `exp` | seconds since UNIX epoch |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    pub user_id: Uuid,
    pub mobile: String,
    pub exp: u64,
}

impl SessionClaims {
    /// Claims for a session starting at `now` and lasting `ttl_secs`.
    pub fn new(user_id: Uuid, mobile: impl Into<String>, now: DateTime<Utc>, ttl_secs: u64) -> Self {
        Self {
            user_id,
            mobile: mobile.into(),
            exp: unix_secs(now).saturating_add(ttl_secs),
        }
    }
}

/// Errors returned by [`issue_session_token`] and [`validate_session_token`].
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("algorithm not allowed")]
    DisallowedAlgorithm,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    #[error("failed to sign token")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

fn unix_secs(at: DateTime<Utc>) -> u64 {
    u64::try_from(at.timestamp()).unwrap_or(0)
}

/// Sign `claims` with HS256.
pub fn issue_session_token(claims: &SessionClaims, secret: &str) -> Result<String, TokenError> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(TokenError::Signing)
}

/// Verify signature and algorithm, then check `exp` against `now`.
///
/// Expiry is checked here instead of inside `jsonwebtoken` so the caller's
/// clock decides, with zero leeway: a token is valid while `now <= exp`.
pub fn validate_session_token(
    token: &str,
    secret: &str,
    now: DateTime<Utc>,
) -> Result<SessionClaims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.algorithms = ALLOWED_ALGORITHMS.to_vec();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp"]);

    let data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        jsonwebtoken::errors::ErrorKind::InvalidAlgorithm => TokenError::DisallowedAlgorithm,
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Malformed,
    })?;

    if unix_secs(now) > data.claims.exp {
        return Err(TokenError::Expired);
    }
    Ok(data.claims)
}
