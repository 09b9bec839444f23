//! Bearer tokens for guarded routes in tests.

use attendance_auth_types::token::{SESSION_TOKEN_EXP, SessionClaims, issue_session_token};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Caller identity used to mint a signed session token.
pub struct TestSession {
    pub user_id: Uuid,
    pub mobile: String,
}

impl TestSession {
    pub fn new(mobile: &str) -> Self {
        Self {
            user_id: Uuid::now_v7(),
            mobile: mobile.to_owned(),
        }
    }

    /// Token valid for the standard session lifetime starting at `issued_at`.
    pub fn token(&self, secret: &str, issued_at: DateTime<Utc>) -> String {
        let claims = SessionClaims::new(self.user_id, &self.mobile, issued_at, SESSION_TOKEN_EXP);
        issue_session_token(&claims, secret).unwrap()
    }
}
