use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Number of digits in a login code.
pub const OTP_CODE_LEN: usize = 6;

/// Stored one-time login code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpRecord {
    pub id: Uuid,
    pub mobile: String,
    pub code: String,
    pub is_used: bool,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl OtpRecord {
    /// A login may consume this record only when the code matches exactly,
    /// the record is unused, and `now` has not passed `expires_at`.
    pub fn accepts(&self, code: &str, now: DateTime<Utc>) -> bool {
        !self.is_used && now <= self.expires_at && self.code == code
    }
}

/// Account resolved (or created) by a successful OTP login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub mobile: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// New values for the caller's student profile. Absent optional fields are
/// cleared, not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub name: String,
    pub photo: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
}
