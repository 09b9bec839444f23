use std::time::Duration;

use attendance_core::config::Config;
use serde::Deserialize;

/// What happens to a mobile's older unused codes when a new one is issued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IssuePolicy {
    /// Older unused codes are marked used before the new one is stored.
    #[default]
    InvalidatePrevious,
    /// Older codes stay stored but are never selected again, since login only
    /// looks at the newest record.
    LatestWins,
}

/// API service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// HMAC secret for signing session tokens.
    pub jwt_secret: String,
    /// TCP port to listen on. Env var: `API_PORT`.
    #[serde(default = "default_port")]
    pub api_port: u16,
    #[serde(default = "default_otp_ttl_secs")]
    pub otp_ttl_secs: u64,
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,
    #[serde(default)]
    pub otp_issue_policy: IssuePolicy,
    /// Echo the generated code in the request-otp response. Development only.
    #[serde(default)]
    pub expose_otp_in_response: bool,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_shutdown_timeout_secs")]
    pub shutdown_timeout_secs: u64,
    /// Apply pending migrations on startup.
    #[serde(default = "default_true")]
    pub run_migrations: bool,
}

impl Config for ApiConfig {}

/// Upper bounds for the duration settings.
pub const MAX_OTP_TTL_SECS: u64 = 86_400;
pub const MAX_SESSION_TTL_SECS: u64 = 365 * 86_400;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 3_600;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{var} must be between {min} and {max}, got {value}")]
pub struct OutOfRange {
    pub var: &'static str,
    pub min: u64,
    pub max: u64,
    pub value: u64,
}

fn within(var: &'static str, value: u64, min: u64, max: u64) -> Result<(), OutOfRange> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(OutOfRange {
            var,
            min,
            max,
            value,
        })
    }
}

impl ApiConfig {
    /// Reject duration settings outside their supported range. Negative values
    /// already fail to deserialize.
    pub fn check_ranges(&self) -> Result<(), OutOfRange> {
        within("OTP_TTL_SECS", self.otp_ttl_secs, 1, MAX_OTP_TTL_SECS)?;
        within("SESSION_TTL_SECS", self.session_ttl_secs, 1, MAX_SESSION_TTL_SECS)?;
        within(
            "REQUEST_TIMEOUT_SECS",
            self.request_timeout_secs,
            1,
            MAX_REQUEST_TIMEOUT_SECS,
        )?;
        Ok(())
    }

    pub fn otp_ttl(&self) -> chrono::Duration {
        let secs = self.otp_ttl_secs.min(MAX_OTP_TTL_SECS);
        chrono::Duration::seconds(i64::try_from(secs).unwrap_or(0))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

fn default_port() -> u16 {
    3000
}

fn default_otp_ttl_secs() -> u64 {
    300
}

fn default_session_ttl_secs() -> u64 {
    86_400
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_shutdown_timeout_secs() -> u64 {
    5
}

fn default_true() -> bool {
    true
}
