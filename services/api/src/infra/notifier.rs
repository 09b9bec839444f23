use attendance_domain::mobile::mask_mobile;
use chrono::{DateTime, Utc};

use crate::domain::repository::OtpNotifier;
use crate::error::ApiError;

/// Stand-in for the SMS gateway: records the delivery in the log. The code
/// itself is only emitted at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogOtpNotifier;

impl OtpNotifier for LogOtpNotifier {
    async fn deliver(
        &self,
        mobile: &str,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), ApiError> {
        tracing::info!(mobile = %mask_mobile(mobile), %expires_at, "otp issued");
        tracing::debug!(mobile = %mask_mobile(mobile), code, "otp delivery (log only)");
        Ok(())
    }
}
