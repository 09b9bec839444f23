use attendance_core::clock::Clock;
use attendance_domain::mobile::mask_mobile;
use chrono::{DateTime, Duration, Utc};
use rand::RngExt;
use uuid::Uuid;

use crate::config::IssuePolicy;
use crate::domain::repository::{OtpNotifier, OtpRepository};
use crate::domain::types::{OTP_CODE_LEN, OtpRecord};
use crate::error::ApiError;

/// Uniform 6-digit code, zero-padded.
pub fn generate_code() -> String {
    let mut rng = rand::rng();
    let n: u32 = rng.random_range(0..1_000_000);
    format!("{n:0width$}", width = OTP_CODE_LEN)
}

#[derive(Debug)]
pub struct RequestOtpInput {
    pub mobile: String,
}

#[derive(Debug)]
pub struct RequestOtpOutput {
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

pub struct RequestOtpUseCase<O, N, C>
where
    O: OtpRepository,
    N: OtpNotifier,
    C: Clock,
{
    pub otps: O,
    pub notifier: N,
    pub clock: C,
    pub ttl: Duration,
    pub policy: IssuePolicy,
}

impl<O, N, C> RequestOtpUseCase<O, N, C>
where
    O: OtpRepository,
    N: OtpNotifier,
    C: Clock,
{
    pub async fn execute(&self, input: RequestOtpInput) -> Result<RequestOtpOutput, ApiError> {
        let now = self.clock.now();

        if self.policy == IssuePolicy::InvalidatePrevious {
            let superseded = self.otps.invalidate_outstanding(&input.mobile).await?;
            if superseded > 0 {
                tracing::debug!(
                    mobile = %mask_mobile(&input.mobile),
                    superseded,
                    "invalidated outstanding otps"
                );
            }
        }

        let record = OtpRecord {
            id: Uuid::now_v7(),
            mobile: input.mobile,
            code: generate_code(),
            is_used: false,
            expires_at: now + self.ttl,
            created_at: now,
        };
        self.otps.create(&record).await?;

        self.notifier
            .deliver(&record.mobile, &record.code, record.expires_at)
            .await?;

        Ok(RequestOtpOutput {
            code: record.code,
            expires_at: record.expires_at,
        })
    }
}
