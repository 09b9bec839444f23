use attendance_auth_types::token::{SessionClaims, issue_session_token};
use attendance_core::clock::Clock;
use attendance_domain::mobile::mask_mobile;
use uuid::Uuid;

use crate::domain::repository::{OtpRepository, UserRepository};
use crate::domain::types::User;
use crate::error::ApiError;

#[derive(Debug)]
pub struct LoginOtpInput {
    pub mobile: String,
    pub code: String,
}

#[derive(Debug)]
pub struct LoginOtpOutput {
    pub token: String,
    pub user: User,
    pub created: bool,
}

pub struct LoginOtpUseCase<O, U, C>
where
    O: OtpRepository,
    U: UserRepository,
    C: Clock,
{
    pub otps: O,
    pub users: U,
    pub clock: C,
    pub jwt_secret: String,
    pub session_ttl_secs: u64,
}

impl<O, U, C> LoginOtpUseCase<O, U, C>
where
    O: OtpRepository,
    U: UserRepository,
    C: Clock,
{
    pub async fn execute(&self, input: LoginOtpInput) -> Result<LoginOtpOutput, ApiError> {
        let now = self.clock.now();

        // Only the newest code counts; a miss, a mismatch, expiry and reuse all
        // look the same to the caller.
        let otp = self
            .otps
            .find_latest_by_mobile(&input.mobile)
            .await?
            .ok_or(ApiError::InvalidOtp)?;
        if !otp.accepts(&input.code, now) {
            tracing::debug!(mobile = %mask_mobile(&input.mobile), "otp rejected");
            return Err(ApiError::InvalidOtp);
        }
        if !self.otps.mark_used(otp.id).await? {
            tracing::debug!(mobile = %mask_mobile(&input.mobile), "otp consumed concurrently");
            return Err(ApiError::InvalidOtp);
        }

        let (user, created) = self.resolve_user(&input.mobile, now).await?;

        let claims = SessionClaims::new(user.id, &user.mobile, now, self.session_ttl_secs);
        let token = issue_session_token(&claims, &self.jwt_secret)
            .map_err(|e| ApiError::Internal(anyhow::Error::new(e).context("sign session token")))?;

        tracing::info!(user_id = %user.id, created, "otp login succeeded");
        Ok(LoginOtpOutput {
            token,
            user,
            created,
        })
    }

    async fn resolve_user(
        &self,
        mobile: &str,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<(User, bool), ApiError> {
        if let Some(user) = self.users.find_by_mobile(mobile).await? {
            return Ok((user, false));
        }
        let user = User {
            id: Uuid::now_v7(),
            mobile: mobile.to_owned(),
            is_active: true,
            created_at: now,
        };
        match self.users.create(&user).await {
            Ok(()) => Ok((user, true)),
            // Lost a race with another first login for the same mobile.
            Err(ApiError::Conflict) => {
                let existing = self.users.find_by_mobile(mobile).await?.ok_or_else(|| {
                    ApiError::Storage(anyhow::anyhow!("user vanished after unique violation"))
                })?;
                Ok((existing, false))
            }
            Err(e) => Err(e),
        }
    }
}
