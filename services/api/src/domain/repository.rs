#![allow(async_fn_in_trait)]

use attendance_domain::pagination::PageRequest;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::resources::{Resource, StudentRecord};
use crate::domain::types::{OtpRecord, ProfileUpdate, User};
use crate::error::ApiError;

/// Repository for one-time login codes.
pub trait OtpRepository: Send + Sync {
    async fn create(&self, otp: &OtpRecord) -> Result<(), ApiError>;

    /// Newest record for `mobile` by `created_at DESC, id DESC`, used or not.
    async fn find_latest_by_mobile(&self, mobile: &str) -> Result<Option<OtpRecord>, ApiError>;

    /// Flip `is_used` to true only if it is still false. Returns `false` when
    /// another request got there first.
    async fn mark_used(&self, id: Uuid) -> Result<bool, ApiError>;

    /// Mark every unused code for `mobile` as used. Returns how many changed.
    async fn invalidate_outstanding(&self, mobile: &str) -> Result<u64, ApiError>;
}

/// Repository for user accounts keyed by mobile number.
pub trait UserRepository: Send + Sync {
    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<User>, ApiError>;

    async fn create(&self, user: &User) -> Result<(), ApiError>;
}

/// The student profile attached to a user account.
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<StudentRecord>, ApiError>;

    /// Returns `false` when the user has no student profile to update.
    async fn update(&self, user_id: Uuid, update: &ProfileUpdate) -> Result<bool, ApiError>;
}

/// Out-of-band delivery of a freshly issued code (SMS in production).
pub trait OtpNotifier: Send + Sync {
    async fn deliver(
        &self,
        mobile: &str,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), ApiError>;
}

/// Create / get / list storage for one CRUD resource.
/// Returned futures are `Send`: the handlers are generic over `R`.
pub trait ResourceRepository<R: Resource>: Send + Sync {
    /// Insert a validated draft stamped `created_at = now` and return the new id.
    fn create(
        &self,
        new: R::New,
        now: DateTime<Utc>,
    ) -> impl Future<Output = Result<Uuid, ApiError>> + Send;

    fn find_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<R::Record>, ApiError>> + Send;

    /// One page, newest first.
    fn list(
        &self,
        page: PageRequest,
    ) -> impl Future<Output = Result<Vec<R::Record>, ApiError>> + Send;
}
