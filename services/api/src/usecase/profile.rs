use uuid::Uuid;

use crate::domain::repository::ProfileRepository;
use crate::domain::resources::StudentRecord;
use crate::domain::types::ProfileUpdate;
use crate::error::ApiError;

pub struct GetProfileUseCase<P: ProfileRepository> {
    pub profiles: P,
}

impl<P: ProfileRepository> GetProfileUseCase<P> {
    /// `None` when the account has no student profile yet.
    pub async fn execute(&self, user_id: Uuid) -> Result<Option<StudentRecord>, ApiError> {
        self.profiles.find_by_user(user_id).await
    }
}

pub struct UpdateProfileUseCase<P: ProfileRepository> {
    pub profiles: P,
}

impl<P: ProfileRepository> UpdateProfileUseCase<P> {
    pub async fn execute(&self, user_id: Uuid, update: ProfileUpdate) -> Result<(), ApiError> {
        if !self.profiles.update(user_id, &update).await? {
            return Err(ApiError::NotFound("profile"));
        }
        tracing::debug!(%user_id, "profile updated");
        Ok(())
    }
}
