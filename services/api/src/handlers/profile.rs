//! The caller's own student profile, keyed by the session's user id.

use attendance_auth_types::session::Session;
use attendance_domain::validation::{Validate, ValidationErrors};
use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::domain::resources::StudentRecord;
use crate::domain::types::ProfileUpdate;
use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;
use crate::usecase::profile::{GetProfileUseCase, UpdateProfileUseCase};

// ── GET /api/profile ─────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub student: Option<StudentRecord>,
}

pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<Json<ProfileResponse>, ApiError> {
    let usecase = GetProfileUseCase {
        profiles: state.profile_repo(),
    };
    let student = usecase.execute(session.user_id).await?;
    if student.is_none() {
        tracing::info!(user_id = %session.user_id, "no student profile for user");
    }
    Ok(Json(ProfileResponse { student }))
}

// ── PUT /api/profile ─────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct UpdateProfileBody {
    pub name: Option<String>,
    pub photo: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
}

impl Validate for UpdateProfileBody {
    type Valid = ProfileUpdate;

    fn validate(self) -> Result<ProfileUpdate, ValidationErrors> {
        let mut errs = ValidationErrors::new();
        let name = errs.required("name", self.name);
        let photo = errs.optional("photo", self.photo);
        let state = errs.optional("state", self.state);
        let district = errs.optional("district", self.district);
        let Some(name) = name else {
            return Err(errs);
        };
        errs.into_result()?;
        Ok(ProfileUpdate {
            name,
            photo,
            state,
            district,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileUpdatedResponse {
    pub status: &'static str,
}

pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    JsonBody(update): JsonBody<UpdateProfileBody>,
) -> Result<Json<ProfileUpdatedResponse>, ApiError> {
    let usecase = UpdateProfileUseCase {
        profiles: state.profile_repo(),
    };
    usecase.execute(session.user_id, update).await?;
    Ok(Json(ProfileUpdatedResponse {
        status: "profile updated",
    }))
}
