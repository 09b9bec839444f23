use attendance_api::domain::resources::StudentRecord;
use attendance_api::domain::types::ProfileUpdate;
use attendance_api::error::ApiError;
use attendance_api::usecase::profile::{GetProfileUseCase, UpdateProfileUseCase};
use attendance_core::clock::Clock;
use attendance_testing::clock::FixedClock;
use uuid::Uuid;

use crate::helpers::MockProfileRepo;

fn student(user_id: Uuid) -> StudentRecord {
    StudentRecord {
        id: Uuid::now_v7(),
        user_id,
        name: "Asha Patil".to_owned(),
        photo: Some("https://cdn.example/asha.png".to_owned()),
        state: Some("Maharashtra".to_owned()),
        district: Some("Pune".to_owned()),
        is_active: true,
        created_at: FixedClock::default_start().now(),
    }
}

fn update(name: &str) -> ProfileUpdate {
    ProfileUpdate {
        name: name.to_owned(),
        photo: None,
        state: Some("Karnataka".to_owned()),
        district: None,
    }
}

#[tokio::test]
async fn should_return_callers_profile() {
    let user_id = Uuid::now_v7();
    let profiles = MockProfileRepo::with_student(student(user_id));

    let found = GetProfileUseCase { profiles }.execute(user_id).await.unwrap();

    assert_eq!(found.map(|s| s.user_id), Some(user_id));
}

#[tokio::test]
async fn should_return_none_for_user_without_profile() {
    let profiles = MockProfileRepo::with_student(student(Uuid::now_v7()));

    let found = GetProfileUseCase { profiles }
        .execute(Uuid::now_v7())
        .await
        .unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn should_overwrite_profile_fields() {
    let user_id = Uuid::now_v7();
    let profiles = MockProfileRepo::with_student(student(user_id));

    UpdateProfileUseCase {
        profiles: profiles.clone(),
    }
    .execute(user_id, update("Asha P."))
    .await
    .unwrap();

    let row = &profiles.rows()[0];
    assert_eq!(row.name, "Asha P.");
    assert_eq!(row.photo, None);
    assert_eq!(row.state.as_deref(), Some("Karnataka"));
    assert_eq!(row.district, None);
}

#[tokio::test]
async fn should_not_touch_other_users_profiles() {
    let owner = Uuid::now_v7();
    let profiles = MockProfileRepo::with_student(student(owner));

    let err = UpdateProfileUseCase {
        profiles: profiles.clone(),
    }
    .execute(Uuid::now_v7(), update("Intruder"))
    .await
    .unwrap_err();

    assert!(matches!(err, ApiError::NotFound("profile")), "got {err:?}");
    assert_eq!(profiles.rows()[0].name, "Asha Patil");
}
