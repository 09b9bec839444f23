use chrono::Duration;

use attendance_api::config::IssuePolicy;
use attendance_api::error::ApiError;
use attendance_api::usecase::otp::{RequestOtpInput, RequestOtpUseCase};
use attendance_testing::clock::FixedClock;

use crate::helpers::{MOBILE, MockOtpRepo, RecordingNotifier};

fn usecase(
    otps: &MockOtpRepo,
    notifier: &RecordingNotifier,
    clock: &FixedClock,
    policy: IssuePolicy,
) -> RequestOtpUseCase<MockOtpRepo, RecordingNotifier, FixedClock> {
    RequestOtpUseCase {
        otps: otps.clone(),
        notifier: notifier.clone(),
        clock: clock.clone(),
        ttl: Duration::minutes(5),
        policy,
    }
}

fn input() -> RequestOtpInput {
    RequestOtpInput {
        mobile: MOBILE.to_owned(),
    }
}

#[tokio::test]
async fn should_issue_six_digit_code_expiring_five_minutes_after_issue() {
    let otps = MockOtpRepo::new();
    let notifier = RecordingNotifier::new();
    let clock = FixedClock::default_start();
    let issued_at = attendance_core::clock::Clock::now(&clock);

    let output = usecase(&otps, &notifier, &clock, IssuePolicy::InvalidatePrevious)
        .execute(input())
        .await
        .unwrap();

    assert_eq!(output.code.len(), 6);
    assert!(output.code.bytes().all(|b| b.is_ascii_digit()));
    assert_eq!(output.expires_at, issued_at + Duration::minutes(5));

    let rows = otps.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].mobile, MOBILE);
    assert_eq!(rows[0].code, output.code);
    assert!(!rows[0].is_used);
    assert_eq!(rows[0].created_at, issued_at);
}

#[tokio::test]
async fn should_hand_code_to_notifier() {
    let otps = MockOtpRepo::new();
    let notifier = RecordingNotifier::new();
    let clock = FixedClock::default_start();

    let output = usecase(&otps, &notifier, &clock, IssuePolicy::InvalidatePrevious)
        .execute(input())
        .await
        .unwrap();

    let sent = notifier.deliveries();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].mobile, MOBILE);
    assert_eq!(sent[0].code, output.code);
    assert_eq!(sent[0].expires_at, output.expires_at);
}

#[tokio::test]
async fn should_mark_older_codes_used_under_invalidate_previous() {
    let otps = MockOtpRepo::new();
    let notifier = RecordingNotifier::new();
    let clock = FixedClock::default_start();
    let uc = usecase(&otps, &notifier, &clock, IssuePolicy::InvalidatePrevious);

    uc.execute(input()).await.unwrap();
    clock.advance(Duration::seconds(30));
    uc.execute(input()).await.unwrap();

    let rows = otps.rows();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].is_used, "first code should be superseded");
    assert!(!rows[1].is_used);
}

#[tokio::test]
async fn should_leave_older_codes_untouched_under_latest_wins() {
    let otps = MockOtpRepo::new();
    let notifier = RecordingNotifier::new();
    let clock = FixedClock::default_start();
    let uc = usecase(&otps, &notifier, &clock, IssuePolicy::LatestWins);

    uc.execute(input()).await.unwrap();
    uc.execute(input()).await.unwrap();

    let rows = otps.rows();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| !r.is_used));
}

#[tokio::test]
async fn should_not_touch_other_mobiles() {
    let otps = MockOtpRepo::new();
    let notifier = RecordingNotifier::new();
    let clock = FixedClock::default_start();
    let uc = usecase(&otps, &notifier, &clock, IssuePolicy::InvalidatePrevious);

    uc.execute(RequestOtpInput {
        mobile: "9000000001".to_owned(),
    })
    .await
    .unwrap();
    uc.execute(input()).await.unwrap();

    assert!(otps.rows().iter().all(|r| !r.is_used));
}

#[tokio::test]
async fn should_return_storage_error_when_store_fails() {
    let otps = MockOtpRepo::failing();
    let notifier = RecordingNotifier::new();
    let clock = FixedClock::default_start();

    let result = usecase(&otps, &notifier, &clock, IssuePolicy::LatestWins)
        .execute(input())
        .await;

    assert!(
        matches!(result, Err(ApiError::Storage(_))),
        "expected Storage, got {result:?}"
    );
    assert!(notifier.deliveries().is_empty());
}

#[tokio::test]
async fn should_return_internal_error_when_delivery_fails() {
    let otps = MockOtpRepo::new();
    let notifier = RecordingNotifier::failing();
    let clock = FixedClock::default_start();

    let result = usecase(&otps, &notifier, &clock, IssuePolicy::InvalidatePrevious)
        .execute(input())
        .await;

    assert!(
        matches!(result, Err(ApiError::Internal(_))),
        "expected Internal, got {result:?}"
    );
}
