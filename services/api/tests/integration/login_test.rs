use chrono::Duration;

use attendance_api::config::IssuePolicy;
use attendance_api::domain::types::User;
use attendance_api::error::ApiError;
use attendance_api::usecase::login::{LoginOtpInput, LoginOtpOutput, LoginOtpUseCase};
use attendance_api::usecase::otp::{RequestOtpInput, RequestOtpUseCase};
use attendance_auth_types::token::{TokenError, validate_session_token};
use attendance_core::clock::Clock;
use attendance_testing::clock::FixedClock;

use crate::helpers::{MOBILE, MockOtpRepo, MockUserRepo, RecordingNotifier, TEST_JWT_SECRET};

struct Harness {
    otps: MockOtpRepo,
    users: MockUserRepo,
    clock: FixedClock,
    policy: IssuePolicy,
}

impl Harness {
    fn new(policy: IssuePolicy) -> Self {
        Self {
            otps: MockOtpRepo::new(),
            users: MockUserRepo::new(),
            clock: FixedClock::default_start(),
            policy,
        }
    }

    async fn request_otp(&self) -> String {
        RequestOtpUseCase {
            otps: self.otps.clone(),
            notifier: RecordingNotifier::new(),
            clock: self.clock.clone(),
            ttl: Duration::minutes(5),
            policy: self.policy,
        }
        .execute(RequestOtpInput {
            mobile: MOBILE.to_owned(),
        })
        .await
        .unwrap()
        .code
    }

    async fn login(&self, code: &str) -> Result<LoginOtpOutput, ApiError> {
        LoginOtpUseCase {
            otps: self.otps.clone(),
            users: self.users.clone(),
            clock: self.clock.clone(),
            jwt_secret: TEST_JWT_SECRET.to_owned(),
            session_ttl_secs: 86_400,
        }
        .execute(LoginOtpInput {
            mobile: MOBILE.to_owned(),
            code: code.to_owned(),
        })
        .await
    }
}

fn wrong_code(code: &str) -> String {
    if code == "000000" { "000001" } else { "000000" }.to_owned()
}

fn assert_invalid_otp(result: Result<LoginOtpOutput, ApiError>) {
    assert!(
        matches!(result, Err(ApiError::InvalidOtp)),
        "expected InvalidOtp, got {result:?}"
    );
}

// ── happy path ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_issue_token_for_latest_code() {
    let h = Harness::new(IssuePolicy::InvalidatePrevious);
    let code = h.request_otp().await;

    let output = h.login(&code).await.unwrap();

    assert!(!output.token.is_empty());
    let claims = validate_session_token(&output.token, TEST_JWT_SECRET, h.clock.now()).unwrap();
    assert_eq!(claims.user_id, output.user.id);
    assert_eq!(claims.mobile, MOBILE);
    assert_eq!(claims.exp, h.clock.now().timestamp() as u64 + 86_400);
}

#[tokio::test]
async fn should_create_user_once_across_logins() {
    let h = Harness::new(IssuePolicy::InvalidatePrevious);

    let first = h.login(&h.request_otp().await).await.unwrap();
    let second = h.login(&h.request_otp().await).await.unwrap();

    assert!(first.created);
    assert!(!second.created);
    assert_eq!(first.user.id, second.user.id);
    let users = h.users.rows();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].mobile, MOBILE);
    assert!(users[0].is_active);
}

#[tokio::test]
async fn should_reuse_user_created_by_concurrent_login() {
    let mut h = Harness::new(IssuePolicy::InvalidatePrevious);
    let existing = User {
        id: uuid::Uuid::now_v7(),
        mobile: MOBILE.to_owned(),
        is_active: true,
        created_at: h.clock.now(),
    };
    h.users = MockUserRepo::with_racing_insert(existing.clone());

    let output = h.login(&h.request_otp().await).await.unwrap();

    assert_eq!(output.user, existing);
    assert!(!output.created);
    assert_eq!(h.users.rows().len(), 1);
}

// ── rejections ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_wrong_code() {
    let h = Harness::new(IssuePolicy::InvalidatePrevious);
    let code = h.request_otp().await;

    assert_invalid_otp(h.login(&wrong_code(&code)).await);
    assert!(h.users.rows().is_empty());
}

#[tokio::test]
async fn should_reject_when_no_code_was_issued() {
    let h = Harness::new(IssuePolicy::InvalidatePrevious);
    assert_invalid_otp(h.login("123456").await);
}

#[tokio::test]
async fn should_accept_code_at_exact_expiry() {
    let h = Harness::new(IssuePolicy::InvalidatePrevious);
    let code = h.request_otp().await;

    h.clock.advance(Duration::minutes(5));

    assert!(h.login(&code).await.is_ok());
}

#[tokio::test]
async fn should_reject_correct_code_after_expiry() {
    let h = Harness::new(IssuePolicy::InvalidatePrevious);
    let code = h.request_otp().await;

    h.clock.advance(Duration::minutes(5) + Duration::seconds(1));

    assert_invalid_otp(h.login(&code).await);
}

#[tokio::test]
async fn should_reject_replayed_code() {
    let h = Harness::new(IssuePolicy::InvalidatePrevious);
    let code = h.request_otp().await;

    h.login(&code).await.unwrap();

    assert_invalid_otp(h.login(&code).await);
}

#[tokio::test]
async fn should_reject_code_consumed_by_concurrent_login() {
    let h = Harness::new(IssuePolicy::InvalidatePrevious);
    let code = h.request_otp().await;
    h.otps
        .steal_next_mark
        .store(true, std::sync::atomic::Ordering::SeqCst);

    assert_invalid_otp(h.login(&code).await);
    assert!(h.users.rows().is_empty());
}

#[tokio::test]
async fn should_reject_superseded_code_under_invalidate_previous() {
    let h = Harness::new(IssuePolicy::InvalidatePrevious);
    let first = h.request_otp().await;
    h.clock.advance(Duration::seconds(10));
    let second = h.request_otp().await;

    if first != second {
        assert_invalid_otp(h.login(&first).await);
    }
    assert!(h.login(&second).await.is_ok());
}

#[tokio::test]
async fn should_reject_superseded_code_under_latest_wins() {
    let h = Harness::new(IssuePolicy::LatestWins);
    let first = h.request_otp().await;
    h.clock.advance(Duration::seconds(10));
    let second = h.request_otp().await;

    if first != second {
        assert_invalid_otp(h.login(&first).await);
    }
    assert!(h.login(&second).await.is_ok());
}

#[tokio::test]
async fn should_pick_newest_code_when_issued_in_same_instant() {
    let h = Harness::new(IssuePolicy::LatestWins);
    let first = h.request_otp().await;
    let second = h.request_otp().await;

    if first != second {
        assert_invalid_otp(h.login(&first).await);
    }
    assert!(h.login(&second).await.is_ok());
}

// ── session lifetime ─────────────────────────────────────────────────────────

#[tokio::test]
async fn should_issue_token_valid_for_twenty_four_hours() {
    let h = Harness::new(IssuePolicy::InvalidatePrevious);
    let issued_at = h.clock.now();
    let token = h.login(&h.request_otp().await).await.unwrap().token;

    let almost = issued_at + Duration::hours(23) + Duration::minutes(59);
    assert!(validate_session_token(&token, TEST_JWT_SECRET, almost).is_ok());

    let past = issued_at + Duration::hours(24) + Duration::minutes(1);
    assert!(matches!(
        validate_session_token(&token, TEST_JWT_SECRET, past),
        Err(TokenError::Expired)
    ));
}

#[tokio::test]
async fn should_reject_all_zero_guess() {
    let h = Harness::new(IssuePolicy::InvalidatePrevious);
    let code = h.request_otp().await;

    if code != "000000" {
        assert_invalid_otp(h.login("000000").await);
    }
}
