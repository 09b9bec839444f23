use attendance_auth_types::session::Session;
use attendance_domain::mobile::MOBILE_LEN;
use attendance_domain::validation::{Validate, ValidationErrors};
use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::AppState;
use crate::usecase::login::{LoginOtpInput, LoginOtpUseCase};
use crate::usecase::otp::{RequestOtpInput, RequestOtpUseCase};

// ── POST /api/auth/request-otp ───────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RequestOtpBody {
    pub mobile: Option<String>,
}

impl Validate for RequestOtpBody {
    type Valid = RequestOtpInput;

    fn validate(self) -> Result<RequestOtpInput, ValidationErrors> {
        let mut errs = ValidationErrors::new();
        let Some(mobile) = errs.required("mobile", self.mobile) else {
            return Err(errs);
        };
        errs.exact_len("mobile", &mobile, MOBILE_LEN);
        errs.into_result()?;
        Ok(RequestOtpInput { mobile })
    }
}

#[derive(Debug, Serialize)]
pub struct RequestOtpResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
}

pub async fn request_otp(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<RequestOtpBody>,
) -> Result<Json<RequestOtpResponse>, ApiError> {
    let usecase = RequestOtpUseCase {
        otps: state.otp_repo(),
        notifier: state.notifier(),
        clock: state.clock.clone(),
        ttl: state.otp.ttl,
        policy: state.otp.policy,
    };
    let output = usecase.execute(input).await?;
    Ok(Json(RequestOtpResponse {
        message: "OTP generated successfully",
        otp: state.otp.expose_in_response.then_some(output.code),
    }))
}

// ── POST /api/auth/login-otp ─────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LoginOtpBody {
    pub mobile: Option<String>,
    pub otp: Option<String>,
}

impl Validate for LoginOtpBody {
    type Valid = LoginOtpInput;

    fn validate(self) -> Result<LoginOtpInput, ValidationErrors> {
        let mut errs = ValidationErrors::new();
        let mobile = errs.required("mobile", self.mobile);
        let code = errs.required("otp", self.otp);
        let (Some(mobile), Some(code)) = (mobile, code) else {
            return Err(errs);
        };
        Ok(LoginOtpInput { mobile, code })
    }
}

#[derive(Debug, Serialize)]
pub struct LoginOtpResponse {
    pub token: String,
}

pub async fn login_otp(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<LoginOtpBody>,
) -> Result<Json<LoginOtpResponse>, ApiError> {
    let usecase = LoginOtpUseCase {
        otps: state.otp_repo(),
        users: state.user_repo(),
        clock: state.clock.clone(),
        jwt_secret: state.jwt_secret.clone(),
        session_ttl_secs: state.session_ttl_secs,
    };
    let output = usecase.execute(input).await?;
    Ok(Json(LoginOtpResponse {
        token: output.token,
    }))
}

// ── GET /api/auth/me ─────────────────────────────────────────────────────────

pub async fn me(session: Session) -> Json<Session> {
    Json(session)
}
