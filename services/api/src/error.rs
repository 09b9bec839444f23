use attendance_core::envelope::error_response;
use attendance_domain::validation::ValidationErrors;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API error variants. Handler, body-extractor and timeout failures end up
/// here and render as the `{"status": "Error", "error": ...}` envelope.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("empty body")]
    EmptyBody,
    #[error("malformed body: {0}")]
    MalformedBody(String),
    #[error("{0}")]
    Validation(ValidationErrors),
    #[error("invalid query: {0}")]
    InvalidQuery(String),
    #[error("invalid id")]
    InvalidId,
    #[error("invalid or expired OTP")]
    InvalidOtp,
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("record already exists")]
    Conflict,
    #[error("referenced record does not exist")]
    DanglingReference,
    #[error("request timed out")]
    Timeout,
    #[error("storage error")]
    Storage(#[from] anyhow::Error),
    #[error("internal error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyBody => "EMPTY_BODY",
            Self::MalformedBody(_) => "MALFORMED_BODY",
            Self::Validation(_) => "VALIDATION",
            Self::InvalidQuery(_) => "INVALID_QUERY",
            Self::InvalidId => "INVALID_ID",
            Self::InvalidOtp => "INVALID_OTP",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict => "CONFLICT",
            Self::DanglingReference => "DANGLING_REFERENCE",
            Self::Timeout => "TIMEOUT",
            Self::Storage(_) => "STORAGE",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::EmptyBody
            | Self::MalformedBody(_)
            | Self::Validation(_)
            | Self::InvalidQuery(_)
            | Self::InvalidId
            | Self::DanglingReference => StatusCode::BAD_REQUEST,
            Self::InvalidOtp => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errs: ValidationErrors) -> Self {
        Self::Validation(errs)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // 4xx are client errors and already visible in the access log. 500s
        // carry an anyhow chain that must reach the logs; the client only sees
        // the generic message.
        match &self {
            Self::Storage(e) | Self::Internal(e) => {
                tracing::error!(error = %format!("{e:#}"), kind = self.kind(), "request failed");
            }
            Self::Timeout => tracing::warn!(kind = self.kind(), "request timed out"),
            _ => {}
        }
        error_response(self.status(), &self.to_string())
    }
}
