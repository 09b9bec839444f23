//! Bearer-token session guard.

use std::sync::Arc;

use attendance_core::clock::Clock;
use attendance_core::envelope::error_response;
use axum::extract::{FromRequestParts, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, HeaderMapExt};
use http::request::Parts;
use http::{HeaderMap, StatusCode};
use serde::Serialize;
use uuid::Uuid;

use crate::token::{SessionClaims, validate_session_token};

/// Authenticated caller, inserted into request extensions by [`require_session`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: Uuid,
    pub mobile: String,
    pub exp: u64,
}

impl From<SessionClaims> for Session {
    fn from(claims: SessionClaims) -> Self {
        Self {
            user_id: claims.user_id,
            mobile: claims.mobile,
            exp: claims.exp,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionRejection {
    #[error("missing token")]
    MissingToken,
    #[error("invalid token")]
    InvalidToken,
}

impl IntoResponse for SessionRejection {
    fn into_response(self) -> Response {
        error_response(StatusCode::UNAUTHORIZED, &self.to_string())
    }
}

/// Verifies bearer tokens against the signing secret and the injected clock.
#[derive(Clone)]
pub struct SessionVerifier {
    secret: Arc<str>,
    clock: Arc<dyn Clock>,
}

impl SessionVerifier {
    pub fn new(secret: impl Into<Arc<str>>, clock: Arc<dyn Clock>) -> Self {
        Self {
            secret: secret.into(),
            clock,
        }
    }

    pub fn verify(&self, headers: &HeaderMap) -> Result<Session, SessionRejection> {
        let blank = headers
            .get(http::header::AUTHORIZATION)
            .is_none_or(|v| v.as_bytes().trim_ascii().is_empty());
        if blank {
            return Err(SessionRejection::MissingToken);
        }
        let bearer = match headers.typed_try_get::<Authorization<Bearer>>() {
            Ok(Some(Authorization(bearer))) => bearer,
            _ => return Err(SessionRejection::InvalidToken),
        };
        validate_session_token(bearer.token(), &self.secret, self.clock.now())
            .map(Session::from)
            .map_err(|e| {
                tracing::debug!(error = %e, "session token rejected");
                SessionRejection::InvalidToken
            })
    }
}

/// Middleware for `axum::middleware::from_fn_with_state`.
pub async fn require_session(
    State(verifier): State<SessionVerifier>,
    mut request: Request,
    next: Next,
) -> Result<Response, SessionRejection> {
    let session = verifier.verify(request.headers())?;
    request.extensions_mut().insert(session);
    Ok(next.run(request).await)
}

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = SessionRejection;

    // Resolve synchronously and hand back a 'static future; an `async fn` here
    // would capture the `parts` lifetime.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let session = parts.extensions.get::<Session>().cloned();
        async move { session.ok_or(SessionRejection::MissingToken) }
    }
}
