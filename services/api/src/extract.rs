use attendance_domain::validation::Validate;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON request body, decoded and validated.
///
/// Rejects an empty (or whitespace-only) body with [`ApiError::EmptyBody`],
/// undecodable JSON with [`ApiError::MalformedBody`] and failed field checks
/// with [`ApiError::Validation`]. Handlers receive the checked `T::Valid`.
/// The `Content-Type` header is not inspected.
pub struct JsonBody<T: Validate>(pub T::Valid);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::MalformedBody(e.body_text()))?;
        decode::<T>(&bytes).map(JsonBody)
    }
}

fn decode<T>(bytes: &[u8]) -> Result<T::Valid, ApiError>
where
    T: DeserializeOwned + Validate,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::EmptyBody);
    }
    let raw: T = serde_json::from_slice(bytes).map_err(|e| ApiError::MalformedBody(e.to_string()))?;
    Ok(raw.validate()?)
}
