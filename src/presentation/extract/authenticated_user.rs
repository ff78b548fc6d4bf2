use axum::Json;
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use uuid::Uuid;

use crate::domain::UserId;
use crate::presentation::handlers::ErrorResponse;

pub const USER_ID_HEADER: &str = "x-user-id";

/// Caller identity, injected by the upstream gateway as an `x-user-id`
/// header after token verification. Token issuance and OTP flows live
/// outside this service.
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser(pub UserId);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| unauthorized("No authentication found. Please login."))?;

        let user_id = header
            .parse::<Uuid>()
            .map_err(|_| unauthorized("Invalid authentication. Please login again."))?;

        Ok(AuthenticatedUser(UserId::from_uuid(user_id)))
    }
}

fn unauthorized(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}
