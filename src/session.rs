use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use tower_sessions::{cookie::SameSite, Expiry, MemoryStore, Session, SessionManagerLayer};

use crate::AppError;

/// Session key holding the signed-in user's id. Whoever issues sessions
/// writes it; this service only reads it.
pub const USER_ID: &str = "user_id";

pub fn layer(expiry_minutes: i64) -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(expiry_minutes)))
}

/// The authenticated user making the request.
///
/// Rejects with 401 when the session carries no user id, so handlers taking
/// a `Caller` never run for anonymous requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller(pub String);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        match session.get::<String>(USER_ID).await {
            Ok(Some(user_id)) => Ok(Caller(user_id)),
            Ok(None) => {
                tracing::debug!(path = %parts.uri.path(), "request without a signed-in user");
                Err((StatusCode::UNAUTHORIZED, "Sign in first.").into_response())
            }
            Err(err) => Err(AppError::from(err).into_response()),
        }
    }
}
