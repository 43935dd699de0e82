use axum::{http::StatusCode, response::{IntoResponse, Response}};

use crate::{meetings::MeetingError, res};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(MeetingError::MeetingNotFound(meeting_id)) = self.0.downcast_ref::<MeetingError>() {
            tracing::info!(%meeting_id, "no such meeting");
            return res::sorry("meeting");
        }

        tracing::error!("{}\n\n{}", self.0, self.0.backtrace());
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            self.0.to_string(),
        )
            .into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
