mod error;
mod join;
mod new;

use axum::{routing::{get, put}, Router};

use crate::AppState;

pub use error::MeetingError;
pub use join::{join_meeting, DevoResponse, MeetingResponse};
pub use new::create_meeting;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/m", put(new::new_meeting))
        .route("/m/{id}", get(join::join))
}
