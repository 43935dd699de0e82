use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeetingError {
    /// Nothing for the selection strategy to choose from.
    #[error("no devotional available for a new meeting")]
    NoDevotionalAvailable,

    #[error("couldn't look up devotionals: {0}")]
    DevotionalLookupFailed(#[source] sqlx::Error),

    #[error("couldn't create meeting: {0}")]
    MeetingCreateFailed(#[source] sqlx::Error),

    #[error("no meeting with id {0}")]
    MeetingNotFound(String),

    #[error("couldn't record join: {0}")]
    JoinRecordFailed(#[source] sqlx::Error),
}
