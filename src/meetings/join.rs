use axum::{debug_handler, extract::{Path, State}, Json};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{db, devos, session::Caller, AppResult, AppState};

use super::MeetingError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingResponse {
    pub meeting_id: String,
    pub host: String,
    pub devotional: DevoResponse,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevoResponse {
    pub video: String,
    pub verses: String,
    pub questions: Vec<String>,
}

/// Adds `participant_id` to the meeting and returns what they need to take
/// part: the host's name and the devotional with its questions.
///
/// Only a missing meeting or a failed join write fail the call. A host,
/// devotional or question set that can't be found is logged and left empty.
pub async fn join_meeting(
    db_pool: &SqlitePool,
    participant_id: &str,
    meeting_id: &str,
) -> Result<MeetingResponse, MeetingError> {
    let meeting: db::Meeting = match sqlx::query_as("SELECT id,host,devotional FROM meeting WHERE id=?")
        .bind(meeting_id)
        .fetch_optional(db_pool)
        .await
    {
        Ok(Some(meeting)) => meeting,
        Ok(None) => return Err(MeetingError::MeetingNotFound(meeting_id.to_owned())),
        Err(err) => {
            tracing::error!(meeting_id, error = %err, "meeting lookup failed");
            return Err(MeetingError::MeetingNotFound(meeting_id.to_owned()));
        }
    };

    record_join(db_pool, &meeting.id, participant_id).await?;

    let host = db::tolerate("host", &meeting.host, db::find_user(db_pool, &meeting.host).await)
        .map(|user| user.username)
        .unwrap_or_default();

    let devo = db::tolerate(
        "devotional",
        &meeting.devotional,
        devos::find(db_pool, &meeting.devotional).await,
    )
    .unwrap_or_default();

    let questions = devos::questions(db_pool, &meeting.devotional)
        .await
        .unwrap_or_else(|err| {
            tracing::warn!(devo_id = %meeting.devotional, error = %err, "couldn't look up questions");
            Vec::new()
        });

    Ok(MeetingResponse {
        meeting_id: meeting.id,
        host,
        devotional: DevoResponse {
            video: devo.video,
            verses: devo.verses,
            questions,
        },
    })
}

// (meeting, participant) is unique; joining again leaves the existing row.
async fn record_join(db_pool: &SqlitePool, meeting_id: &str, participant_id: &str) -> Result<(), MeetingError> {
    let result = sqlx::query(
        "INSERT INTO usermeeting (id,meeting,participant) VALUES (?,?,?)
         ON CONFLICT (meeting,participant) DO NOTHING",
    )
    .bind(Uuid::now_v7().to_string())
    .bind(meeting_id)
    .bind(participant_id)
    .execute(db_pool)
    .await
    .map_err(MeetingError::JoinRecordFailed)?;

    if result.rows_affected() == 0 {
        tracing::debug!(meeting_id, participant_id, "already joined");
    } else {
        tracing::info!(meeting_id, participant_id, "joined meeting");
    }
    Ok(())
}

#[debug_handler(state = AppState)]
pub(crate) async fn join(
    State(db_pool): State<SqlitePool>,
    Caller(user_id): Caller,
    Path(meeting_id): Path<String>,
) -> AppResult<Json<MeetingResponse>> {
    Ok(Json(join_meeting(&db_pool, &user_id, &meeting_id).await?))
}
