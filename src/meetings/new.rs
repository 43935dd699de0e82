use axum::{debug_handler, extract::State, response::Redirect};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::{db, devos::DevoStrategy, session::Caller, AppResult, AppState};

use super::MeetingError;

/// Hosts a new meeting for `host_id` around a devotional chosen by
/// `devo_strategy`, returning the meeting id. Every call makes a new meeting.
pub async fn create_meeting(
    db_pool: &SqlitePool,
    devo_strategy: &DevoStrategy,
    host_id: &str,
) -> Result<String, MeetingError> {
    let devo = devo_strategy.pick(db_pool).await?;

    let meeting_id = Uuid::now_v7().to_string();
    sqlx::query("INSERT INTO meeting (id,host,devotional) VALUES (?,?,?)")
        .bind(&meeting_id)
        .bind(host_id)
        .bind(&devo.id)
        .execute(db_pool)
        .await
        .map_err(MeetingError::MeetingCreateFailed)?;

    let host = db::tolerate("host", host_id, db::find_user(db_pool, host_id).await)
        .map(|user| user.username)
        .unwrap_or_default();
    tracing::info!("{host} created meeting {meeting_id} using devo on {}", devo.verses);

    Ok(meeting_id)
}

#[debug_handler(state = AppState)]
pub(crate) async fn new_meeting(
    State(db_pool): State<SqlitePool>,
    State(devo_strategy): State<DevoStrategy>,
    Caller(user_id): Caller,
) -> AppResult<Redirect> {
    let meeting_id = create_meeting(&db_pool, &devo_strategy, &user_id).await?;

    Ok(Redirect::to(
        &format!("/m/{meeting_id}")
    ))
}
