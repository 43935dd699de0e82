use sqlx::{sqlite::SqlitePoolOptions, FromRow, SqlitePool};

use crate::include_res;

#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow)]
pub struct Devotional {
    pub id: String,
    pub video: String,
    pub verses: String,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Meeting {
    pub id: String,
    pub host: String,
    pub devotional: String,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: String,
    pub username: String,
}

// usermeeting rows are only ever written; questions are read as bare text.
//
// unique: usermeeting (meeting, participant)

pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<SqlitePool> {
    // no recycling: an in-memory database lives only as long as its connection
    let db_pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(database_url)
        .await?;

    sqlx::raw_sql(include_res!(str, "/schema.sql"))
        .execute(&db_pool)
        .await?;

    Ok(db_pool)
}

pub async fn find_user(db_pool: &SqlitePool, user_id: &str) -> sqlx::Result<Option<User>> {
    sqlx::query_as("SELECT id,username FROM users WHERE id=?")
        .bind(user_id)
        .fetch_optional(db_pool)
        .await
}

/// Collapses a lookup that is allowed to come up empty. A missing row or a
/// store error is logged as a warning and reads as `None`.
pub fn tolerate<T>(what: &str, id: &str, found: sqlx::Result<Option<T>>) -> Option<T> {
    match found {
        Ok(Some(x)) => Some(x),
        Ok(None) => {
            tracing::warn!(id, "{what} is missing");
            None
        }
        Err(err) => {
            tracing::warn!(id, error = %err, "couldn't look up {what}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn schema_applies_twice() {
        let db_pool = connect("sqlite::memory:", 1).await.unwrap();
        sqlx::raw_sql(include_res!(str, "/schema.sql"))
            .execute(&db_pool)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn finds_users_by_id() {
        let db_pool = connect("sqlite::memory:", 1).await.unwrap();
        sqlx::query("INSERT INTO users (id,username) VALUES ('u1','host1')")
            .execute(&db_pool)
            .await
            .unwrap();

        let user = find_user(&db_pool, "u1").await.unwrap().unwrap();
        assert_eq!(user.username, "host1");
        assert!(find_user(&db_pool, "nope").await.unwrap().is_none());
    }

    #[test]
    fn tolerate_swallows_missing_and_failed_lookups() {
        assert_eq!(tolerate("user", "u1", Ok(Some(1))), Some(1));
        assert_eq!(tolerate::<i32>("user", "u1", Ok(None)), None);
        assert_eq!(tolerate::<i32>("user", "u1", Err(sqlx::Error::RowNotFound)), None);
    }
}
