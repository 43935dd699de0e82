mod strategy;

use sqlx::SqlitePool;

use crate::db::Devotional;

pub use strategy::DevoStrategy;

pub async fn find(db_pool: &SqlitePool, devo_id: &str) -> sqlx::Result<Option<Devotional>> {
    sqlx::query_as("SELECT id,video,verses FROM devos WHERE id=?")
        .bind(devo_id)
        .fetch_optional(db_pool)
        .await
}

/// Question texts for a devotional, in the order they were added.
pub async fn questions(db_pool: &SqlitePool, devo_id: &str) -> sqlx::Result<Vec<String>> {
    sqlx::query_scalar("SELECT question FROM questions WHERE devo=? ORDER BY rowid")
        .bind(devo_id)
        .fetch_all(db_pool)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    #[tokio::test]
    async fn questions_keep_insertion_order() {
        let db_pool = db::connect("sqlite::memory:", 1).await.unwrap();
        sqlx::query(
            "INSERT INTO questions (id,devo,question) VALUES
                ('q-b','d1','Q1?'), ('q-a','d1','Q2?'), ('q-c','d2','other')",
        )
        .execute(&db_pool)
        .await
        .unwrap();

        assert_eq!(questions(&db_pool, "d1").await.unwrap(), ["Q1?", "Q2?"]);
        assert!(questions(&db_pool, "d3").await.unwrap().is_empty());
    }
}
