use std::str::FromStr;

use anyhow::anyhow;
use rand::Rng;
use sqlx::SqlitePool;

use crate::{db::Devotional, meetings::MeetingError};

/// How a new meeting gets its devotional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DevoStrategy {
    /// Uniformly at random from every devotional in the store.
    #[default]
    Random,
    /// Always the same devotional. A fallback for when random selection
    /// isn't wanted, e.g. while preparing content.
    Fixed(String),
}

impl DevoStrategy {
    pub async fn pick(&self, db_pool: &SqlitePool) -> Result<Devotional, MeetingError> {
        match self {
            DevoStrategy::Random => {
                let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM devos")
                    .fetch_one(db_pool)
                    .await
                    .map_err(MeetingError::DevotionalLookupFailed)?;
                if count == 0 {
                    return Err(MeetingError::NoDevotionalAvailable);
                }

                let offset = rand::rng().random_range(0..count);
                sqlx::query_as("SELECT id,video,verses FROM devos ORDER BY rowid LIMIT 1 OFFSET ?")
                    .bind(offset)
                    .fetch_optional(db_pool)
                    .await
                    .map_err(MeetingError::DevotionalLookupFailed)?
                    // a row deleted between the two queries
                    .ok_or(MeetingError::NoDevotionalAvailable)
            }
            DevoStrategy::Fixed(devo_id) => super::find(db_pool, devo_id)
                .await
                .map_err(MeetingError::DevotionalLookupFailed)?
                .ok_or(MeetingError::NoDevotionalAvailable),
        }
    }
}

/// `random`, or `fixed:<devotional id>`.
impl FromStr for DevoStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once(':') {
            None if s.trim().eq_ignore_ascii_case("random") => Ok(DevoStrategy::Random),
            Some((kind, devo_id)) if kind.eq_ignore_ascii_case("fixed") && !devo_id.is_empty() => {
                Ok(DevoStrategy::Fixed(devo_id.to_owned()))
            }
            _ => Err(anyhow!("unknown devotional strategy {s:?}, expected `random` or `fixed:<id>`")),
        }
    }
}
