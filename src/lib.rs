pub mod appresult;
pub mod config;
pub mod db;
pub mod devos;
pub mod meetings;
pub mod res;
pub mod session;

use axum::{extract::FromRef, Router};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub use appresult::{AppError, AppResult};
pub use config::Config;
use devos::DevoStrategy;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub devo_strategy: DevoStrategy,
}

/// Every route the service serves, with request activity logged through
/// `tracing`. Callers supply the state and the session layer.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(meetings::router())
        .layer(TraceLayer::new_for_http())
}
