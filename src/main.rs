use devomeet::{db, session, AppState, Config};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.rust_log.clone()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db_pool = db::connect(&config.database_url, config.db_max_connections).await?;
    info!("devotional strategy: {:?}", config.devo_strategy);

    let app_state = AppState {
        db_pool,
        devo_strategy: config.devo_strategy,
    };

    let app = devomeet::router()
        .with_state(app_state)
        .layer(session::layer(config.session_expiry_minutes));

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!("listening on {}", config.bind_address);
    axum::serve(listener, app).await?;

    Ok(())
}
