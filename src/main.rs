use std::net::SocketAddr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lms_backend::api::router;
use lms_backend::config::Config;
use lms_backend::seed;
use lms_backend::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "lms_backend=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    // One reconnect attempt after a delay if the store is initially
    // unreachable, then give up.
    let pool = match connect(&config.database_url).await {
        Ok(pool) => pool,
        Err(err) => {
            warn!("database connection failed, retrying in 5s: {}", err);
            tokio::time::sleep(Duration::from_secs(5)).await;
            connect(&config.database_url).await?
        }
    };

    sqlx::migrate!("./migrations").run(&pool).await?;

    if let Err(err) = seed::run(&pool, &config.student_id).await {
        error!("sample data initialization failed: {}", err);
    }

    let state = AppState {
        db: pool.clone(),
        student_id: config.student_id,
    };

    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}
