use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swc_fantasy_api::{app, db, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing/logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting SWC fantasy football API...");

    let config = Config::from_env()?;

    let pool = db::connect(&config).await.inspect_err(|e| {
        tracing::error!("Failed to connect to database: {}", e);
    })?;

    tracing::info!("Database connection established.");

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app(pool)).await?;

    Ok(())
}
