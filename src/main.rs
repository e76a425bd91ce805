use std::net::{SocketAddr, TcpListener};

use anyhow::Context;
use news_api::{init_db, make_router, run_app, Result};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    match serve().await {
        Ok(_) => (),
        Err(error) => tracing::error!("Error: {:#}", error),
    }
}

async fn serve() -> Result<()> {
    let db_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let port = match std::env::var("PORT") {
        Ok(port) => port.parse().context("PORT must be a valid port number")?,
        Err(_) => 9090,
    };

    let pool = init_db(&db_url).await?;
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).context("Failed to bind server address")?;
    tracing::info!("Server started on {}", addr);
    run_app(make_router(), listener, pool).await
}
