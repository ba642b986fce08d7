use std::net::SocketAddr;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use carbon_desk_core::PortfolioDesk;
use carbon_desk_server::{app, AppState};

const DEFAULT_PORT: u16 = 4000;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .init();

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let state = AppState::new(PortfolioDesk::with_seed_data());
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("backend server running on http://{addr}");
    axum::serve(listener, app(state)).await?;

    Ok(())
}
