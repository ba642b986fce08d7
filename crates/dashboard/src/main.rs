use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use carbon_desk_dashboard::api::{HttpPortfolioApi, PortfolioApi};
use carbon_desk_dashboard::filter::StatusFilter;
use carbon_desk_dashboard::render;
use carbon_desk_dashboard::view::SummaryView;

/// Terminal dashboard for the carbon-desk portfolio API.
#[derive(Debug, Parser)]
#[command(name = "carbon-desk", about = "Carbon credit portfolio dashboard")]
struct Cli {
    /// Base URL of the carbon-desk server
    #[arg(long, default_value = "http://127.0.0.1:4000")]
    api_url: String,

    /// Status filter for the summary panel
    #[arg(long, value_enum, default_value_t = StatusFilter::All)]
    status: StatusFilter,
}

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .compact()
        .init();

    let cli = Cli::parse();
    let api = Arc::new(HttpPortfolioApi::new(&cli.api_url));

    let positions = api
        .fetch_positions()
        .await
        .context("failed to fetch the position list")?;
    println!("Positions");
    println!("{}", render::positions_table(&positions));

    let mut view = SummaryView::new(api);
    view.set_filter(cli.status);

    // The summary endpoint is slow by contract; show the skeleton cards
    // while the request is in flight, then the settled panel.
    println!("Summary ({})", view.active_filter());
    println!("{}", render::summary_panel(&view.state()));
    view.wait_settled().await;
    println!("{}", render::summary_panel(&view.state()));

    Ok(())
}
