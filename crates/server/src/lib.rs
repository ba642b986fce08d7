pub mod handlers;
pub mod state;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

pub use state::AppState;

/// Build the API router. Cross-origin requests are permitted from any
/// origin; the dashboard may be served from anywhere.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/portfolio", get(handlers::get_portfolio))
        .route("/api/portfolio/summary", get(handlers::get_summary))
        .with_state(state)
        .layer(CorsLayer::permissive())
}
