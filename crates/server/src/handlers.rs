//! HTTP handlers for the portfolio API.

use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use carbon_desk_core::models::position::{Position, PositionStatus};
use carbon_desk_core::models::summary::PortfolioSummary;

use crate::state::AppState;

/// Artificial latency applied to every summary request, valid filter or
/// not. Contractual: clients are expected to handle a slow summary
/// response. Do not remove or shorten.
pub const SUMMARY_DELAY: Duration = Duration::from_millis(2000);

/// Query parameters for the summary endpoint.
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub status: Option<String>,
}

/// Structured body for 400 responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

impl ErrorBody {
    fn invalid_status() -> Self {
        Self {
            error: "Invalid status parameter".to_string(),
            message: format!(
                "Status must be one of: {}",
                PositionStatus::ACCEPTED.join(", ")
            ),
        }
    }
}

/// `GET /api/portfolio` — the full position list, unfiltered, no delay,
/// no validation.
pub async fn get_portfolio(State(state): State<AppState>) -> Json<Vec<Position>> {
    Json(state.desk.positions().to_vec())
}

/// `GET /api/portfolio/summary?status=available|retired`
///
/// Sleeps for [`SUMMARY_DELAY`] before doing anything else — the delay
/// applies to every invocation, so invalid requests are delayed too.
/// An absent `status` aggregates the whole store; a present one must be
/// exactly `"available"` or `"retired"` (case-sensitive) or the request
/// is rejected with a structured 400.
pub async fn get_summary(
    State(state): State<AppState>,
    Query(query): Query<SummaryQuery>,
) -> Result<Json<PortfolioSummary>, (StatusCode, Json<ErrorBody>)> {
    tokio::time::sleep(SUMMARY_DELAY).await;

    let status = match query.status.as_deref() {
        None => None,
        Some(raw) => match raw.parse::<PositionStatus>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                tracing::warn!(status = raw, "rejected summary request with unknown status");
                return Err((StatusCode::BAD_REQUEST, Json(ErrorBody::invalid_status())));
            }
        },
    };

    let summary = state.desk.summary(status);
    tracing::info!(
        status = status.map(|s| s.as_str()).unwrap_or("all"),
        total_tonnes = summary.total_tonnes,
        "served portfolio summary"
    );
    Ok(Json(summary))
}
