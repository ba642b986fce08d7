use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use carbon_desk_core::errors::CoreError;
use carbon_desk_core::models::position::Position;
use carbon_desk_core::models::summary::PortfolioSummary;

use crate::filter::StatusFilter;

/// Trait abstraction over the dashboard's data source.
///
/// The terminal views only ever talk to this trait; tests substitute a
/// mock implementation instead of a live server.
#[async_trait]
pub trait PortfolioApi: Send + Sync {
    /// Fetch the full, unfiltered position list.
    async fn fetch_positions(&self) -> Result<Vec<Position>, CoreError>;

    /// Fetch the aggregate summary for a filter. Slow by contract: the
    /// server holds the response for two seconds.
    async fn fetch_summary(&self, filter: StatusFilter) -> Result<PortfolioSummary, CoreError>;
}

/// HTTP implementation backed by the carbon-desk server.
pub struct HttpPortfolioApi {
    client: Client,
    base_url: String,
}

impl HttpPortfolioApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

/// Shape of the server's 400 body.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
    message: String,
}

#[async_trait]
impl PortfolioApi for HttpPortfolioApi {
    async fn fetch_positions(&self) -> Result<Vec<Position>, CoreError> {
        let url = format!("{}/api/portfolio", self.base_url);
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();

        if !status.is_success() {
            return Err(CoreError::Api {
                status: status.as_u16(),
                message: format!("portfolio request failed with status {status}"),
            });
        }

        resp.json().await.map_err(|e| CoreError::Api {
            status: status.as_u16(),
            message: format!("failed to parse portfolio response: {e}"),
        })
    }

    async fn fetch_summary(&self, filter: StatusFilter) -> Result<PortfolioSummary, CoreError> {
        let url = format!("{}/api/portfolio/summary", self.base_url);
        let mut request = self.client.get(&url);
        if let Some(status) = filter.query_value() {
            request = request.query(&[("status", status)]);
        }

        let resp = request.send().await?;
        let status = resp.status();

        if !status.is_success() {
            // 400s carry a structured body; surface its message when present.
            let message = match resp.json::<ApiErrorBody>().await {
                Ok(body) => format!("{}: {}", body.error, body.message),
                Err(_) => format!("summary request failed with status {status}"),
            };
            return Err(CoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        resp.json().await.map_err(|e| CoreError::Api {
            status: status.as_u16(),
            message: format!("failed to parse summary response: {e}"),
        })
    }
}
