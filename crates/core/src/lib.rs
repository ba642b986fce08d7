pub mod errors;
pub mod models;
pub mod services;
pub mod store;

use models::position::{Position, PositionStatus};
use models::summary::PortfolioSummary;
use services::summary_service::SummaryService;
use store::PositionStore;

/// Main entry point for the Carbon Desk core library.
/// Holds the position store and the service that aggregates it.
///
/// The store is injected at construction so the HTTP server and the
/// dashboard tests can run against fixture data.
#[must_use]
pub struct PortfolioDesk {
    store: PositionStore,
    summary_service: SummaryService,
}

impl PortfolioDesk {
    pub fn new(store: PositionStore) -> Self {
        Self {
            store,
            summary_service: SummaryService::new(),
        }
    }

    /// Desk backed by the built-in demo portfolio.
    pub fn with_seed_data() -> Self {
        Self::new(PositionStore::seed())
    }

    /// The full, unfiltered position list.
    #[must_use]
    pub fn positions(&self) -> &[Position] {
        self.store.all()
    }

    /// Aggregate summary over the store, optionally restricted to one
    /// status. `None` aggregates everything.
    #[must_use]
    pub fn summary(&self, status: Option<PositionStatus>) -> PortfolioSummary {
        match status {
            None => self.summary_service.compute(self.store.all()),
            Some(s) => self.summary_service.compute(&self.store.by_status(s)),
        }
    }
}

impl std::fmt::Debug for PortfolioDesk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioDesk")
            .field("positions", &self.store.len())
            .finish()
    }
}
