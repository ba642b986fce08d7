use std::sync::Arc;

use carbon_desk_core::PortfolioDesk;

/// Shared state injected into every handler. The desk is read-only at
/// request time, so a plain `Arc` is enough.
#[derive(Clone)]
pub struct AppState {
    pub desk: Arc<PortfolioDesk>,
}

impl AppState {
    pub fn new(desk: PortfolioDesk) -> Self {
        Self {
            desk: Arc::new(desk),
        }
    }
}
