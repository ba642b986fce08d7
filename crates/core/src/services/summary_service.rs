use crate::models::position::Position;
use crate::models::summary::PortfolioSummary;

/// Reduces a sequence of positions into aggregate totals.
///
/// Pure business logic — no I/O, no API calls. Deterministic and
/// order-independent (both totals are plain sums).
pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    /// Compute totals and the average price per tonne over `positions`.
    ///
    /// The average is intentionally left unguarded: an empty input yields
    /// zero totals and a non-finite average (0.0 / 0.0). Downstream JSON
    /// encoding turns the non-finite value into `null`, which is the
    /// contract callers observe for an empty filtered set.
    #[must_use]
    pub fn compute(&self, positions: &[Position]) -> PortfolioSummary {
        let mut total_tonnes = 0.0;
        let mut total_value = 0.0;

        for position in positions {
            total_tonnes += position.tonnes;
            total_value += position.tonnes * position.price_per_tonne;
        }

        PortfolioSummary {
            total_tonnes,
            total_value,
            average_price_per_tonne: total_value / total_tonnes,
        }
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}
