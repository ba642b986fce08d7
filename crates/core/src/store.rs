use crate::models::position::{Position, PositionStatus};

/// Immutable, in-memory collection of portfolio positions.
///
/// The position list is injected at construction and never mutated
/// afterwards, so the store can be read concurrently without locking.
/// Production code uses [`PositionStore::seed`]; tests inject fixtures
/// through [`PositionStore::new`].
#[derive(Debug, Clone)]
pub struct PositionStore {
    positions: Vec<Position>,
}

impl PositionStore {
    pub fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    /// The demo portfolio served by default: a mix of available and
    /// retired positions across several project types and vintages.
    #[must_use]
    pub fn seed() -> Self {
        use PositionStatus::{Available, Retired};
        Self::new(vec![
            Position::new("Amazon Rainforest Conservation", 1500.0, 12.50, Available, 2022),
            Position::new("Kenya Reforestation Initiative", 800.0, 9.75, Available, 2021),
            Position::new("Solar Farm Development India", 2000.0, 15.00, Retired, 2023),
            Position::new("Mangrove Restoration Indonesia", 650.0, 18.25, Available, 2022),
            Position::new("Wind Energy Project Texas", 1200.0, 11.40, Retired, 2020),
            Position::new("Peatland Protection Borneo", 950.0, 14.80, Available, 2023),
            Position::new("Methane Capture Colorado", 500.0, 22.10, Retired, 2021),
            Position::new("Clean Cookstoves Uganda", 700.0, 8.95, Available, 2020),
        ])
    }

    /// All positions, in load order.
    #[must_use]
    pub fn all(&self) -> &[Position] {
        &self.positions
    }

    /// Positions matching a single status.
    #[must_use]
    pub fn by_status(&self, status: PositionStatus) -> Vec<Position> {
        self.positions
            .iter()
            .filter(|p| p.status == status)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl Default for PositionStore {
    fn default() -> Self {
        Self::seed()
    }
}
