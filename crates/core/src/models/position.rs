use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::CoreError;

/// Lifecycle state of a carbon-credit position.
/// Serialized lowercase (`"available"` / `"retired"`) on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionStatus {
    /// Credits still held and tradable
    Available,
    /// Credits permanently retired against an offset claim
    Retired,
}

impl PositionStatus {
    /// The wire spellings accepted by the summary endpoint, in the order
    /// they are reported back to clients.
    pub const ACCEPTED: [&'static str; 2] = ["available", "retired"];

    /// The lowercase wire spelling of this status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionStatus::Available => "available",
            PositionStatus::Retired => "retired",
        }
    }
}

impl std::fmt::Display for PositionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PositionStatus {
    type Err = CoreError;

    /// Exact, case-sensitive match: only `"available"` and `"retired"` parse.
    /// `"Available"`, `"AVAILABLE"`, `"pending"`, etc. are all rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(PositionStatus::Available),
            "retired" => Ok(PositionStatus::Retired),
            other => Err(CoreError::InvalidStatusFilter(other.to_string())),
        }
    }
}

/// A single carbon-credit holding: project, quantity, price, status, and
/// vintage year. Immutable once loaded; owned by the [`PositionStore`].
///
/// [`PositionStore`]: crate::store::PositionStore
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    /// Unique identifier
    pub id: Uuid,

    /// Name of the offset project the credits come from
    pub project_name: String,

    /// Quantity of credits, in tonnes of CO₂e (positive)
    pub tonnes: f64,

    /// Purchase price per tonne, USD (positive)
    pub price_per_tonne: f64,

    /// Lifecycle state
    pub status: PositionStatus,

    /// Issuance year of the credits
    pub vintage: u16,
}

impl Position {
    pub fn new(
        project_name: impl Into<String>,
        tonnes: f64,
        price_per_tonne: f64,
        status: PositionStatus,
        vintage: u16,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_name: project_name.into(),
            tonnes,
            price_per_tonne,
            status,
            vintage,
        }
    }

    /// Market value of this position: tonnes × price per tonne.
    #[must_use]
    pub fn total_value(&self) -> f64 {
        self.tonnes * self.price_per_tonne
    }
}
