use serde::{Deserialize, Deserializer, Serialize};

/// Aggregate totals over a set of positions. Derived, recomputed per
/// request, never persisted.
///
/// Invariants: `total_value = Σ tonnes × price_per_tonne` over the input
/// set and `average_price_per_tonne = total_value / total_tonnes`. The
/// average is non-finite when `total_tonnes` is zero; serde_json writes a
/// non-finite f64 as JSON `null`, and deserialization maps `null` back to
/// NaN so a round trip preserves the value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Sum of tonnes across the input set
    pub total_tonnes: f64,

    /// Sum of tonnes × price per tonne across the input set
    pub total_value: f64,

    /// Total value divided by total tonnes (NaN for an empty set)
    #[serde(deserialize_with = "nan_on_null")]
    pub average_price_per_tonne: f64,
}

fn nan_on_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}
