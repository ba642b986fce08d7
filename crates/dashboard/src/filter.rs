use carbon_desk_core::models::position::PositionStatus;

/// The dashboard-side filter selection for the summary panel.
/// `All` maps to no query parameter on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum StatusFilter {
    All,
    Available,
    Retired,
}

impl StatusFilter {
    /// The status this filter restricts to, if any.
    #[must_use]
    pub fn to_status(self) -> Option<PositionStatus> {
        match self {
            StatusFilter::All => None,
            StatusFilter::Available => Some(PositionStatus::Available),
            StatusFilter::Retired => Some(PositionStatus::Retired),
        }
    }

    /// Value for the `status` query parameter; `None` means omit it.
    #[must_use]
    pub fn query_value(self) -> Option<&'static str> {
        self.to_status().map(|s| s.as_str())
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Available => f.write_str("available"),
            StatusFilter::Retired => f.write_str("retired"),
        }
    }
}
