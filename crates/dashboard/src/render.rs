//! Terminal rendering for the summary cards and the positions table.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use owo_colors::OwoColorize;

use carbon_desk_core::models::position::{Position, PositionStatus};

use crate::format::{format_currency, format_currency_whole, format_integer};
use crate::view::SummaryState;

const SKELETON: &str = "────────";

/// Render the three aggregate cards for the current panel state.
/// While loading (or before the first fetch) the cards show skeleton
/// placeholders; a failure renders a user-visible notification line.
#[must_use]
pub fn summary_panel(state: &SummaryState) -> String {
    match state {
        SummaryState::Idle | SummaryState::Loading => {
            cards(SKELETON, SKELETON, SKELETON)
        }
        SummaryState::Loaded(summary) => cards(
            &format_integer(summary.total_tonnes),
            &format_currency_whole(summary.total_value),
            &format_currency(summary.average_price_per_tonne),
        ),
        SummaryState::Failed(message) => {
            format!(
                "{} {}",
                "⚠ Failed to load portfolio summary:".red().bold(),
                message
            )
        }
    }
}

fn cards(tonnes: &str, value: &str, average: &str) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Total Tonnes", "Total Value", "Avg Price/Tonne"]);
    table.add_row(vec![
        Cell::new(tonnes).set_alignment(CellAlignment::Right),
        Cell::new(value).set_alignment(CellAlignment::Right),
        Cell::new(average).set_alignment(CellAlignment::Right),
    ]);
    table.to_string()
}

/// Render the full position list: one row per position, with formatted
/// currency and number values. No filtering here; the table always shows
/// everything.
#[must_use]
pub fn positions_table(positions: &[Position]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Project Name",
            "Tonnes",
            "Price/Tonne",
            "Total Value",
            "Status",
            "Vintage",
        ]);

    for position in positions {
        let status = match position.status {
            PositionStatus::Available => position.status.green().to_string(),
            PositionStatus::Retired => position.status.dimmed().to_string(),
        };
        table.add_row(vec![
            Cell::new(&position.project_name),
            Cell::new(format_integer(position.tonnes)).set_alignment(CellAlignment::Right),
            Cell::new(format_currency(position.price_per_tonne))
                .set_alignment(CellAlignment::Right),
            Cell::new(format_currency(position.total_value()))
                .set_alignment(CellAlignment::Right),
            Cell::new(status).set_alignment(CellAlignment::Center),
            Cell::new(position.vintage).set_alignment(CellAlignment::Center),
        ]);
    }

    table.to_string()
}
