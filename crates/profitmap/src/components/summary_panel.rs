//! Breakdown of the cell under the crosshair and headline figures.

use super::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::AppState;
use crate::util::format::{format_efficiency, format_euro, format_euro_short, format_percentage};
use crate::util::styles::{HEADER_COLOR, HELP_COLOR, focused_block, value_style};
use profitmap_core::summary::{CellValue, break_even_roas};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const LABEL_WIDTH: usize = 16;

pub struct SummaryPanel;

fn header(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(HEADER_COLOR)
            .add_modifier(Modifier::BOLD),
    ))
}

fn row(label: &str, value: String, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{label:<width$}", width = LABEL_WIDTH)),
        Span::styled(value, style),
    ])
}

fn cell_location(cell: &CellValue) -> String {
    format!("@ {} / {:.2}", format_euro_short(cell.marketing_spend), cell.roas)
}

impl Component for SummaryPanel {
    fn handle_key(&mut self, _key: AppKeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let plain = Style::default();
        let dim = Style::default().fg(HELP_COLOR);
        let mut lines = Vec::new();

        if let Some(point) = state.crosshair_point() {
            lines.push(header("Crosshair"));
            lines.push(row("Spend", format_euro(point.marketing_spend), plain));
            lines.push(row("ROAS", format!("{:.2}", point.roas), plain));
            lines.push(row("Revenue", format_euro(point.revenue), plain));
            lines.push(row("Production", format_euro(point.production_cost), plain));
            lines.push(row("Marketing", format_euro(point.marketing_cost), plain));
            lines.push(row(
                "Work rate",
                format_percentage(point.workload_base_rate),
                plain,
            ));
            lines.push(row("Work cost", format_euro(point.work_cost), plain));
            lines.push(row("Profit", format_euro(point.profit), value_style(point.profit)));
            lines.push(row(
                "Efficiency",
                format_efficiency(point.efficiency),
                value_style(point.efficiency),
            ));

            let break_even = break_even_roas(&state.surface, state.crosshair.1)
                .map(|roas| format!("{roas:.2}"))
                .unwrap_or_else(|| "not reached".to_string());
            lines.push(row("Break-even ROAS", break_even, plain));
            lines.push(Line::from(""));
        }

        let summary = &state.summary;
        lines.push(header("Surface"));
        if let Some(peak) = &summary.peak_profit {
            lines.push(row("Peak profit", format_euro(peak.value), value_style(peak.value)));
            lines.push(row("", cell_location(peak), dim));
        }
        if let Some(best) = &summary.peak_efficiency {
            lines.push(row(
                "Best efficiency",
                format_efficiency(best.value),
                value_style(best.value),
            ));
            lines.push(row("", cell_location(best), dim));
        }
        if let Some(worst) = summary.worst_profit {
            lines.push(row("Worst profit", format_euro(worst), value_style(worst)));
        }
        lines.push(row(
            "Profitable",
            format_percentage(summary.profitable_share),
            plain,
        ));

        let block = focused_block(" Summary ", false);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
