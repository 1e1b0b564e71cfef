//! 2-D filled-contour map of profit per euro of marketing spend.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use super::{Screen, handle_crosshair_key, render_sidebar};
use crate::components::charts::heatmap::{EfficiencyMap, render_legend};
use crate::components::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::{AppState, Focus};
use crate::util::styles::focused_block_with_help;

const LEGEND_WIDTH: u16 = 14;

pub struct EfficiencyScreen;

impl Component for EfficiencyScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        handle_crosshair_key(&key, state)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chart_area = render_sidebar(frame, area, state);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(LEGEND_WIDTH)])
            .split(chart_area);

        let block = focused_block_with_help(
            " Profit Efficiency (Profit per € Marketing Spend) ",
            state.focus == Focus::Chart,
            "hjkl move crosshair",
        );
        let inner = block.inner(chunks[0]);
        frame.render_widget(block, chunks[0]);
        frame.render_widget(
            EfficiencyMap::new(&state.surface, &state.efficiency_levels).crosshair(state.crosshair),
            inner,
        );

        render_legend(frame, chunks[1], &state.efficiency_levels);
    }
}

impl Screen for EfficiencyScreen {
    fn title(&self) -> &str {
        "Efficiency Map"
    }
}
