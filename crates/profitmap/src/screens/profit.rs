//! Fixed-view profit surface with the break-even line on the zero plane.

use ratatui::{Frame, layout::Rect};

use super::{Screen, handle_crosshair_key, render_sidebar};
use crate::components::charts::surface::SurfacePlot;
use crate::components::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::{AppState, Camera, Focus};
use crate::util::styles::focused_block_with_help;

pub struct ProfitScreen;

impl Component for ProfitScreen {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        handle_crosshair_key(&key, state)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chart_area = render_sidebar(frame, area, state);

        let block = focused_block_with_help(
            " Profit vs. ROAS and Marketing Spend ",
            state.focus == Focus::Chart,
            "hjkl move crosshair",
        );
        SurfacePlot::new(&state.surface, Camera::default())
            .stride(state.config.wireframe_stride)
            .crosshair(state.crosshair)
            .render(frame, chart_area, block);
    }
}

impl Screen for ProfitScreen {
    fn title(&self) -> &str {
        "Profit Surface"
    }
}
