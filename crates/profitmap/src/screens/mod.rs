pub mod efficiency;
pub mod profit;
pub mod surface;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::components::parameters_panel::ParametersPanel;
use crate::components::summary_panel::SummaryPanel;
use crate::components::{Component, EventResult};
use crate::event::{AppKeyEvent, KeyCode};
use crate::state::AppState;

/// Width of the parameter sidebar shared by every screen
const SIDEBAR_WIDTH: u16 = 40;

/// Cells moved by the uppercase crosshair keys
const CROSSHAIR_JUMP: i32 = 10;

/// Trait for full screen views
pub trait Screen: Component {
    /// Get the screen title
    fn title(&self) -> &str;
}

/// Split a screen into the parameter sidebar and the chart area.
///
/// Renders the sidebar and returns the area left for the chart.
pub fn render_sidebar(frame: &mut Frame, area: Rect, state: &AppState) -> Rect {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(area);

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(ParametersPanel::HEIGHT),
            Constraint::Min(0),
        ])
        .split(columns[0]);

    ParametersPanel.render(frame, sidebar[0], state);
    SummaryPanel.render(frame, sidebar[1], state);

    columns[1]
}

/// Crosshair navigation shared by the 2-D charts
pub fn handle_crosshair_key(key: &AppKeyEvent, state: &mut AppState) -> EventResult {
    if !key.no_modifiers() {
        return EventResult::NotHandled;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.move_crosshair(1, 0),
        KeyCode::Down | KeyCode::Char('j') => state.move_crosshair(-1, 0),
        KeyCode::Left | KeyCode::Char('h') => state.move_crosshair(0, -1),
        KeyCode::Right | KeyCode::Char('l') => state.move_crosshair(0, 1),
        KeyCode::Char('K') => state.move_crosshair(CROSSHAIR_JUMP, 0),
        KeyCode::Char('J') => state.move_crosshair(-CROSSHAIR_JUMP, 0),
        KeyCode::Char('H') => state.move_crosshair(0, -CROSSHAIR_JUMP),
        KeyCode::Char('L') => state.move_crosshair(0, CROSSHAIR_JUMP),
        _ => return EventResult::NotHandled,
    }
    EventResult::Handled
}
