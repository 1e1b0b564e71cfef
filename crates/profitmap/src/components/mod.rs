//! Panels shared by the screens.
//!
//! A component receives keys while it has focus and draws itself from
//! [`AppState`]; it keeps no state of its own.

pub mod charts;
pub mod parameters_panel;
pub mod status_bar;
pub mod summary_panel;
pub mod tab_bar;

use ratatui::{Frame, layout::Rect};

use crate::event::AppKeyEvent;
use crate::state::AppState;

/// Outcome of offering a key to a component
#[derive(Debug, Clone, PartialEq)]
pub enum EventResult {
    Handled,
    /// Not for this component; the caller tries the next one
    NotHandled,
    /// Quit the dashboard
    Exit,
}

pub trait Component {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult;

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState);
}
