use super::{Component, EventResult};
use crate::event::AppKeyEvent;
use crate::state::{AppState, Focus, TabId};
use crate::util::styles::HELP_COLOR;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct StatusBar;

impl StatusBar {
    fn help_text(state: &AppState) -> &'static str {
        match (state.focus, state.active_tab) {
            (Focus::Parameters, _) => {
                "1-3: tabs | j/k: select | h/l: adjust | H/L: x10 | r: reset | Tab: chart | Ctrl+S: save | q: quit"
            }
            (Focus::Chart, TabId::Surface) => {
                "1-3: tabs | arrows: rotate/tilt | +/-: zoom | 0: reset view | Tab: parameters | q: quit"
            }
            (Focus::Chart, _) => {
                "1-3: tabs | arrows: move crosshair | H/J/K/L: x10 | Tab: parameters | q: quit"
            }
        }
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: AppKeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut spans = Vec::new();
        if state.dirty {
            spans.push(Span::styled("[modified] ", Style::default().fg(Color::Yellow)));
        }

        if let Some(error) = &state.error_message {
            spans.push(Span::styled("Error: ", Style::default().fg(Color::Red)));
            spans.push(Span::raw(error.as_str()));
        } else if let Some(status) = &state.status_message {
            spans.push(Span::styled(status.as_str(), Style::default().fg(Color::Green)));
        } else {
            spans.push(Span::styled(
                Self::help_text(state),
                Style::default().fg(HELP_COLOR),
            ));
        }

        let paragraph =
            Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP));

        frame.render_widget(paragraph, area);
    }
}
