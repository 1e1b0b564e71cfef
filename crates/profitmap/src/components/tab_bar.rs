//! Numbered strip of dashboard tabs.

use super::{Component, EventResult};
use crate::event::{AppKeyEvent, KeyCode};
use crate::state::{AppState, TabId};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Tabs},
};

const TITLE: &str = " ROAS & Marketing Spend Profit Analysis ";

pub struct TabBar;

impl TabBar {
    /// Tab selected by a digit key, counting from 1
    fn tab_for_digit(c: char) -> Option<TabId> {
        let digit = c.to_digit(10)? as usize;
        TabId::from_index(digit.checked_sub(1)?)
    }
}

impl Component for TabBar {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        if !key.no_modifiers() {
            return EventResult::NotHandled;
        }

        match key.code {
            KeyCode::Char(c) => match Self::tab_for_digit(c) {
                Some(tab) => {
                    state.switch_tab(tab);
                    EventResult::Handled
                }
                None => EventResult::NotHandled,
            },
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let titles = TabId::ALL
            .iter()
            .map(|tab| format!("[{}] {}", tab.index() + 1, tab.name()));

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::BOTTOM).title(TITLE))
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .select(state.active_tab.index());

        frame.render_widget(tabs, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_for_digit() {
        assert_eq!(TabBar::tab_for_digit('1'), Some(TabId::Efficiency));
        assert_eq!(TabBar::tab_for_digit('3'), Some(TabId::Surface));
        assert_eq!(TabBar::tab_for_digit('0'), None);
        assert_eq!(TabBar::tab_for_digit('4'), None);
        assert_eq!(TabBar::tab_for_digit('x'), None);
    }
}
