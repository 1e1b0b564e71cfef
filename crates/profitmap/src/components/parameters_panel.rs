//! Slider list for the six model parameters.

use super::{Component, EventResult};
use crate::event::{AppKeyEvent, KeyCode};
use crate::state::{AppState, Focus};
use crate::util::styles::{FOCUS_COLOR, HELP_COLOR, focused_block_with_help};
use profitmap_core::{ParamKey, ParamSpec};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Steps applied by the uppercase adjust keys
const COARSE_STEPS: i32 = 10;

/// Width reserved right of the slider for the value
const VALUE_WIDTH: usize = 8;

pub struct ParametersPanel;

impl ParametersPanel {
    /// Rows needed to show every parameter (two lines each, plus borders)
    pub const HEIGHT: u16 = ParamKey::ALL.len() as u16 * 2 + 2;

    fn slider(spec: &ParamSpec, value: f64, width: usize, selected: bool) -> Line<'static> {
        let track = width.saturating_sub(VALUE_WIDTH + 3).max(3);
        let knob = (spec.ratio(value) * (track - 1) as f64).round() as usize;

        let active = if selected { FOCUS_COLOR } else { Color::Cyan };
        Line::from(vec![
            Span::raw("  "),
            Span::styled("━".repeat(knob), Style::default().fg(active)),
            Span::styled("●", Style::default().fg(active).add_modifier(Modifier::BOLD)),
            Span::styled("─".repeat(track - 1 - knob), Style::default().fg(HELP_COLOR)),
            Span::raw(format!(" {:>width$}", spec.format(value), width = VALUE_WIDTH)),
        ])
    }
}

impl Component for ParametersPanel {
    fn handle_key(&mut self, key: AppKeyEvent, state: &mut AppState) -> EventResult {
        if !key.no_modifiers() {
            return EventResult::NotHandled;
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => state.select_next_param(),
            KeyCode::Up | KeyCode::Char('k') => state.select_prev_param(),
            KeyCode::Left | KeyCode::Char('h') => state.nudge_selected(-1),
            KeyCode::Right | KeyCode::Char('l') => state.nudge_selected(1),
            KeyCode::Char('H') => state.nudge_selected(-COARSE_STEPS),
            KeyCode::Char('L') => state.nudge_selected(COARSE_STEPS),
            _ => return EventResult::NotHandled,
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let focused = state.focus == Focus::Parameters;
        let block = focused_block_with_help(" Parameters ", focused, "h/l adjust");
        let width = block.inner(area).width as usize;

        let mut lines = Vec::with_capacity(ParamKey::ALL.len() * 2);
        for key in ParamKey::ALL {
            let spec = key.spec();
            let selected = key == state.selected_key();

            let (marker, label_style) = if selected {
                (
                    "▶ ",
                    Style::default()
                        .fg(FOCUS_COLOR)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Style::default())
            };

            lines.push(Line::from(vec![
                Span::styled(marker, label_style),
                Span::styled(spec.label, label_style),
            ]));
            lines.push(Self::slider(spec, state.params.get(key), width, selected));
        }

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(all(test, feature = "native"))]
mod tests {
    use super::*;
    use profitmap_core::ProfitParameters;

    #[test]
    fn test_keys_adjust_selected_parameter() {
        let mut panel = ParametersPanel;
        let mut state = AppState::default();

        panel.handle_key(AppKeyEvent::new(KeyCode::Char('j')), &mut state);
        assert_eq!(state.selected_key(), ParamKey::ProductionCost);

        panel.handle_key(AppKeyEvent::new(KeyCode::Right), &mut state);
        assert_eq!(state.params.production_cost_percentage, 0.31);

        panel.handle_key(AppKeyEvent::new(KeyCode::Char('H')), &mut state);
        assert_eq!(state.params.production_cost_percentage, 0.21);

        assert_eq!(
            panel.handle_key(AppKeyEvent::with_ctrl(KeyCode::Char('l')), &mut state),
            EventResult::NotHandled
        );
        assert_ne!(state.params, ProfitParameters::default());
    }

    #[test]
    fn test_slider_fits_width() {
        let spec = ParamKey::WeekendMultiplier.spec();
        let line = ParametersPanel::slider(spec, 1.5, 36, true);
        assert_eq!(line.width(), 36);

        let narrow = ParametersPanel::slider(spec, 2.0, 4, false);
        assert!(narrow.width() >= 4);
    }
}
