//! Shared colours and panel frames.

use ratatui::prelude::*;
use ratatui::widgets::Block;

/// Border of the panel receiving keys
pub const FOCUS_COLOR: Color = Color::Yellow;

/// Key hints, axis labels and other secondary text
pub const HELP_COLOR: Color = Color::DarkGray;

/// Section headings inside panels
pub const HEADER_COLOR: Color = Color::Cyan;

/// Profit at or above break-even
pub const PROFIT_COLOR: Color = Color::Green;

/// Loss
pub const LOSS_COLOR: Color = Color::Red;

/// Break-even line on the efficiency map
pub const BREAK_EVEN_MAP_COLOR: Color = Color::White;

/// Break-even line on the 3-D surface
pub const BREAK_EVEN_SURFACE_COLOR: Color = Color::Red;

/// Bordered panel whose border turns [`FOCUS_COLOR`] while it has focus.
pub fn focused_block(title: &str, focused: bool) -> Block<'static> {
    let block = Block::bordered().title(title.to_string());
    if focused {
        block.border_style(Style::new().fg(FOCUS_COLOR))
    } else {
        block
    }
}

/// [`focused_block`] with key hints along the bottom border, shown only
/// while focused.
pub fn focused_block_with_help(title: &str, focused: bool, help_text: &str) -> Block<'static> {
    let block = focused_block(title, focused);
    if !focused || help_text.is_empty() {
        return block;
    }
    block.title_bottom(Line::from(format!(" {help_text} ")).fg(HELP_COLOR))
}

/// Green for break-even or better, red for a loss
pub fn value_style(value: f64) -> Style {
    let color = if value < 0.0 { LOSS_COLOR } else { PROFIT_COLOR };
    Style::new().fg(color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focused_block_has_title() {
        let block = focused_block(" Parameters ", true);
        assert!(format!("{block:?}").contains("Parameters"));
    }

    #[test]
    fn test_help_only_when_focused() {
        let area = Rect::new(0, 0, 30, 3);
        let render = |focused: bool| {
            let mut buf = Buffer::empty(area);
            focused_block_with_help(" Map ", focused, "hjkl").render(area, &mut buf);
            (0..area.width)
                .map(|x| buf[(x, 2)].symbol().to_string())
                .collect::<String>()
        };

        assert!(render(true).contains("hjkl"));
        assert!(!render(false).contains("hjkl"));
    }

    #[test]
    fn test_value_style() {
        assert_eq!(value_style(12.5).fg, Some(PROFIT_COLOR));
        assert_eq!(value_style(0.0).fg, Some(PROFIT_COLOR));
        assert_eq!(value_style(-0.01).fg, Some(LOSS_COLOR));
    }
}
