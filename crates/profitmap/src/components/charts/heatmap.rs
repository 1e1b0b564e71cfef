//! Filled-contour map of profit efficiency.
//!
//! Each terminal cell shows two vertically stacked samples using the upper
//! half block, so the map has twice the vertical resolution of the area.

use profitmap_core::ProfitSurface;
use profitmap_core::contour::level_band;
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{index_to_pixel, pixel_to_index};
use crate::util::colormap::Colormap;
use crate::util::format::format_euro_short;
use crate::util::styles::{BREAK_EVEN_MAP_COLOR, HELP_COLOR, focused_block};

/// Columns reserved left of the map for ROAS labels
const Y_LABEL_WIDTH: u16 = 6;

/// Efficiency map widget with break-even overlay and crosshair
pub struct EfficiencyMap<'a> {
    surface: &'a ProfitSurface,
    levels: &'a [f64],
    crosshair: Option<(usize, usize)>,
}

impl<'a> EfficiencyMap<'a> {
    pub fn new(surface: &'a ProfitSurface, levels: &'a [f64]) -> Self {
        Self {
            surface,
            levels,
            crosshair: None,
        }
    }

    pub fn crosshair(mut self, crosshair: (usize, usize)) -> Self {
        self.crosshair = Some(crosshair);
        self
    }

    /// Band colors for every pixel, row-major from the top-left
    fn pixels(&self, width: usize, height: usize) -> Vec<Color> {
        let (rows, cols) = self.surface.shape();
        let bands = self.levels.len().saturating_sub(1);
        let mut pixels = Vec::with_capacity(width * height);

        for py in 0..height {
            // Highest ROAS at the top
            let row = pixel_to_index(height - 1 - py, height, rows);
            for px in 0..width {
                let col = pixel_to_index(px, width, cols);
                let value = self.surface.efficiency.get(row, col).copied().unwrap_or(0.0);
                pixels.push(Colormap::Plasma.band(level_band(value, self.levels), bands));
            }
        }
        pixels
    }

    /// Draw the break-even segments into the pixel buffer
    fn overlay_break_even(&self, pixels: &mut [Color], width: usize, height: usize) {
        let spend = &self.surface.spend_values;
        let roas = &self.surface.roas_values;
        let (Some(&x0), Some(&x1), Some(&y0), Some(&y1)) =
            (spend.first(), spend.last(), roas.first(), roas.last())
        else {
            return;
        };
        if x1 <= x0 || y1 <= y0 {
            return;
        }

        let to_pixel = |(x, y): (f64, f64)| {
            (
                (x - x0) / (x1 - x0) * (width - 1) as f64,
                (y1 - y) / (y1 - y0) * (height - 1) as f64,
            )
        };

        for segment in &self.surface.break_even.segments {
            let (ax, ay) = to_pixel(segment.start);
            let (bx, by) = to_pixel(segment.end);
            let steps = (bx - ax).abs().max((by - ay).abs()).ceil().max(1.0) as usize;

            for i in 0..=steps {
                let t = i as f64 / steps as f64;
                let px = (ax + (bx - ax) * t).round();
                let py = (ay + (by - ay) * t).round();
                if px < 0.0 || py < 0.0 {
                    continue;
                }
                let (px, py) = (px as usize, py as usize);
                if px < width && py < height {
                    pixels[py * width + px] = BREAK_EVEN_MAP_COLOR;
                }
            }
        }
    }

    fn render_axis_labels(&self, area: Rect, plot: Rect, buf: &mut Buffer) {
        let style = Style::default().fg(HELP_COLOR);
        let roas = &self.surface.roas_values;
        let spend = &self.surface.spend_values;

        if let (Some(lo), Some(hi)) = (roas.first(), roas.last()) {
            let bottom = plot.y + plot.height.saturating_sub(1);
            let middle = plot.y + plot.height / 2;
            buf.set_string(area.x, plot.y, format!("{hi:>5.1}"), style);
            buf.set_string(area.x, middle, format!("{:>5.1}", (lo + hi) / 2.0), style);
            buf.set_string(area.x, bottom, format!("{lo:>5.1}"), style);
        }

        if let (Some(&lo), Some(&hi)) = (spend.first(), spend.last()) {
            let y = plot.y + plot.height;
            let right = format_euro_short(hi);
            let right_x = (plot.x + plot.width).saturating_sub(right.chars().count() as u16);
            buf.set_string(plot.x, y, format_euro_short(lo), style);
            buf.set_string(
                plot.x + plot.width / 2,
                y,
                format_euro_short((lo + hi) / 2.0),
                style,
            );
            buf.set_string(right_x, y, right, style);
        }
    }
}

impl Widget for EfficiencyMap<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width <= Y_LABEL_WIDTH + 2 || area.height < 3 || self.surface.profit.is_empty() {
            return;
        }

        let plot = Rect {
            x: area.x + Y_LABEL_WIDTH,
            y: area.y,
            width: area.width - Y_LABEL_WIDTH,
            height: area.height - 1,
        };
        let width = plot.width as usize;
        let height = plot.height as usize * 2;

        let mut pixels = self.pixels(width, height);
        self.overlay_break_even(&mut pixels, width, height);

        for cy in 0..plot.height {
            for cx in 0..plot.width {
                let top = pixels[(2 * cy as usize) * width + cx as usize];
                let bottom = pixels[(2 * cy as usize + 1) * width + cx as usize];
                if let Some(cell) = buf.cell_mut((plot.x + cx, plot.y + cy)) {
                    cell.set_symbol("▀").set_fg(top).set_bg(bottom);
                }
            }
        }

        if let Some((row, col)) = self.crosshair {
            let (rows, cols) = self.surface.shape();
            let px = index_to_pixel(col, cols, width);
            let py = height - 1 - index_to_pixel(row, rows, height);
            let position = (plot.x + px as u16, plot.y + (py / 2) as u16);
            if let Some(cell) = buf.cell_mut(position) {
                cell.set_symbol("+")
                    .set_fg(Color::Black)
                    .set_bg(Color::White);
            }
        }

        self.render_axis_labels(area, plot, buf);
    }
}

/// Render the color legend for the efficiency bands, highest band on top.
pub fn render_legend(frame: &mut Frame, area: Rect, levels: &[f64]) {
    let block = focused_block(" €/€ ", false);
    let inner = block.inner(area);
    let bands = levels.len().saturating_sub(1);

    let shown = bands.min(inner.height as usize);
    let lines: Vec<Line> = (0..shown)
        .map(|i| {
            let band = bands - 1 - i * bands / shown;
            Line::from(vec![
                Span::styled("██", Style::default().fg(Colormap::Plasma.band(band, bands))),
                Span::raw(format!(" {:>6.2}", levels[band])),
            ])
        })
        .collect();

    let legend = if lines.is_empty() {
        Paragraph::new(Line::from(Span::styled(
            "flat",
            Style::default().add_modifier(Modifier::ITALIC),
        )))
    } else {
        Paragraph::new(lines)
    };
    frame.render_widget(legend.block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use profitmap_core::contour::contour_levels;
    use profitmap_core::{ProfitParameters, SurfaceAxes, compute_surface};

    fn render_map(width: u16, height: u16, crosshair: Option<(usize, usize)>) -> Buffer {
        let surface = compute_surface(&ProfitParameters::default(), &SurfaceAxes::default());
        let (min, max) = surface.efficiency.min_max().unwrap();
        let levels = contour_levels(min, max, 20);

        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        let mut map = EfficiencyMap::new(&surface, &levels);
        if let Some(crosshair) = crosshair {
            map = map.crosshair(crosshair);
        }
        map.render(area, &mut buf);
        buf
    }

    #[test]
    fn test_map_draws_break_even_line() {
        let buf = render_map(60, 20, None);
        let has_white = buf
            .content()
            .iter()
            .any(|cell| cell.fg == BREAK_EVEN_MAP_COLOR || cell.bg == BREAK_EVEN_MAP_COLOR);
        assert!(has_white);
    }

    #[test]
    fn test_map_labels_axes() {
        let buf = render_map(60, 20, Some((50, 50)));
        let top_row: String = (0..6)
            .filter_map(|x| buf.cell((x, 0)).map(|c| c.symbol().to_string()))
            .collect();
        assert_eq!(top_row.trim(), "8.0");

        let bottom_row: String = (6..12)
            .filter_map(|x| buf.cell((x, 19)).map(|c| c.symbol().to_string()))
            .collect();
        assert!(bottom_row.starts_with("0€"));

        let crosshairs = buf.content().iter().filter(|c| c.symbol() == "+").count();
        assert_eq!(crosshairs, 1);
    }

    #[test]
    fn test_tiny_area_is_skipped() {
        let buf = render_map(5, 2, None);
        assert!(buf.content().iter().all(|cell| cell.symbol() == " "));
    }
}
