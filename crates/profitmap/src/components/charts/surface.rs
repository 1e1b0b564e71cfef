//! Projected wireframe of the profit surface.

use profitmap_core::ProfitSurface;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Stylize},
    symbols::Marker,
    text::Line as TextLine,
    widgets::{
        Block,
        canvas::{Canvas, Context, Line, Points},
    },
};

use super::to_unit;
use crate::state::Camera;
use crate::util::colormap::Colormap;
use crate::util::format::format_euro_short;
use crate::util::styles::{BREAK_EVEN_SURFACE_COLOR, HELP_COLOR};

/// Profit surface viewed through a [`Camera`]
pub struct SurfacePlot<'a> {
    surface: &'a ProfitSurface,
    camera: Camera,
    stride: usize,
    crosshair: Option<(usize, usize)>,
    /// Lowest and highest profit, mapped to the bottom and top of the cube
    range: (f64, f64),
}

impl<'a> SurfacePlot<'a> {
    pub fn new(surface: &'a ProfitSurface, camera: Camera) -> Self {
        Self {
            surface,
            camera,
            stride: 1,
            crosshair: None,
            range: surface.profit.min_max().unwrap_or((0.0, 0.0)),
        }
    }

    /// Draw every `stride`-th grid line
    pub fn stride(mut self, stride: usize) -> Self {
        self.stride = stride.max(1);
        self
    }

    pub fn crosshair(mut self, crosshair: (usize, usize)) -> Self {
        self.crosshair = Some(crosshair);
        self
    }

    /// Projected canvas position and normalised height of a grid cell
    fn vertex(&self, row: usize, col: usize) -> Option<((f64, f64), f64)> {
        let (rows, cols) = self.surface.shape();
        let (lo, hi) = self.range;
        let profit = *self.surface.profit.get(row, col)?;

        let x = to_unit(col as f64, 0.0, cols.saturating_sub(1) as f64);
        let y = to_unit(row as f64, 0.0, rows.saturating_sub(1) as f64);
        let z = to_unit(profit, lo, hi);
        Some((self.camera.project(x, y, z), (z + 1.0) / 2.0))
    }

    /// Grid lines to draw along one axis: every `stride`-th plus the last
    fn line_indices(&self, len: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..len).step_by(self.stride).collect();
        if len > 0 && indices.last() != Some(&(len - 1)) {
            indices.push(len - 1);
        }
        indices
    }

    fn draw_wireframe(&self, ctx: &mut Context) {
        let (rows, cols) = self.surface.shape();

        let mut edge = |a: (usize, usize), b: (usize, usize)| {
            if let (Some((p, ha)), Some((q, hb))) = (self.vertex(a.0, a.1), self.vertex(b.0, b.1)) {
                let color = Colormap::Viridis.sample((ha + hb) / 2.0);
                ctx.draw(&Line::new(p.0, p.1, q.0, q.1, color));
            }
        };

        for row in self.line_indices(rows) {
            for col in 1..cols {
                edge((row, col - 1), (row, col));
            }
        }
        for col in self.line_indices(cols) {
            for row in 1..rows {
                edge((row - 1, col), (row, col));
            }
        }
    }

    fn draw_break_even(&self, ctx: &mut Context) {
        let spend = &self.surface.spend_values;
        let roas = &self.surface.roas_values;
        let (Some(&x0), Some(&x1), Some(&y0), Some(&y1)) =
            (spend.first(), spend.last(), roas.first(), roas.last())
        else {
            return;
        };
        let (lo, hi) = self.range;
        let z = to_unit(0.0, lo, hi);

        let project = |(x, y): (f64, f64)| {
            self.camera
                .project(to_unit(x, x0, x1), to_unit(y, y0, y1), z)
        };

        for segment in &self.surface.break_even.segments {
            let (a, b) = (project(segment.start), project(segment.end));
            ctx.draw(&Line::new(a.0, a.1, b.0, b.1, BREAK_EVEN_SURFACE_COLOR));
        }
    }

    fn draw_labels(&self, ctx: &mut Context) {
        let (lo, hi) = self.range;
        let spend_label = self.camera.project(0.0, -1.3, -1.0);
        let roas_label = self.camera.project(-1.3, 0.0, -1.0);
        let top_label = self.camera.project(-1.0, -1.0, 1.0);
        let bottom_label = self.camera.project(-1.0, -1.0, -1.0);

        ctx.print(spend_label.0, spend_label.1, TextLine::from("Spend €".fg(HELP_COLOR)));
        ctx.print(roas_label.0, roas_label.1, TextLine::from("ROAS".fg(HELP_COLOR)));
        ctx.print(
            top_label.0,
            top_label.1,
            TextLine::from(format_euro_short(hi).fg(HELP_COLOR)),
        );
        ctx.print(
            bottom_label.0,
            bottom_label.1,
            TextLine::from(format_euro_short(lo).fg(HELP_COLOR)),
        );
    }

    pub fn render(self, frame: &mut Frame, area: Rect, block: Block) {
        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds([-1.0, 1.0])
            .y_bounds([-1.0, 1.0])
            .paint(|ctx| {
                self.draw_wireframe(ctx);
                ctx.layer();
                self.draw_break_even(ctx);
                if let Some((p, _)) = self.crosshair.and_then(|(row, col)| self.vertex(row, col)) {
                    ctx.draw(&Points {
                        coords: &[p],
                        color: Color::White,
                    });
                }
                self.draw_labels(ctx);
            });

        frame.render_widget(canvas, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profitmap_core::{ProfitParameters, SurfaceAxes, compute_surface};

    #[test]
    fn test_line_indices_include_last() {
        let surface = compute_surface(&ProfitParameters::default(), &SurfaceAxes::default());
        let plot = SurfacePlot::new(&surface, Camera::default()).stride(5);

        let indices = plot.line_indices(100);
        assert_eq!(indices.first(), Some(&0));
        assert_eq!(indices.last(), Some(&99));
        assert_eq!(indices.len(), 21);
        assert!(plot.line_indices(0).is_empty());
    }

    #[test]
    fn test_vertex_heights_span_unit_range() {
        let surface = compute_surface(&ProfitParameters::default(), &SurfaceAxes::default());
        let plot = SurfacePlot::new(&surface, Camera::default());

        // Worst profit at the lowest ROAS and highest spend, peak at both highest
        let (_, low) = plot.vertex(0, 99).unwrap();
        let (_, high) = plot.vertex(99, 99).unwrap();
        assert!(low.abs() < 1e-12);
        assert!((high - 1.0).abs() < 1e-12);
        assert!(plot.vertex(100, 0).is_none());
    }
}
