//! Perceptual colormaps sampled into terminal RGB colors.

use ratatui::style::Color;

/// Anchor points at t = 0, 1/8, ..., 1
type Anchors = [(u8, u8, u8); 9];

const VIRIDIS: Anchors = [
    (68, 1, 84),
    (71, 44, 122),
    (59, 81, 139),
    (44, 113, 142),
    (33, 144, 141),
    (39, 173, 129),
    (92, 200, 99),
    (170, 220, 50),
    (253, 231, 37),
];

const PLASMA: Anchors = [
    (13, 8, 135),
    (75, 3, 161),
    (125, 3, 168),
    (168, 34, 150),
    (203, 70, 121),
    (229, 107, 93),
    (248, 148, 65),
    (253, 195, 40),
    (240, 249, 33),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Colormap {
    /// Efficiency map bands
    Plasma,
    /// Profit surface wireframe
    Viridis,
}

impl Colormap {
    fn anchors(self) -> &'static Anchors {
        match self {
            Colormap::Plasma => &PLASMA,
            Colormap::Viridis => &VIRIDIS,
        }
    }

    /// Color at position `t` (clamped to 0.0..=1.0), linearly interpolated
    /// between anchors.
    pub fn sample(self, t: f64) -> Color {
        let anchors = self.anchors();
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let scaled = t * (anchors.len() - 1) as f64;
        let lower = (scaled.floor() as usize).min(anchors.len() - 2);
        let frac = scaled - lower as f64;

        let (r0, g0, b0) = anchors[lower];
        let (r1, g1, b1) = anchors[lower + 1];
        let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * frac).round() as u8;

        Color::Rgb(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
    }

    /// Color of band `index` out of `count` discrete bands
    pub fn band(self, index: usize, count: usize) -> Color {
        if count <= 1 {
            return self.sample(0.5);
        }
        self.sample(index as f64 / (count - 1) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_endpoints() {
        assert_eq!(Colormap::Viridis.sample(0.0), Color::Rgb(68, 1, 84));
        assert_eq!(Colormap::Viridis.sample(1.0), Color::Rgb(253, 231, 37));
        assert_eq!(Colormap::Plasma.sample(-3.0), Color::Rgb(13, 8, 135));
        assert_eq!(Colormap::Plasma.sample(7.0), Color::Rgb(240, 249, 33));
    }

    #[test]
    fn test_sample_interpolates_between_anchors() {
        // Halfway between the first two viridis anchors
        assert_eq!(Colormap::Viridis.sample(1.0 / 16.0), Color::Rgb(70, 23, 103));
    }

    #[test]
    fn test_band_spans_full_map() {
        assert_eq!(Colormap::Plasma.band(0, 19), Colormap::Plasma.sample(0.0));
        assert_eq!(Colormap::Plasma.band(18, 19), Colormap::Plasma.sample(1.0));
    }
}
