//! Chart rendering for the profit surface.

pub mod heatmap;
pub mod surface;

/// Grid index sampled at pixel `pixel` of `pixels`, for a grid of `len` points
fn pixel_to_index(pixel: usize, pixels: usize, len: usize) -> usize {
    if pixels <= 1 || len <= 1 {
        return 0;
    }
    let idx = (pixel as f64 * (len - 1) as f64 / (pixels - 1) as f64).round() as usize;
    idx.min(len - 1)
}

/// Pixel nearest to grid index `index` of `len`, for `pixels` pixels
fn index_to_pixel(index: usize, len: usize, pixels: usize) -> usize {
    if pixels <= 1 || len <= 1 {
        return 0;
    }
    let px = (index as f64 * (pixels - 1) as f64 / (len - 1) as f64).round() as usize;
    px.min(pixels - 1)
}

/// Map `value` from `[min, max]` onto `[-1, 1]`
fn to_unit(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if span.abs() < f64::EPSILON {
        return 0.0;
    }
    2.0 * (value - min) / span - 1.0
}
