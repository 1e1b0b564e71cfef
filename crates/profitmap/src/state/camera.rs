/// Viewpoint for the 3-D surface views.
///
/// Points are projected from the unit cube `[-1, 1]^3` (spend, roas, profit)
/// onto the canvas plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Rotation around the vertical axis in degrees, kept in (-180, 180]
    pub azimuth: f64,
    /// Angle above the spend/roas plane in degrees, 0 to 90
    pub elevation: f64,
    pub zoom: f64,
}

const ROTATE_STEP: f64 = 5.0;
const TILT_STEP: f64 = 5.0;
const ZOOM_FACTOR: f64 = 1.1;
const MIN_ZOOM: f64 = 0.5;
const MAX_ZOOM: f64 = 3.0;
/// Keeps the rotated cube inside the canvas at zoom 1
const SCALE: f64 = 0.55;

impl Default for Camera {
    fn default() -> Self {
        Self {
            azimuth: -60.0,
            elevation: 30.0,
            zoom: 1.0,
        }
    }
}

impl Camera {
    /// Rotate by `steps` azimuth steps (positive is counter-clockwise)
    pub fn rotate(&mut self, steps: i32) {
        let azimuth = self.azimuth + ROTATE_STEP * f64::from(steps);
        self.azimuth = 180.0 - (180.0 - azimuth).rem_euclid(360.0);
    }

    /// Tilt by `steps` elevation steps (positive looks further down)
    pub fn tilt(&mut self, steps: i32) {
        self.elevation = (self.elevation + TILT_STEP * f64::from(steps)).clamp(0.0, 90.0);
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom * ZOOM_FACTOR).min(MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom / ZOOM_FACTOR).max(MIN_ZOOM);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Project a point of the unit cube to canvas coordinates
    pub fn project(&self, x: f64, y: f64, z: f64) -> (f64, f64) {
        let (sin_az, cos_az) = self.azimuth.to_radians().sin_cos();
        let (sin_el, cos_el) = self.elevation.to_radians().sin_cos();

        let across = x * cos_az - y * sin_az;
        let depth = x * sin_az + y * cos_az;

        let scale = SCALE * self.zoom;
        (across * scale, (z * cos_el + depth * sin_el) * scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_rotate_wraps_azimuth() {
        let mut camera = Camera {
            azimuth: 175.0,
            ..Default::default()
        };
        camera.rotate(1);
        assert!((camera.azimuth - 180.0).abs() < EPS);
        camera.rotate(1);
        assert!((camera.azimuth + 175.0).abs() < EPS);
        camera.rotate(-2);
        assert!((camera.azimuth - 175.0).abs() < EPS);
    }

    #[test]
    fn test_tilt_and_zoom_are_bounded() {
        let mut camera = Camera::default();
        camera.tilt(100);
        assert_eq!(camera.elevation, 90.0);
        camera.tilt(-100);
        assert_eq!(camera.elevation, 0.0);

        for _ in 0..50 {
            camera.zoom_in();
        }
        assert_eq!(camera.zoom, MAX_ZOOM);
        for _ in 0..50 {
            camera.zoom_out();
        }
        assert_eq!(camera.zoom, MIN_ZOOM);

        camera.reset();
        assert_eq!(camera, Camera::default());
    }

    #[test]
    fn test_projection_from_above_and_side() {
        let top = Camera {
            azimuth: 0.0,
            elevation: 90.0,
            zoom: 1.0,
        };
        let (px, py) = top.project(1.0, -1.0, 0.7);
        assert!((px - SCALE).abs() < EPS);
        assert!((py + SCALE).abs() < EPS);

        let side = Camera {
            azimuth: 0.0,
            elevation: 0.0,
            zoom: 1.0,
        };
        let (_, py) = side.project(0.3, 0.9, 1.0);
        assert!((py - SCALE).abs() < EPS);
    }
}
