//! Dashboard configuration stored alongside the parameters.

use profitmap_core::{Axis, SurfaceAxes};
use serde::{Deserialize, Serialize};

/// Configuration stored in config.yaml (native) or LocalStorage (web)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Marketing spend and ROAS axes of the surface
    pub axes: SurfaceAxes,
    /// Number of filled-contour levels on the efficiency map
    pub efficiency_levels: usize,
    /// Every n-th grid line is drawn in the 3-D views
    pub wireframe_stride: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            axes: SurfaceAxes::default(),
            efficiency_levels: 20,
            wireframe_stride: 5,
        }
    }
}

impl DashboardConfig {
    /// Copy with unusable values replaced: axes need at least two points and
    /// a non-empty range, and at least two contour levels are required.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let axis = |axis: Axis, fallback: Axis| {
            let usable = axis.count >= 2
                && axis.min.is_finite()
                && axis.max.is_finite()
                && axis.max > axis.min;
            if usable { axis } else { fallback }
        };

        Self {
            axes: SurfaceAxes {
                spend: axis(self.axes.spend, defaults.axes.spend),
                roas: axis(self.axes.roas, defaults.axes.roas),
            },
            efficiency_levels: self.efficiency_levels.max(2),
            wireframe_stride: self.wireframe_stride.max(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitized_keeps_valid_config() {
        let config = DashboardConfig::default();
        assert_eq!(config.sanitized(), config);
    }

    #[test]
    fn test_sanitized_replaces_broken_values() {
        let config = DashboardConfig {
            axes: SurfaceAxes {
                spend: Axis::new(500.0, 100.0, 50),
                roas: Axis::new(1.0, 4.0, 1),
            },
            efficiency_levels: 0,
            wireframe_stride: 0,
        };
        let fixed = config.sanitized();
        assert_eq!(fixed.axes, SurfaceAxes::default());
        assert_eq!(fixed.efficiency_levels, 2);
        assert_eq!(fixed.wireframe_stride, 1);
    }

    #[test]
    fn test_yaml_round_trip_with_missing_fields() {
        let yaml = "efficiency_levels: 12\n";
        let config: DashboardConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.efficiency_levels, 12);
        assert_eq!(config.wireframe_stride, 5);
        assert_eq!(config.axes, SurfaceAxes::default());

        let written = serde_saphyr::to_string(&config).unwrap();
        let reread: DashboardConfig = serde_saphyr::from_str(&written).unwrap();
        assert_eq!(reread, config);
    }
}
