//! Business-cost parameters and their slider descriptors.

use serde::{Deserialize, Serialize};

use crate::error::ParamError;

/// Identifies one of the six adjustable parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamKey {
    WeekendMultiplier,
    ProductionCost,
    MarketingFee,
    WorkCost,
    FixedWorkCost,
    WorkloadScaling,
}

/// Static description of a parameter: range, slider step, default and query key
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    pub key: ParamKey,
    pub label: &'static str,
    pub query_key: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
    /// Decimal places shown and kept after nudging
    pub decimals: u32,
    /// Integer parameters are cast with `int` semantics when read from a query
    pub integer: bool,
}

impl ParamSpec {
    /// Clamp a value into this parameter's range, rounding integer parameters.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        let value = if value.is_nan() { self.default } else { value };
        let clamped = value.clamp(self.min, self.max);
        if self.integer { clamped.round() } else { clamped }
    }

    /// Round a value to the parameter's display precision.
    #[must_use]
    pub fn round(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.decimals as i32);
        (value * scale).round() / scale
    }

    /// Position of a value inside the range as a ratio (0.0 to 1.0)
    #[must_use]
    pub fn ratio(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }

    /// Format a value with the parameter's precision
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", self.decimals as usize, value)
    }
}

const SPECS: [ParamSpec; 6] = [
    ParamSpec {
        key: ParamKey::WeekendMultiplier,
        label: "Weekend Multiplier",
        query_key: "weekend_multiplier",
        min: 1.0,
        max: 2.0,
        step: 0.05,
        default: 1.2,
        decimals: 2,
        integer: false,
    },
    ParamSpec {
        key: ParamKey::ProductionCost,
        label: "Production Material Cost Percentage",
        query_key: "production_cost",
        min: 0.2,
        max: 0.6,
        step: 0.01,
        default: 0.3,
        decimals: 2,
        integer: false,
    },
    ParamSpec {
        key: ParamKey::MarketingFee,
        label: "Marketing Fee Percentage",
        query_key: "marketing_fee",
        min: 0.0,
        max: 0.2,
        step: 0.01,
        default: 0.15,
        decimals: 2,
        integer: false,
    },
    ParamSpec {
        key: ParamKey::WorkCost,
        label: "Work Cost Percentage",
        query_key: "work_cost",
        min: 0.0,
        max: 0.6,
        step: 0.01,
        default: 0.2,
        decimals: 2,
        integer: false,
    },
    ParamSpec {
        key: ParamKey::FixedWorkCost,
        label: "Fixed Work Cost Per Day",
        query_key: "fixed_work_cost",
        min: 0.0,
        max: 500.0,
        step: 10.0,
        default: 0.0,
        decimals: 0,
        integer: true,
    },
    ParamSpec {
        key: ParamKey::WorkloadScaling,
        label: "Workload Scaling Factor per 1000€",
        query_key: "workload_scaling",
        min: 0.0,
        max: 0.1,
        step: 0.0001,
        default: 0.01,
        decimals: 4,
        integer: false,
    },
];

impl ParamKey {
    /// All parameters in display (and query-string) order
    pub const ALL: [ParamKey; 6] = [
        ParamKey::WeekendMultiplier,
        ParamKey::ProductionCost,
        ParamKey::MarketingFee,
        ParamKey::WorkCost,
        ParamKey::FixedWorkCost,
        ParamKey::WorkloadScaling,
    ];

    #[must_use]
    pub fn spec(self) -> &'static ParamSpec {
        &SPECS[self.index()]
    }

    #[must_use]
    pub fn index(self) -> usize {
        match self {
            ParamKey::WeekendMultiplier => 0,
            ParamKey::ProductionCost => 1,
            ParamKey::MarketingFee => 2,
            ParamKey::WorkCost => 3,
            ParamKey::FixedWorkCost => 4,
            ParamKey::WorkloadScaling => 5,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        self.spec().label
    }

    #[must_use]
    pub fn query_key(self) -> &'static str {
        self.spec().query_key
    }

    /// Look up a parameter by its query-string key
    #[must_use]
    pub fn from_query_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.query_key() == key)
    }
}

/// The six business-cost parameters for one evaluation of the profit model.
///
/// Values are plain scalars; range enforcement is left to whoever produces them
/// (see [`ProfitParameters::clamped`] and [`ProfitParameters::validate`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfitParameters {
    /// Multiplier applied to work cost (weekend staffing)
    pub weekend_multiplier: f64,
    /// Share of revenue spent on production material
    pub production_cost_percentage: f64,
    /// Fee charged on top of marketing spend
    pub marketing_fee_percentage: f64,
    /// Base share of revenue spent on work
    pub work_cost_percentage: f64,
    /// Fixed work cost in € per day
    pub fixed_work_cost: u32,
    /// Growth of the work cost rate per 1000€ of revenue
    pub workload_scaling_factor_per_1000e: f64,
}

impl Default for ProfitParameters {
    fn default() -> Self {
        Self {
            weekend_multiplier: 1.2,
            production_cost_percentage: 0.3,
            marketing_fee_percentage: 0.15,
            work_cost_percentage: 0.2,
            fixed_work_cost: 0,
            workload_scaling_factor_per_1000e: 0.01,
        }
    }
}

impl ProfitParameters {
    /// Scaling factor per € of revenue
    #[must_use]
    pub fn workload_scaling_factor(&self) -> f64 {
        self.workload_scaling_factor_per_1000e / 1000.0
    }

    #[must_use]
    pub fn get(&self, key: ParamKey) -> f64 {
        match key {
            ParamKey::WeekendMultiplier => self.weekend_multiplier,
            ParamKey::ProductionCost => self.production_cost_percentage,
            ParamKey::MarketingFee => self.marketing_fee_percentage,
            ParamKey::WorkCost => self.work_cost_percentage,
            ParamKey::FixedWorkCost => f64::from(self.fixed_work_cost),
            ParamKey::WorkloadScaling => self.workload_scaling_factor_per_1000e,
        }
    }

    /// Set a parameter, clamping it into its range.
    pub fn set(&mut self, key: ParamKey, value: f64) {
        let value = key.spec().clamp(value);
        self.set_raw(key, value);
    }

    fn set_raw(&mut self, key: ParamKey, value: f64) {
        match key {
            ParamKey::WeekendMultiplier => self.weekend_multiplier = value,
            ParamKey::ProductionCost => self.production_cost_percentage = value,
            ParamKey::MarketingFee => self.marketing_fee_percentage = value,
            ParamKey::WorkCost => self.work_cost_percentage = value,
            ParamKey::FixedWorkCost => self.fixed_work_cost = value.max(0.0).round() as u32,
            ParamKey::WorkloadScaling => self.workload_scaling_factor_per_1000e = value,
        }
    }

    /// Move a parameter by a number of slider steps, staying inside its range.
    ///
    /// Returns `true` if the value changed.
    pub fn nudge(&mut self, key: ParamKey, steps: i32) -> bool {
        let spec = key.spec();
        let before = self.get(key);
        let after = spec.clamp(spec.round(before + spec.step * f64::from(steps)));
        self.set_raw(key, after);
        self.get(key) != before
    }

    /// Copy with every field clamped into its slider range
    #[must_use]
    pub fn clamped(&self) -> Self {
        let mut out = *self;
        for key in ParamKey::ALL {
            out.set(key, self.get(key));
        }
        out
    }

    /// Check that every field lies inside its slider range.
    pub fn validate(&self) -> Result<(), ParamError> {
        for key in ParamKey::ALL {
            let spec = key.spec();
            let value = self.get(key);
            if !(spec.min..=spec.max).contains(&value) {
                return Err(ParamError::OutOfRange {
                    key,
                    value,
                    min: spec.min,
                    max: spec.max,
                });
            }
        }
        Ok(())
    }
}
