//! Query-string encoding of [`ProfitParameters`].
//!
//! Parameters are shared as `application/x-www-form-urlencoded` pairs under
//! the keys of [`ParamKey::query_key`]. Reading is lenient: missing keys and
//! values that fail to cast fall back to the default, unknown keys are ignored,
//! and a repeated key takes its last value.

use url::form_urlencoded;

use crate::error::QueryError;
use crate::model::{ParamKey, ProfitParameters};

/// Result of reading parameters from a query string
#[derive(Debug, Clone, PartialEq)]
pub struct QueryLoad {
    pub params: ProfitParameters,
    /// Values that could not be cast and were replaced by their default
    pub rejected: Vec<QueryError>,
}

impl QueryLoad {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

impl ProfitParameters {
    /// Read parameters from a query string; a leading `?` is optional.
    #[must_use]
    pub fn from_query(query: &str) -> QueryLoad {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self::from_pairs(form_urlencoded::parse(query.as_bytes()))
    }

    /// Read parameters from decoded key/value pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> QueryLoad
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut raw: [Option<String>; 6] = Default::default();
        for (key, value) in pairs {
            if let Some(key) = ParamKey::from_query_key(key.as_ref()) {
                raw[key.index()] = Some(value.as_ref().to_string());
            }
        }

        let mut params = ProfitParameters::default();
        let mut rejected = Vec::new();

        for key in ParamKey::ALL {
            let Some(value) = raw[key.index()].take() else {
                continue;
            };
            match cast(key, &value) {
                Some(parsed) => params.assign(key, parsed),
                None => rejected.push(QueryError::Malformed { key, value }),
            }
        }

        QueryLoad { params, rejected }
    }

    /// Encode all six parameters as a query string (without the leading `?`).
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for key in ParamKey::ALL {
            let value = match key {
                ParamKey::FixedWorkCost => self.fixed_work_cost.to_string(),
                _ => self.get(key).to_string(),
            };
            serializer.append_pair(key.query_key(), &value);
        }
        serializer.finish()
    }

    /// Store a cast value without range enforcement
    fn assign(&mut self, key: ParamKey, value: f64) {
        match key {
            ParamKey::WeekendMultiplier => self.weekend_multiplier = value,
            ParamKey::ProductionCost => self.production_cost_percentage = value,
            ParamKey::MarketingFee => self.marketing_fee_percentage = value,
            ParamKey::WorkCost => self.work_cost_percentage = value,
            ParamKey::FixedWorkCost => self.fixed_work_cost = value as u32,
            ParamKey::WorkloadScaling => self.workload_scaling_factor_per_1000e = value,
        }
    }
}

/// Cast a raw value with the parameter's type: strict integers for the
/// integer parameter, finite decimals for the rest.
fn cast(key: ParamKey, value: &str) -> Option<f64> {
    let value = value.trim();
    if key.spec().integer {
        let parsed: i64 = value.parse().ok()?;
        // Negative counts saturate to zero; the slider range does the rest
        Some(parsed.clamp(0, i64::from(u32::MAX)) as f64)
    } else {
        value.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_integer_is_strict() {
        assert_eq!(cast(ParamKey::FixedWorkCost, "120"), Some(120.0));
        assert_eq!(cast(ParamKey::FixedWorkCost, " 40 "), Some(40.0));
        assert_eq!(cast(ParamKey::FixedWorkCost, "-5"), Some(0.0));
        assert_eq!(cast(ParamKey::FixedWorkCost, "10.5"), None);
        assert_eq!(cast(ParamKey::FixedWorkCost, ""), None);
    }

    #[test]
    fn test_cast_float_rejects_non_finite() {
        assert_eq!(cast(ParamKey::MarketingFee, "0.1"), Some(0.1));
        assert_eq!(cast(ParamKey::MarketingFee, "1e-2"), Some(0.01));
        assert_eq!(cast(ParamKey::MarketingFee, "inf"), None);
        assert_eq!(cast(ParamKey::MarketingFee, "NaN"), None);
        assert_eq!(cast(ParamKey::MarketingFee, "abc"), None);
    }
}
