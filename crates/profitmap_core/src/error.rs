use std::fmt;

use crate::model::ParamKey;

/// Errors related to parameter ranges
#[derive(Debug, Clone, PartialEq)]
pub enum ParamError {
    OutOfRange {
        key: ParamKey,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl fmt::Display for ParamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamError::OutOfRange {
                key,
                value,
                min,
                max,
            } => write!(
                f,
                "{} = {value} is outside [{min}, {max}]",
                key.query_key()
            ),
        }
    }
}

impl std::error::Error for ParamError {}

/// Errors related to reading parameters from a query string
#[derive(Debug, Clone, PartialEq)]
pub enum QueryError {
    /// The value could not be cast to the parameter's type; the default was used
    Malformed { key: ParamKey, value: String },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Malformed { key, value } => {
                let kind = if key.spec().integer { "integer" } else { "number" };
                write!(
                    f,
                    "{}: {value:?} is not a valid {kind}, using default {}",
                    key.query_key(),
                    key.spec().default
                )
            }
        }
    }
}

impl std::error::Error for QueryError {}
