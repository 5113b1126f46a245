use thiserror::Error;

/// Why a feature property could not be used as a finite number.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidValue {
    /// The property is absent or `null`.
    #[error("value is missing")]
    Missing,
    /// The property holds something other than a number.
    #[error("value is not a number")]
    NotNumeric,
    /// The number is `NaN` or infinite.
    #[error("value {0} is not finite")]
    NonFinite(f64),
}

/// Errors produced while classifying, formatting or configuring layers.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid value: {0}")]
    InvalidValue(#[from] InvalidValue),
    /// No finite value was left to compute breaks from.
    #[error("series contains no usable values")]
    EmptySeries,
    #[error("class count must be at least 1")]
    InvalidClassCount,
    #[error("palette has {available} colors, {needed} classes requested")]
    PaletteTooShort { needed: usize, available: usize },
    /// A finite value fell outside every bin.
    #[error("value {0} lies outside every class")]
    Unclassified(f64),
    #[error("invalid color {0:?}")]
    InvalidColor(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
