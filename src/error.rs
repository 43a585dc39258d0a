//! Error types
//!
//! Catalog construction and profile validation are the only fallible steps.
//! Scoring and ranking themselves never fail: missing attributes and empty
//! results are handled as values.

use thiserror::Error;

/// Catalog data violates a definition invariant
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog contains no crops")]
    Empty,

    #[error("duplicate crop key '{0}'")]
    DuplicateKey(String),

    #[error("crop '{crop}': {field} range {low}-{high} is invalid")]
    InvalidRange {
        crop: String,
        field: &'static str,
        low: f64,
        high: f64,
    },

    #[error("crop '{0}' lists no varieties")]
    NoVarieties(String),

    #[error("crop '{0}' accepts no soil types")]
    NoSoilTypes(String),

    #[error("crop '{0}' accepts no seasons")]
    NoSeasons(String),

    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Farm profile is missing a field required for evaluation
#[derive(Debug, Error, PartialEq)]
pub enum ProfileError {
    #[error("location is required")]
    MissingLocation,

    #[error("farm size is required")]
    MissingFarmSize,

    #[error("farm size must be a positive number of hectares, got {0}")]
    InvalidFarmSize(f64),

    #[error("soil type is required")]
    MissingSoilType,

    #[error("{field} must be a finite number, got {value}")]
    NonFiniteValue { field: &'static str, value: f64 },
}
