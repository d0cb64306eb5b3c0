//! Error types for gff-costing

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Ambiguous or incomplete engine input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("no ingredient is flagged as auto-balanced")]
    NoAutoBalanced,

    #[error("multiple ingredients are flagged as auto-balanced: {}", .0.join(", "))]
    MultipleAutoBalanced(Vec<String>),

    #[error("packaging item missing: {0}")]
    MissingPackagingItem(String),

    #[error("packaging item listed more than once: {0}")]
    DuplicatePackagingItem(String),
}

/// A divisor in the costing chain is zero or negative
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DivisionError {
    #[error("batch size must be positive, got {0} kg")]
    NonPositiveBatchSize(f64),

    #[error("box profile {0} has zero inner units per box")]
    ZeroInnerUnits(String),

    #[error("box profile {0} has a non-positive net weight")]
    NonPositiveNetWeight(String),
}

/// Errors raised by the costing engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CostingError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Division error: {0}")]
    Division(#[from] DivisionError),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Costing error: {0}")]
    Costing(#[from] CostingError),

    #[error("Invalid recipe: {0}")]
    RecipeFormat(String),

    #[error("Unknown ingredient: {0}")]
    UnknownIngredient(String),

    #[error("Report parse error: {0}")]
    ReportParse(String),

    #[error("Excel export error: {0}")]
    Excel(String),
}

impl From<ConfigurationError> for Error {
    fn from(err: ConfigurationError) -> Self {
        Error::Costing(err.into())
    }
}

impl From<DivisionError> for Error {
    fn from(err: DivisionError) -> Self {
        Error::Costing(err.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
