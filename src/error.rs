//! Error types for the loading and export collaborators
//!
//! The projection itself is total over its input domain and never fails;
//! only reading tariffs/scenarios and writing reports can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RevenueError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required tariff row was absent from the tariff file
    #[error("missing tariff entry: {0}")]
    MissingTariff(&'static str),

    #[error("invalid value for {field}: {value:?}")]
    InvalidValue { field: String, value: String },
}

pub type Result<T> = std::result::Result<T, RevenueError>;
