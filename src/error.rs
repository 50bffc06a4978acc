//! Error types for loading, validating and exporting projections

use std::path::PathBuf;

use crate::inputs::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum CalculatorError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Row numbers are 1-based and exclude the header
    #[error("scenario {row} is invalid:\n{errors}")]
    InvalidScenario { row: usize, errors: ValidationErrors },

    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
