//! Error taxonomy for the profiling engine.
//!
//! Engine operations return [`ProfileResult`]. I/O edges (reading files,
//! loading configuration) use `anyhow` for context chains and are folded into
//! a [`ProfileError`] where they cross into the engine.

use serde::Serialize;
use thiserror::Error;

pub type ProfileResult<T> = std::result::Result<T, ProfileError>;

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProfileError {
    /// Malformed or ragged CSV, or bytes that are not valid UTF-8.
    #[error("Failed to parse CSV: {message}")]
    Parse { message: String },
    /// A quantitative column with no usable numeric values.
    #[error("Column '{column}' has no numeric values to summarise")]
    EmptyColumn { column: String },
    /// A selection that names a column absent from the current dataset.
    #[error("Column '{column}' not found in dataset")]
    UnknownColumn { column: String },
    #[error("Unknown axis role '{value}'")]
    UnknownAxisRole { value: String },
    #[error("Invalid configuration: {message}")]
    Config { message: String },
}

impl ProfileError {
    pub fn parse(err: impl Into<anyhow::Error>) -> Self {
        let err = err.into();
        ProfileError::Parse {
            message: format!("{err:#}"),
        }
    }

    pub fn unknown_column(column: impl Into<String>) -> Self {
        ProfileError::UnknownColumn {
            column: column.into(),
        }
    }

    /// Guidance text for the presentation layer.
    pub fn user_message(&self) -> String {
        match self {
            ProfileError::Parse { .. } => "Please select a valid CSV file.".to_string(),
            ProfileError::EmptyColumn { column } => {
                format!("'{column}' has no numeric values; select it as qualitative instead.")
            }
            ProfileError::UnknownColumn { column } => {
                format!("'{column}' is not a column of the current file; choose another column.")
            }
            ProfileError::UnknownAxisRole { .. } => {
                "Choose whether the axis column is explanatory or response.".to_string()
            }
            ProfileError::Config { message } => format!("Configuration error: {message}"),
        }
    }
}
