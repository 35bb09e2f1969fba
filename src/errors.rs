//! Typed errors for estimation and persistence operations.
//!
//! The estimation engine rejects bad input before any arithmetic runs, so a
//! failed analysis never produces a partial record. Numeric text that does
//! not parse is an explicit `Parse` error rather than a propagated NaN.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EstimapError {
    /// Required field missing, empty, or outside its domain.
    #[error("validation failed: {message}")]
    Validation { message: String },

    /// A numeric field could not be parsed from text.
    #[error("field `{field}` is not a valid number: `{value}`")]
    Parse { field: String, value: String },

    /// Configuration file problems.
    #[error("configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Persistence failures that are not plain I/O or serde errors.
    #[error("storage error: {message}")]
    Store { message: String },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl EstimapError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn parse(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Parse {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    pub fn config_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    /// True for errors the user can fix by correcting their input.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::Parse { .. })
    }
}

pub type Result<T> = std::result::Result<T, EstimapError>;
