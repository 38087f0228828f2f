//! Custom error types for splitcheck
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::amount::AmountParseError;

/// The main error type for splitcheck operations
#[derive(Error, Debug)]
pub enum SplitError {
    /// Empty or blank settlement group identifier
    #[error("Invalid group id: {0}")]
    InvalidGroupId(String),

    /// A check with payments but nobody to split them
    #[error("Check '{check}' has no sharers to split the total")]
    EmptySharers {
        /// Id of the rejected check
        check: String,
    },

    /// Malformed or non-finite monetary amount
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// An edge update was attempted with a non-positive delta.
    /// Internal fault: correct fold staging never produces one.
    #[error("Invalid debt from '{from}' to '{to}': amount must be positive, got {amount}")]
    InvalidDebt {
        from: String,
        to: String,
        amount: f64,
    },

    /// Payer and sharer totals diverged after intersection reduction.
    /// Internal fault: the fold arithmetic guarantees they agree.
    #[error(
        "Ledger imbalance in group '{group}': payers total {payer_total:.3}, \
         sharers total {sharer_total:.3}"
    )]
    Imbalance {
        group: String,
        payer_total: f64,
        sharer_total: f64,
    },

    /// Validation errors for caller-supplied input
    #[error("Validation error: {0}")]
    Validation(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV serialization errors
    #[error("CSV error: {0}")]
    Csv(String),
}

impl SplitError {
    /// Check if this error kind indicates a defect in the fold algorithm
    /// rather than bad caller input
    pub fn is_internal_fault(&self) -> bool {
        matches!(self, Self::InvalidDebt { .. } | Self::Imbalance { .. })
    }

    /// Check if this is an invalid-amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SplitError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SplitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for SplitError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for SplitError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<AmountParseError> for SplitError {
    fn from(err: AmountParseError) -> Self {
        Self::InvalidAmount(err.to_string())
    }
}

/// Result type alias for splitcheck operations
pub type SplitResult<T> = Result<T, SplitError>;
