//! Unified application error type.
//! Every module (store, core, cli, export) returns AppError so the binary has
//! a single place where failures are reported.

use crate::core::coerce::FieldError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store
    // ---------------------------
    /// The tabular store could not be opened, read or written.
    #[error("Store unreachable ({store}): {reason}")]
    StoreUnavailable { store: String, reason: String },

    // ---------------------------
    // Input / parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Unknown driver '{0}' (not in the configured roster)")]
    UnknownDriver(String),

    #[error("Validation failed: {0}")]
    Validation(#[from] FieldError),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// Wrap any backend failure as the single "store unreachable" condition.
    pub fn store<E: std::fmt::Display>(store: &str, err: E) -> Self {
        AppError::StoreUnavailable {
            store: store.to_string(),
            reason: err.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
