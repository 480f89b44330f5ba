//! CLI-specific error types

use crate::convert::ConversionError;
use crate::export::ExportError;
use crate::import::ImportError;
use std::path::PathBuf;
use thiserror::Error;

/// CLI-specific error type
#[derive(Error, Debug)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read file {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Failed to write file {0}: {1}")]
    FileWriteError(PathBuf, String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Import error: {0}")]
    ImportError(#[from] ImportError),

    #[error("Export error: {0}")]
    ExportError(#[from] ExportError),

    #[error("Conversion error: {0}")]
    ConversionError(#[from] ConversionError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
