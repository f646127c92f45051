//! Diagnostic error types for polynumeral.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! giving every failure an error code and help text. [`PolyError`] wraps them
//! all so callers composing several subsystems can use a single `?` chain.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for polynumeral.
///
/// Each variant wraps a subsystem-specific error, preserving the full
/// diagnostic chain through to the caller.
#[derive(Debug, Error, Diagnostic)]
pub enum PolyError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Number(#[from] NumberError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Number errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic, PartialEq)]
pub enum NumberError {
    #[error("invalid number: {value}")]
    #[diagnostic(
        code(polynumeral::number::invalid),
        help("Numbers must be finite, whole and non-negative (e.g. 0, 7, 4239).")
    )]
    InvalidNumber { value: String },

    #[error("number {value} is out of range (max {max})")]
    #[diagnostic(
        code(polynumeral::number::out_of_range),
        help(
            "Place-value and quantity layouts cover four decimal digits. \
             Pick a number between 0 and {max}."
        )
    )]
    NumberOutOfRange { value: u64, max: u16 },
}

// ---------------------------------------------------------------------------
// Grid errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic, PartialEq)]
pub enum GridError {
    #[error("invalid cell: {message}")]
    #[diagnostic(
        code(polynumeral::grid::invalid_cell),
        help(
            "Rows and columns are whole numbers in [0, rows) and [0, cols), \
             and only points inside the drawn grid map to a cell."
        )
    )]
    InvalidCell { message: String },

    #[error("invalid grid dimensions: {message}")]
    #[diagnostic(
        code(polynumeral::grid::dimensions),
        help("A grid needs at least one row and column, and finite, non-negative sizes.")
    )]
    InvalidDimensions { message: String },
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read render config: {path}")]
    #[diagnostic(
        code(polynumeral::config::read),
        help("Ensure the config file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse render config: {path}: {message}")]
    #[diagnostic(
        code(polynumeral::config::parse),
        help("Check the TOML syntax and field names in the config file.")
    )]
    Parse { path: String, message: String },

    #[error("invalid render config: {path}: {field} {message}")]
    #[diagnostic(
        code(polynumeral::config::invalid),
        help("Spacings, gaps and buffers must be finite and non-negative.")
    )]
    Invalid {
        path: String,
        field: String,
        message: String,
    },

    #[error("failed to write render config: {path}")]
    #[diagnostic(
        code(polynumeral::config::write),
        help("Ensure you have write permissions to the target directory.")
    )]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience result alias for number validation.
pub type NumberResult<T> = std::result::Result<T, NumberError>;

/// Convenience result alias for grid mapping.
pub type GridResult<T> = std::result::Result<T, GridError>;

/// Convenience result alias for configuration I/O.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Convenience result alias for the whole crate.
pub type PolyResult<T> = std::result::Result<T, PolyError>;
