//! Error types for Reitti

use thiserror::Error;

/// Main error type for Reitti operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid element at index {index}: ({x}, {y}) is not a finite coordinate")]
    InvalidElement { index: usize, x: f64, y: f64 },

    #[error("Not enough valid elements: need at least {needed}, got {got}")]
    InsufficientElements { needed: usize, got: usize },

    #[error("{operation} is not defined for {actual} geometries")]
    GeometryType {
        operation: &'static str,
        actual: &'static str,
    },

    #[error("{0}")]
    Other(String),
}

/// Result type alias for Reitti operations
pub type Result<T> = std::result::Result<T, Error>;
