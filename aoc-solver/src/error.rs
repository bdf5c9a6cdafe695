//! Error types for the solver library

use std::path::PathBuf;
use thiserror::Error;

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// Input format doesn't match expected structure
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The requested part number is not implemented
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wrap any error raised inside a solution
    pub fn failed(e: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        SolveError::SolveFailed(e.into())
    }
}

/// Error type for dispatcher operations
#[derive(Debug, Error)]
pub enum SolverError {
    /// No table entry for the given year, day and part
    #[error("Did not find a solution for day {day} part {part} ({year})")]
    NotFound { year: u16, day: u8, part: u8 },
    /// The input file of a day could not be read
    #[error("Unable to read input file {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}
