//! Error types for the runner

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunError {
    /// Nothing to run without arguments
    #[error("No current day in the day table, run `aoc gen` or pass --year and --day")]
    NoCurrentDay,

    /// Lookup, input or solve failure
    #[error(transparent)]
    Solver(#[from] aoc_solver::SolverError),

    /// Writing the report failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
