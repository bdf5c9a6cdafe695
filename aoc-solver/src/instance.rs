//! Timed execution of a single part

use crate::error::{SolveError, SolverError};
use chrono::{DateTime, TimeDelta, Utc};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Signature every generated table entry points at
pub type PartFn = fn(&[String]) -> Result<String, SolveError>;

/// Result from solving a puzzle part, including timing information
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The answer string
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Eagerly read all lines of an input file
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, SolverError> {
    let path = path.as_ref();
    let input_error = |source| SolverError::Input {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(input_error)?;
    BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(input_error)
}

/// Call a part function on already loaded lines and time it
///
/// Only the call itself is timed; reading the input is not.
pub fn solve_timed(solve: PartFn, lines: &[String]) -> Result<SolveResult, SolveError> {
    let solve_start = Utc::now();
    let answer = solve(lines)?;
    let solve_end = Utc::now();

    Ok(SolveResult {
        answer,
        solve_start,
        solve_end,
    })
}
