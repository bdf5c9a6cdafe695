//! Advent of Code Solver Library
//!
//! Runtime support shared by the code generator and the runner binary.
//!
//! # Overview
//!
//! This library provides:
//! - [`DaySpec`], identifying a puzzle day and how many parts it has
//! - [`DayPart`], one row of the generated `(year, day, part)` table
//! - [`PartRegistry`], lookup and timed execution over that table
//! - Error types for solutions ([`SolveError`]) and dispatch ([`SolverError`])
//!
//! # Writing a solution
//!
//! A day is a module with one function per part, all sharing the [`PartFn`]
//! signature. The input file is read eagerly and passed in as lines:
//!
//! ```
//! use aoc_solver::SolveError;
//!
//! pub fn part1(lines: &[String]) -> Result<String, SolveError> {
//!     lines
//!         .iter()
//!         .map(|l| l.parse::<i64>().map_err(SolveError::failed))
//!         .sum::<Result<i64, _>>()
//!         .map(|sum| sum.to_string())
//! }
//!
//! let lines = vec!["1".to_string(), "2".to_string()];
//! assert_eq!(part1(&lines).unwrap(), "3");
//! ```

mod day;
mod error;
mod instance;
mod registry;

pub use day::{
    BASE_YEAR, DAYS_PER_YEAR, DaySpec, LAST_25_DAY_YEAR, SHORT_EVENT_FINAL_DAY, day_dir_name,
    parts_for,
};
pub use error::{SolveError, SolverError};
pub use instance::{PartFn, SolveResult, read_lines, solve_timed};
pub use registry::{DayPart, PartRegistry};
