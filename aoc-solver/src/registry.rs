//! Lookup over the generated part table

use crate::day::DaySpec;
use crate::error::SolverError;
use crate::instance::{PartFn, SolveResult, read_lines, solve_timed};

/// One row of the generated table: a single part of a single day
#[derive(Debug, Clone, Copy)]
pub struct DayPart {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The part number (1 or 2)
    pub part: u8,
    /// The solution function for this part
    pub solve: PartFn,
    /// Absolute path of the day's input file
    pub input: &'static str,
}

impl DayPart {
    /// Sort key of the table
    pub fn key(&self) -> (u16, u8, u8) {
        (self.year, self.day, self.part)
    }
}

/// Immutable registry over a table sorted by (year, day, part)
///
/// # Example
///
/// ```
/// use aoc_solver::{DayPart, PartRegistry, SolveError};
///
/// fn part1(lines: &[String]) -> Result<String, SolveError> {
///     Ok(lines.len().to_string())
/// }
///
/// static TABLE: &[DayPart] = &[DayPart {
///     year: 2023,
///     day: 1,
///     part: 1,
///     solve: part1,
///     input: "2023/day01/input.txt",
/// }];
///
/// let registry = PartRegistry::new(TABLE);
/// assert!(registry.find(2023, 1, 1).is_ok());
/// assert!(registry.find(2023, 1, 2).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PartRegistry {
    table: &'static [DayPart],
}

impl PartRegistry {
    /// Wrap a generated table
    pub fn new(table: &'static [DayPart]) -> Self {
        debug_assert!(table.is_sorted_by_key(DayPart::key));
        Self { table }
    }

    /// Find the entry for a year/day/part
    pub fn find(&self, year: u16, day: u8, part: u8) -> Result<&'static DayPart, SolverError> {
        self.table
            .binary_search_by(|e| e.key().cmp(&(year, day, part)))
            .map(|i| &self.table[i])
            .map_err(|_| SolverError::NotFound { year, day, part })
    }

    /// All parts of one day, in part order
    pub fn day_parts(&self, year: u16, day: u8) -> &'static [DayPart] {
        let start = self.table.partition_point(|e| (e.year, e.day) < (year, day));
        let end = self.table.partition_point(|e| (e.year, e.day) <= (year, day));
        &self.table[start..end]
    }

    /// All parts of one year, in day then part order
    pub fn year_parts(&self, year: u16) -> &'static [DayPart] {
        let start = self.table.partition_point(|e| e.year < year);
        let end = self.table.partition_point(|e| e.year <= year);
        &self.table[start..end]
    }

    /// All parts of a day spec that have a table entry
    pub fn spec_parts(&self, spec: &DaySpec) -> &'static [DayPart] {
        self.day_parts(spec.year, spec.day)
    }

    /// Read the entry's input and run its solution, timing the solve
    pub fn run(&self, entry: &DayPart) -> Result<SolveResult, SolverError> {
        let lines = read_lines(entry.input)?;
        tracing::debug!(
            year = entry.year,
            day = entry.day,
            part = entry.part,
            lines = lines.len(),
            "running solution"
        );
        Ok(solve_timed(entry.solve, &lines)?)
    }
}
