//! Runs table entries and reports answers with timings

use crate::error::RunError;
use crate::output::format_duration;
use aoc_solver::{DayPart, DaySpec, PartRegistry, SolverError};
use chrono::TimeDelta;
use itertools::Itertools;
use std::io::Write;
use tracing::{info, warn};

/// Writes run reports for a registry to `out`
pub struct Runner<W> {
    registry: PartRegistry,
    out: W,
}

impl<W: Write> Runner<W> {
    pub fn new(registry: PartRegistry, out: W) -> Self {
        Self { registry, out }
    }

    /// Run every part of the current day
    pub fn run_current(&mut self, current: Option<DaySpec>) -> Result<(), RunError> {
        let spec = current.ok_or(RunError::NoCurrentDay)?;
        info!("Running current day {}", spec);
        let parts = self.registry.spec_parts(&spec);
        if parts.is_empty() {
            return Err(SolverError::NotFound {
                year: spec.year,
                day: spec.day,
                part: 1,
            }
            .into());
        }
        for entry in parts {
            self.run_part(entry.year, entry.day, entry.part)?;
        }
        Ok(())
    }

    /// Run one part, or every part of a day when `part` is `None`
    pub fn run_day(&mut self, year: u16, day: u8, part: Option<u8>) -> Result<(), RunError> {
        match part {
            Some(part) => self.run_part(year, day, part),
            None => {
                let parts = self.registry.day_parts(year, day);
                if parts.is_empty() {
                    return Err(SolverError::NotFound { year, day, part: 1 }.into());
                }
                for entry in parts {
                    self.run_part(entry.year, entry.day, entry.part)?;
                }
                Ok(())
            }
        }
    }

    /// Print `Day D part P (Y)`, the answer and the elapsed time
    fn run_part(&mut self, year: u16, day: u8, part: u8) -> Result<(), RunError> {
        let entry = self.registry.find(year, day, part)?;
        writeln!(self.out, "Day {} part {} ({})", day, part, year)?;
        let result = self.registry.run(entry)?;
        writeln!(self.out, "{}", result.answer)?;
        writeln!(
            self.out,
            "Time elapsed: {}",
            format_duration(result.duration())
        )?;
        Ok(())
    }

    /// Run every day of a year, grouped by day, and print the overall time
    pub fn run_year(&mut self, year: u16) -> Result<TimeDelta, RunError> {
        let mut overall = TimeDelta::zero();
        let entries = self.registry.year_parts(year);

        for (day, parts) in &entries.iter().chunk_by(|entry| entry.day) {
            writeln!(self.out, "({}) Day {:02}", year, day)?;
            for entry in parts {
                overall += self.run_entry(entry)?;
            }
            writeln!(self.out)?;
        }

        if entries.is_empty() {
            warn!("No solutions found for year {}", year);
        } else {
            writeln!(
                self.out,
                "({}) Overall time elapsed: {}",
                year,
                format_duration(overall)
            )?;
        }
        Ok(overall)
    }

    fn run_entry(&mut self, entry: &DayPart) -> Result<TimeDelta, RunError> {
        let result = self.registry.run(entry)?;
        let duration = result.duration();
        writeln!(
            self.out,
            "part {}: {} (duration: {})",
            entry.part,
            result.answer,
            format_duration(duration)
        )?;
        Ok(duration)
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
