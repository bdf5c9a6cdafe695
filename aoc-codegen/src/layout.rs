//! On-disk layout of the solution tree
//!
//! ```text
//! {root}/{year}/day{DD}/day{DD}.rs
//! {root}/{year}/day{DD}/input.txt
//! {root}/{year}/day{DD}/description.md
//! {root}/aoc-runner/src/day_parts.rs
//! ```

use crate::error::CodegenError;
use aoc_solver::day_dir_name;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Name of the puzzle input file inside a day directory
pub const INPUT_FILE: &str = "input.txt";

/// Name of the puzzle description file inside a day directory
pub const DESCRIPTION_FILE: &str = "description.md";

/// Path helpers rooted at the project directory
#[derive(Debug, Clone)]
pub struct DayLayout {
    root: PathBuf,
}

impl DayLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `{root}/{year}`
    pub fn year_dir(&self, year: u16) -> PathBuf {
        self.root.join(year.to_string())
    }

    /// `{root}/{year}/day{DD}`
    pub fn day_dir(&self, year: u16, day: u8) -> PathBuf {
        self.year_dir(year).join(day_dir_name(day))
    }

    /// `{root}/{year}/day{DD}/day{DD}.rs`
    pub fn solution_path(&self, year: u16, day: u8) -> PathBuf {
        self.day_dir(year, day).join(solution_file_name(day))
    }

    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.day_dir(year, day).join(INPUT_FILE)
    }

    pub fn description_path(&self, year: u16, day: u8) -> PathBuf {
        self.day_dir(year, day).join(DESCRIPTION_FILE)
    }

    /// Location of the generated day table inside the runner crate
    pub fn table_path(&self) -> PathBuf {
        self.root.join("aoc-runner").join("src").join("day_parts.rs")
    }

    /// Create the day directory if it does not exist yet
    pub fn ensure_day_dir(&self, year: u16, day: u8) -> Result<PathBuf, CodegenError> {
        let dir = self.day_dir(year, day);
        fs::create_dir_all(&dir).map_err(CodegenError::write(&dir))?;
        Ok(dir)
    }

    /// Store a puzzle input, returning the number of bytes written
    pub fn write_input(&self, year: u16, day: u8, input: &str) -> Result<usize, CodegenError> {
        self.ensure_day_dir(year, day)?;
        let path = self.input_path(year, day);
        fs::write(&path, input).map_err(CodegenError::write(&path))?;
        info!("Wrote {} bytes of input to {}", input.len(), path.display());
        Ok(input.len())
    }

    /// Store a puzzle description, returning the number of bytes written
    pub fn write_description(
        &self,
        year: u16,
        day: u8,
        markdown: &str,
    ) -> Result<usize, CodegenError> {
        self.ensure_day_dir(year, day)?;
        let path = self.description_path(year, day);
        fs::write(&path, markdown).map_err(CodegenError::write(&path))?;
        info!(
            "Wrote {} bytes of Markdown to {}",
            markdown.len(),
            path.display()
        );
        Ok(markdown.len())
    }
}

/// `day07.rs` for day 7
pub fn solution_file_name(day: u8) -> String {
    format!("{}.rs", day_dir_name(day))
}
