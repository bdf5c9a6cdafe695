//! Advent of Code code generation
//!
//! Maintains the solution tree under a project root:
//!
//! - [`DayLayout`] knows where a day's solution, input and description live
//! - [`scaffold_day`] creates a new solution file from a template
//! - [`generate`] scans the tree for solution files
//! - [`write_table`] emits the day table the runner compiles in
//!
//! # Example
//!
//! ```no_run
//! use aoc_codegen::{DayLayout, generate, write_table};
//!
//! # fn main() -> Result<(), aoc_codegen::CodegenError> {
//! let layout = DayLayout::new("/path/to/advent-of-code");
//! let index = generate(layout.root())?;
//! write_table(&layout, &index)?;
//! # Ok(())
//! # }
//! ```

mod error;
mod layout;
mod scaffold;
mod scan;
mod table;

pub use error::CodegenError;
pub use layout::{DESCRIPTION_FILE, DayLayout, INPUT_FILE, solution_file_name};
pub use scaffold::{Scaffolded, render_day, scaffold_day};
pub use scan::{GeneratedIndex, generate};
pub use table::{module_name, render_table, write_table};
