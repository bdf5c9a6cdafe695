//! Creation of new solution files from the day template

use crate::error::CodegenError;
use crate::layout::DayLayout;
use askama::Template;
use aoc_solver::DaySpec;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Template)]
#[template(path = "day.rs.j2", escape = "none")]
struct DayTemplate {
    year: u16,
    day: u8,
    parts: u8,
}

/// What [`scaffold_day`] did with the solution file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scaffolded {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

/// Render the solution file for a day
pub fn render_day(spec: &DaySpec) -> Result<String, CodegenError> {
    let mut source = DayTemplate {
        year: spec.year,
        day: spec.day,
        parts: spec.parts,
    }
    .render()?;
    source.truncate(source.trim_end().len());
    source.push('\n');
    Ok(source)
}

/// Create `{year}/day{DD}/day{DD}.rs` from the template
///
/// An existing solution file is left untouched.
pub fn scaffold_day(layout: &DayLayout, spec: &DaySpec) -> Result<Scaffolded, CodegenError> {
    layout.ensure_day_dir(spec.year, spec.day)?;
    let path = layout.solution_path(spec.year, spec.day);
    let source = render_day(spec)?;

    let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            warn!("{} already exists, will not overwrite", path.display());
            return Ok(Scaffolded::AlreadyExists(path));
        }
        Err(e) => return Err(CodegenError::write(&path)(e)),
    };

    file.write_all(source.as_bytes())
        .map_err(CodegenError::write(&path))?;
    info!("Scaffolded {}", path.display());
    Ok(Scaffolded::Created(path))
}
