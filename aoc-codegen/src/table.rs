//! Rendering and writing of the generated day table

use crate::error::CodegenError;
use crate::layout::DayLayout;
use crate::scan::GeneratedIndex;
use askama::Template;
use aoc_solver::DaySpec;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

struct ModuleView {
    name: String,
    path: String,
}

struct PartView {
    year: u16,
    day: u8,
    part: u8,
    module: String,
    input: String,
}

#[derive(Template)]
#[template(path = "day_parts.rs.j2", escape = "none")]
struct DayPartsTemplate {
    modules: Vec<ModuleView>,
    parts: Vec<PartView>,
    current: String,
}

/// Module name a day's solution is mounted under, e.g. `y2023_day07`
pub fn module_name(spec: &DaySpec) -> String {
    format!("y{}_{}", spec.year, spec.dir_name())
}

/// Rust string literal of a path, always with forward slashes
fn path_literal(path: &Path) -> String {
    format!("{:?}", path.to_string_lossy().replace('\\', "/"))
}

/// Render the day table source for `index`
///
/// Every day contributes one `mod` declaration pointing at its solution file
/// and one table entry per part, in (year, day, part) order.
pub fn render_table(layout: &DayLayout, index: &GeneratedIndex) -> Result<String, CodegenError> {
    let modules = index
        .days
        .iter()
        .map(|spec| ModuleView {
            name: module_name(spec),
            path: path_literal(&layout.solution_path(spec.year, spec.day)),
        })
        .collect();

    let parts = index
        .days
        .iter()
        .flat_map(|spec| {
            let input = path_literal(&layout.input_path(spec.year, spec.day));
            spec.part_range().map(move |part| PartView {
                year: spec.year,
                day: spec.day,
                part,
                module: module_name(spec),
                input: input.clone(),
            })
        })
        .collect();

    let current = match index.current {
        Some(spec) => format!("Some(DaySpec::new({}, {}))", spec.year, spec.day),
        None => "None".to_string(),
    };

    let mut source = DayPartsTemplate {
        modules,
        parts,
        current,
    }
    .render()?;
    source.truncate(source.trim_end().len());
    source.push('\n');
    Ok(source)
}

/// Render the day table and replace the file at `layout.table_path()`
///
/// The source is written to a temporary file next to the target and renamed
/// over it, so readers never observe a partial table.
pub fn write_table(layout: &DayLayout, index: &GeneratedIndex) -> Result<PathBuf, CodegenError> {
    let source = render_table(layout, index)?;
    let path = layout.table_path();
    write_atomic(&path, source.as_bytes())?;
    info!(
        "Generated {} with {} days",
        path.display(),
        index.days.len()
    );
    Ok(path)
}

fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), CodegenError> {
    let dir = path.parent().unwrap_or(Path::new("."));
    std::fs::create_dir_all(dir).map_err(CodegenError::write(dir))?;

    let mut file = NamedTempFile::new_in(dir).map_err(CodegenError::write(dir))?;
    file.write_all(contents)
        .and_then(|()| file.as_file().sync_all())
        .map_err(CodegenError::write(file.path()))?;
    file.persist(path)
        .map_err(|e| CodegenError::write(path)(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn index(days: &[(u16, u8)], current: Option<(u16, u8)>) -> GeneratedIndex {
        GeneratedIndex {
            days: days.iter().map(|&(y, d)| DaySpec::new(y, d)).collect(),
            current: current.map(|(y, d)| DaySpec::new(y, d)),
        }
    }

    #[test]
    fn test_render_empty_table() {
        let layout = DayLayout::new("/aoc");
        let source = render_table(&layout, &GeneratedIndex::default()).unwrap();

        assert!(source.starts_with("// Code generated by `aoc gen`. DO NOT EDIT.\n"));
        assert!(source.contains("pub static DAY_PARTS: &[DayPart] = &[\n];"));
        assert!(source.contains("pub const CURRENT_DAY: Option<DaySpec> = None;"));
        assert!(!source.contains("mod y"));
        assert!(source.ends_with(";\n"));
    }

    #[test]
    fn test_render_table_entries() {
        let layout = DayLayout::new("/aoc");
        let source =
            render_table(&layout, &index(&[(2023, 7), (2024, 25)], Some((2023, 7)))).unwrap();

        assert!(source.contains("#[path = \"/aoc/2023/day07/day07.rs\"]\nmod y2023_day07;"));
        assert!(source.contains("#[path = \"/aoc/2024/day25/day25.rs\"]\nmod y2024_day25;"));
        assert!(source.contains("solve: y2023_day07::part1,"));
        assert!(source.contains("solve: y2023_day07::part2,"));
        assert!(source.contains("solve: y2024_day25::part1,"));
        assert!(!source.contains("y2024_day25::part2"));
        assert!(source.contains("input: \"/aoc/2023/day07/input.txt\","));
        assert!(
            source.contains("pub const CURRENT_DAY: Option<DaySpec> = Some(DaySpec::new(2023, 7));")
        );

        let order: Vec<usize> = [
            "y2023_day07::part1",
            "y2023_day07::part2",
            "y2024_day25::part1",
        ]
        .iter()
        .map(|needle| source.find(needle).unwrap())
        .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_path_literal_escapes() {
        assert_eq!(path_literal(Path::new("/a/b c/d.rs")), "\"/a/b c/d.rs\"");
        assert_eq!(path_literal(Path::new("C:\\aoc\\x.rs")), "\"C:/aoc/x.rs\"");
        assert_eq!(path_literal(Path::new("/a\"b")), "\"/a\\\"b\"");
    }

    #[test]
    fn test_write_table_replaces_file() {
        let temp = TempDir::new().unwrap();
        let layout = DayLayout::new(temp.path());
        fs::create_dir_all(layout.table_path().parent().unwrap()).unwrap();
        fs::write(layout.table_path(), "stale").unwrap();

        let path = write_table(&layout, &index(&[(2022, 1)], Some((2022, 1)))).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            render_table(&layout, &index(&[(2022, 1)], Some((2022, 1)))).unwrap()
        );
        let leftovers = fs::read_dir(path.parent().unwrap()).unwrap().count();
        assert_eq!(leftovers, 1);
    }

    #[test]
    fn test_failed_write_keeps_previous_table() {
        let temp = TempDir::new().unwrap();
        let layout = DayLayout::new(temp.path());
        let table = layout.table_path();
        fs::create_dir_all(&table).unwrap();

        let result = write_table(&layout, &GeneratedIndex::default());

        assert!(matches!(result, Err(CodegenError::Write { .. })));
        assert!(table.is_dir());
        let leftovers = fs::read_dir(table.parent().unwrap()).unwrap().count();
        assert_eq!(leftovers, 1);
    }
}
