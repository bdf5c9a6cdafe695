//! Discovery of solution files under the project root

use crate::error::CodegenError;
use crate::layout::solution_file_name;
use aoc_solver::{BASE_YEAR, DaySpec};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::SystemTime;
use tracing::{debug, warn};

static YEAR_DIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^20[1-9][0-9]$").expect("valid year pattern"));

static DAY_DIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^day(0[1-9]|1[0-9]|2[0-5])$").expect("valid day pattern"));

/// Days found in the solution tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratedIndex {
    /// Strictly increasing by (year, day)
    pub days: Vec<DaySpec>,
    /// Day whose solution file was modified last
    pub current: Option<DaySpec>,
}

/// Most recently modified solution seen so far
#[derive(Debug, Default)]
struct LatestEdit {
    latest: Option<(SystemTime, DaySpec)>,
}

impl LatestEdit {
    /// Replace the candidate only on a strictly later time, so the first
    /// visited of equally old files is kept
    fn observe(&mut self, modified: SystemTime, spec: DaySpec) {
        match self.latest {
            Some((seen, _)) if modified <= seen => {}
            _ => self.latest = Some((modified, spec)),
        }
    }

    fn into_current(self) -> Option<DaySpec> {
        self.latest.map(|(_, spec)| spec)
    }
}

/// Scan `root` for `{year}/day{DD}/day{DD}.rs` solution files
///
/// Years and days are visited in ascending name order. A day whose solution
/// file cannot be stat'ed is skipped with a warning.
///
/// # Errors
///
/// Returns `CodegenError::Scan` if the root or a year directory cannot be
/// listed.
pub fn generate(root: &Path) -> Result<GeneratedIndex, CodegenError> {
    let mut days = Vec::new();
    let mut latest = LatestEdit::default();

    for (year, year_dir) in matching_dirs(root, parse_year)? {
        for (day, day_dir) in matching_dirs(&year_dir, parse_day)? {
            let solution = day_dir.join(solution_file_name(day));
            let modified = match fs::metadata(&solution).and_then(|m| m.modified()) {
                Ok(modified) => modified,
                Err(e) => {
                    warn!(
                        "Could not stat file {}, ignoring {}/{}: {}",
                        solution.display(),
                        year,
                        aoc_solver::day_dir_name(day),
                        e
                    );
                    continue;
                }
            };

            let spec = DaySpec::new(year, day);
            debug!(%spec, "Found solution");
            latest.observe(modified, spec);
            days.push(spec);
        }
    }

    days.sort();
    days.dedup_by_key(|spec| (spec.year, spec.day));

    Ok(GeneratedIndex {
        days,
        current: latest.into_current(),
    })
}

/// Subdirectories of `dir` accepted by `parse`, sorted by name
fn matching_dirs<T>(
    dir: &Path,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Vec<(T, PathBuf)>, CodegenError> {
    let scan_error = |source| CodegenError::Scan {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(scan_error)? {
        let entry = entry.map_err(scan_error)?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        let path = entry.path();
        if let Some(value) = parse(name)
            && path.is_dir()
        {
            entries.push((name.to_string(), value, path));
        }
    }

    entries.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(entries
        .into_iter()
        .map(|(_, value, path)| (value, path))
        .collect())
}

fn parse_year(name: &str) -> Option<u16> {
    if !YEAR_DIR.is_match(name) {
        return None;
    }
    name.parse().ok().filter(|&year| year >= BASE_YEAR)
}

fn parse_day(name: &str) -> Option<u8> {
    DAY_DIR.captures(name)?.get(1)?.as_str().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::fs::File;
    use std::time::Duration;
    use tempfile::TempDir;

    fn touch(root: &Path, year: u16, day: u8) -> PathBuf {
        let dir = root.join(year.to_string()).join(format!("day{:02}", day));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(format!("day{:02}.rs", day));
        fs::write(&path, "").unwrap();
        path
    }

    fn set_mtime(path: &Path, secs: u64) {
        let time = SystemTime::UNIX_EPOCH + Duration::from_secs(secs);
        File::options()
            .write(true)
            .open(path)
            .unwrap()
            .set_modified(time)
            .unwrap();
    }

    #[test]
    fn test_dir_name_patterns() {
        assert_eq!(parse_year("2015"), Some(2015));
        assert_eq!(parse_year("2099"), Some(2099));
        assert_eq!(parse_year("2014"), None);
        assert_eq!(parse_year("2005"), None);
        assert_eq!(parse_year("20155"), None);
        assert_eq!(parse_year("aoc-cli"), None);

        assert_eq!(parse_day("day01"), Some(1));
        assert_eq!(parse_day("day25"), Some(25));
        assert_eq!(parse_day("day00"), None);
        assert_eq!(parse_day("day26"), None);
        assert_eq!(parse_day("day1"), None);
        assert_eq!(parse_day("day01.rs"), None);
    }

    #[test]
    fn test_final_days_have_one_part() {
        let temp = TempDir::new().unwrap();
        for (year, day) in [(2024, 25), (2023, 25), (2024, 24), (2025, 12), (2025, 11)] {
            touch(temp.path(), year, day);
        }

        let index = generate(temp.path()).unwrap();
        let parts: Vec<(u16, u8, u8)> = index
            .days
            .iter()
            .map(|s| (s.year, s.day, s.parts))
            .collect();

        assert_eq!(
            parts,
            vec![
                (2023, 25, 1),
                (2024, 24, 2),
                (2024, 25, 1),
                (2025, 11, 2),
                (2025, 12, 1),
            ]
        );
    }

    #[test]
    fn test_current_day_is_latest_mtime() {
        let temp = TempDir::new().unwrap();
        let first = touch(temp.path(), 2022, 1);
        let second = touch(temp.path(), 2022, 2);
        let third = touch(temp.path(), 2022, 3);
        set_mtime(&first, 1_000);
        set_mtime(&third, 2_000);
        set_mtime(&second, 3_000);

        let index = generate(temp.path()).unwrap();
        assert_eq!(index.current, Some(DaySpec::new(2022, 2)));
    }

    #[test]
    fn test_current_day_tie_keeps_first_in_scan_order() {
        let temp = TempDir::new().unwrap();
        for (year, day) in [(2023, 4), (2021, 9), (2023, 1)] {
            let path = touch(temp.path(), year, day);
            set_mtime(&path, 5_000);
        }

        let index = generate(temp.path()).unwrap();
        assert_eq!(index.current, Some(DaySpec::new(2021, 9)));
    }

    #[test]
    fn test_missing_solution_file_is_skipped() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), 2023, 1);
        fs::create_dir_all(temp.path().join("2023").join("day02")).unwrap();
        fs::write(temp.path().join("2023").join("day02").join("main.rs"), "").unwrap();
        touch(temp.path(), 2023, 3);

        let index = generate(temp.path()).unwrap();
        assert_eq!(
            index.days,
            vec![DaySpec::new(2023, 1), DaySpec::new(2023, 3)]
        );
    }

    #[test]
    fn test_non_matching_entries_are_ignored() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), 2023, 1);
        fs::create_dir_all(temp.path().join("aoc-runner").join("day01")).unwrap();
        fs::create_dir_all(temp.path().join("2010").join("day01")).unwrap();
        fs::write(temp.path().join("2010").join("day01").join("day01.rs"), "").unwrap();
        fs::create_dir_all(temp.path().join("2023").join("day26")).unwrap();
        fs::write(temp.path().join("2024"), "a file, not a year").unwrap();

        let index = generate(temp.path()).unwrap();
        assert_eq!(index.days, vec![DaySpec::new(2023, 1)]);
        assert_eq!(index.current, Some(DaySpec::new(2023, 1)));
    }

    #[test]
    fn test_empty_root() {
        let temp = TempDir::new().unwrap();
        assert_eq!(generate(temp.path()).unwrap(), GeneratedIndex::default());
    }

    #[test]
    fn test_missing_root_is_scan_error() {
        let temp = TempDir::new().unwrap();
        let result = generate(&temp.path().join("nope"));
        assert!(matches!(result, Err(CodegenError::Scan { .. })));
    }

    #[test]
    fn test_generate_is_idempotent() {
        let temp = TempDir::new().unwrap();
        for (year, day) in [(2015, 1), (2015, 25), (2024, 7)] {
            touch(temp.path(), year, day);
        }

        let first = generate(temp.path()).unwrap();
        let second = generate(temp.path()).unwrap();
        assert_eq!(first, second);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_days_strictly_increasing(
            days in prop::collection::vec((2015u16..2030, 1u8..=25), 0..20),
        ) {
            let temp = TempDir::new().unwrap();
            for &(year, day) in &days {
                touch(temp.path(), year, day);
            }

            let index = generate(temp.path()).unwrap();

            prop_assert!(index
                .days
                .windows(2)
                .all(|w| (w[0].year, w[0].day) < (w[1].year, w[1].day)));
            let mut expected: Vec<(u16, u8)> = days.clone();
            expected.sort();
            expected.dedup();
            let found: Vec<(u16, u8)> = index.days.iter().map(|s| (s.year, s.day)).collect();
            prop_assert_eq!(found, expected);
            prop_assert_eq!(index.current.is_some(), !days.is_empty());
        }
    }
}
