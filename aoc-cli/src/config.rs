//! Configuration resolution from CLI args

use crate::cli::PuzzleArgs;
use crate::error::CliError;
use aoc_solver::{BASE_YEAR, DAYS_PER_YEAR};
use chrono::{Datelike, Local};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use zeroize::Zeroizing;

/// Environment variable holding the session cookie
pub const COOKIE_ENV: &str = "AOC_COOKIE";

/// A puzzle selected on the command line, with credentials
pub struct Puzzle {
    pub year: u16,
    pub day: u8,
    /// Session cookie (zeroized on drop)
    pub session: Zeroizing<String>,
}

impl Puzzle {
    /// Resolve year, day and cookie, prompting for the cookie as a last resort
    pub fn from_args(args: PuzzleArgs) -> Result<Self, CliError> {
        let today = Local::now().date_naive();
        let (year, day) = resolve_date(args.year, args.day, today)?;
        let session = resolve_session(args.cookie, std::env::var(COOKIE_ENV).ok(), || {
            prompt_session(&format!(
                "No session cookie given via --cookie or {}.",
                COOKIE_ENV
            ))
        })?;
        Ok(Self { year, day, session })
    }
}

/// Fill in missing year and day from `today`
fn resolve_date(
    year: Option<u16>,
    day: Option<u8>,
    today: impl Datelike,
) -> Result<(u16, u8), CliError> {
    let year = match year {
        Some(year) => year,
        None => u16::try_from(today.year())
            .ok()
            .filter(|&y| y >= BASE_YEAR)
            .ok_or_else(|| {
                CliError::Config(format!("Current year {} has no puzzles", today.year()))
            })?,
    };

    let day = match day {
        Some(day) => day,
        None => u8::try_from(today.day())
            .ok()
            .filter(|&d| d <= DAYS_PER_YEAR)
            .ok_or_else(|| {
                CliError::Config(format!(
                    "Day {} of the month is not a puzzle day, pass --day",
                    today.day()
                ))
            })?,
    };

    Ok((year, day))
}

/// Pick the cookie from the flag, then the environment, then `prompt`
fn resolve_session(
    flag: Option<String>,
    env: Option<String>,
    prompt: impl FnOnce() -> Result<Zeroizing<String>, CliError>,
) -> Result<Zeroizing<String>, CliError> {
    match flag.or(env).filter(|s| !s.trim().is_empty()) {
        Some(s) => Ok(Zeroizing::new(s.trim().to_string())),
        None => prompt(),
    }
}

/// Prompt user for session token
pub fn prompt_session(reason: &str) -> Result<Zeroizing<String>, CliError> {
    eprintln!("{}", reason);
    let s = rpassword::prompt_password("Enter AOC session cookie: ")
        .map_err(|e| CliError::Config(format!("Failed to read session: {}", e)))?;
    if s.is_empty() {
        return Err(CliError::Config("Session cookie is required.".to_string()));
    }
    Ok(Zeroizing::new(s))
}

/// Resolve the project root from `--root` or the current directory
pub fn project_root(root: Option<PathBuf>) -> Result<PathBuf, CliError> {
    let root = match root {
        Some(root) => expand_tilde(&root),
        None => {
            let cwd = std::env::current_dir()?;
            locate_root(&cwd).ok_or_else(|| {
                CliError::Config(format!(
                    "No Cargo workspace found above {}, pass --root",
                    cwd.display()
                ))
            })?
        }
    };
    debug!("Using project root {}", root.display());
    Ok(root)
}

/// Nearest ancestor of `start` whose `Cargo.toml` declares a workspace
fn locate_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| {
            fs::read_to_string(dir.join("Cargo.toml"))
                .is_ok_and(|manifest| manifest.lines().any(|l| l.trim() == "[workspace]"))
        })
        .map(Path::to_path_buf)
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}
