//! CLI argument parsing using clap

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

/// Advent of Code project helper
#[derive(Parser, Debug)]
#[command(
    name = "aoc",
    about = "Scaffold Advent of Code days and download puzzles",
    version
)]
pub struct Args {
    /// Project root (defaults to the enclosing Cargo workspace)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scaffold a day, download its input and description, regenerate the day table
    New(PuzzleArgs),
    /// Download the puzzle description of a day as Markdown
    Description(PuzzleArgs),
    /// Regenerate the day table from the solution tree
    Gen,
}

/// Selects a puzzle and authenticates against the site
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct PuzzleArgs {
    /// Puzzle year (defaults to the current year)
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(2015..))]
    pub year: Option<u16>,

    /// Puzzle day (defaults to the current day of month)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Session cookie (falls back to AOC_COOKIE, then a prompt)
    #[arg(short, long)]
    pub cookie: Option<String>,
}
