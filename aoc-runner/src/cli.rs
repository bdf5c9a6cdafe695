//! CLI argument parsing using clap

use clap::Parser;

/// Run Advent of Code solutions from the generated day table
///
/// Without arguments, runs the most recently edited day.
#[derive(Parser, Debug, Default)]
#[command(name = "aoc-run", version)]
pub struct Args {
    /// Year to run
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(2015..))]
    pub year: Option<u16>,

    /// Day to run
    #[arg(
        short,
        long,
        requires = "year",
        value_parser = clap::value_parser!(u8).range(1..=25)
    )]
    pub day: Option<u8>,

    /// Part to run (runs every part of the day if omitted)
    #[arg(
        short,
        long,
        requires = "day",
        value_parser = clap::value_parser!(u8).range(1..=2)
    )]
    pub part: Option<u8>,

    /// Run every day of the year
    #[arg(short, long, requires = "year", conflicts_with_all = ["day", "part"])]
    pub all: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// What a set of arguments asks to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Current,
    Year(u16),
    Day { year: u16, day: u8, part: Option<u8> },
}

impl Args {
    pub fn target(&self) -> Target {
        match (self.year, self.day) {
            (Some(year), _) if self.all => Target::Year(year),
            (Some(year), Some(day)) => Target::Day {
                year,
                day,
                part: self.part,
            },
            (Some(year), None) => Target::Year(year),
            (None, _) => Target::Current,
        }
    }
}
