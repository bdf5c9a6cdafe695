//! AOC CLI - scaffolds Advent of Code days and downloads puzzles

mod cli;
mod commands;
mod config;
mod error;
mod telemetry;

use aoc_codegen::DayLayout;
use aoc_http_client::AocClient;
use clap::Parser;
use cli::{Args, Command};
use config::Puzzle;
use error::CliError;

fn main() {
    let args = Args::parse();
    telemetry::init(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let layout = DayLayout::new(config::project_root(args.root)?);

    match args.command {
        Command::New(puzzle) => {
            let puzzle = Puzzle::from_args(puzzle)?;
            let client = AocClient::new()?;
            commands::new_day(&layout, &client, puzzle.year, puzzle.day, &puzzle.session)
        }
        Command::Description(puzzle) => {
            let puzzle = Puzzle::from_args(puzzle)?;
            let client = AocClient::new()?;
            commands::description(&layout, &client, puzzle.year, puzzle.day, &puzzle.session)
                .map(|_| ())
        }
        Command::Gen => commands::regenerate(&layout).map(|_| ()),
    }
}
