//! AOC runner - runs solutions compiled in through the generated day table

mod cli;
mod day_parts;
mod error;
mod output;
mod runner;
mod telemetry;

use aoc_solver::PartRegistry;
use clap::Parser;
use cli::{Args, Target};
use error::RunError;
use runner::Runner;

fn main() {
    let args = Args::parse();
    telemetry::init(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), RunError> {
    let registry = PartRegistry::new(day_parts::DAY_PARTS);
    let mut runner = Runner::new(registry, std::io::stdout().lock());

    match args.target() {
        Target::Current => runner.run_current(day_parts::CURRENT_DAY),
        Target::Year(year) => runner.run_year(year).map(|_| ()),
        Target::Day { year, day, part } => runner.run_day(year, day, part),
    }
}
