//! Subcommand implementations

use crate::error::CliError;
use aoc_codegen::{DayLayout, GeneratedIndex, generate, scaffold_day, write_table};
use aoc_http_client::AocClient;
use aoc_solver::DaySpec;
use tracing::info;

/// Scaffold a day, download its input and description, regenerate the table
pub fn new_day(
    layout: &DayLayout,
    client: &AocClient,
    year: u16,
    day: u8,
    session: &str,
) -> Result<(), CliError> {
    let spec = DaySpec::new(year, day);
    scaffold_day(layout, &spec)?;

    let input = client.get_input(year, day, session)?;
    layout.write_input(year, day, &input)?;

    description(layout, client, year, day, session)?;
    regenerate(layout)?;
    Ok(())
}

/// Download a day's description to `description.md`
pub fn description(
    layout: &DayLayout,
    client: &AocClient,
    year: u16,
    day: u8,
    session: &str,
) -> Result<usize, CliError> {
    let markdown = client.get_description(year, day, session)?;
    Ok(layout.write_description(year, day, &markdown)?)
}

/// Rescan the solution tree and rewrite the day table
pub fn regenerate(layout: &DayLayout) -> Result<GeneratedIndex, CliError> {
    let index = generate(layout.root())?;
    write_table(layout, &index)?;
    match index.current {
        Some(current) => info!("Current day is {}", current),
        None => info!("No solutions found under {}", layout.root().display()),
    }
    Ok(index)
}
