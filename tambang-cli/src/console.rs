use std::io::{BufRead, Write};
use std::path::Path;

use tambang_core::{
    catalog::Catalog,
    input::{parse_distance, parse_minutes, parse_selection, parse_yes_no},
    model::{FareInput, Quote},
    ports::FareError,
    receipt::{Receipt, Summary, menu_line},
    service::FareService,
};
use tracing::debug;

/// Write the numbered variant menu in flat catalog order.
pub(crate) fn write_menu<W: Write>(catalog: &Catalog, output: &mut W) -> Result<(), FareError> {
    writeln!(output, "Available Car Models:")?;
    for (index, variant) in catalog.iter().enumerate() {
        writeln!(output, "{}", menu_line(index + 1, variant))?;
    }
    Ok(())
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
) -> Result<String, FareError> {
    write!(output, "{question}")?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    debug!(question, answer = answer.trim(), "prompt answered");
    Ok(answer)
}

/// Walk the user through one calculation. Any invalid answer aborts the run.
pub(crate) fn run_interactive<R: BufRead, W: Write>(
    service: &FareService,
    input: &mut R,
    output: &mut W,
) -> Result<Quote, FareError> {
    let catalog = service.catalog();

    writeln!(output, "==== Fare Calculator (Console Version) ====")?;
    writeln!(output)?;
    write_menu(catalog, output)?;
    writeln!(output)?;

    let answer = prompt(
        input,
        output,
        &format!("Select a car (1-{}): ", catalog.len()),
    )?;
    let index = parse_selection(&answer, catalog.len())?;
    let variant = catalog
        .get(index)
        .ok_or_else(|| FareError::InvalidInput(format!("no car at position {}", index + 1)))?;

    let distance_km = parse_distance(&prompt(input, output, "Enter distance (km): ")?)?;
    let time_minutes = parse_minutes(&prompt(input, output, "Enter time (minutes): ")?)?;
    let traffic_jam = parse_yes_no(&prompt(input, output, "Traffic jam? (y/n): ")?);
    let night_charge = parse_yes_no(&prompt(input, output, "Night charge? (y/n): ")?);

    service.quote(FareInput {
        variant,
        distance_km,
        time_minutes,
        traffic_jam,
        night_charge,
    })
}

/// Print the result block and, when a path is given, save the receipt there.
pub(crate) fn present<W: Write>(
    quote: &Quote,
    output: &mut W,
    receipt_path: Option<&Path>,
) -> Result<(), FareError> {
    writeln!(output)?;
    write!(output, "{}", Summary(quote))?;
    if let Some(path) = receipt_path {
        Receipt(quote).save(path)?;
        writeln!(output)?;
        writeln!(output, "Receipt saved as {}", path.display())?;
    }
    Ok(())
}
