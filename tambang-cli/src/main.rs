//! Console fare calculator: pick a car, enter the trip, get a fare and a receipt.

mod console;

use std::{
    io::{self, Write},
    path::PathBuf,
    sync::Arc,
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tambang_core::{
    catalog::Catalog,
    config::load_catalog,
    input::{parse_distance, parse_minutes},
    logging,
    model::FareRequest,
    service::FareService,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "tambang")]
#[command(about = "Car fare calculator with text receipts")]
struct Cli {
    /// TOML catalog file to use instead of the built-in catalog
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Where to save the receipt
    #[arg(long, global = true, default_value = "receipt.txt")]
    receipt: PathBuf,

    /// Do not save a receipt
    #[arg(long, global = true)]
    no_receipt: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prompt for car, distance, time and surcharges (default)
    Interactive,
    /// List the catalog as a numbered menu
    List,
    /// Compute a fare without prompting
    Quote(QuoteArgs),
}

#[derive(Args, Debug)]
struct QuoteArgs {
    /// Car model, e.g. "Perodua Myvi"
    #[arg(long)]
    model: String,

    /// Variant label, e.g. "1.5 X (A)"
    #[arg(long)]
    variant: String,

    /// Distance in kilometres
    #[arg(long, allow_hyphen_values = true)]
    distance: String,

    /// Trip time in minutes
    #[arg(long, allow_hyphen_values = true)]
    time: String,

    /// Apply the traffic jam surcharge
    #[arg(long)]
    traffic_jam: bool,

    /// Apply the night charge
    #[arg(long)]
    night_charge: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_console_logger(env!("CARGO_CRATE_NAME"), cli.verbose);

    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?,
        None => tambang_catalog_my::catalog().context("built-in catalog is invalid")?,
    };
    info!(variants = catalog.len(), "catalog ready");
    let service = FareService::new(Arc::new(catalog));

    let stdout = io::stdout();
    let mut output = stdout.lock();
    let receipt_path = (!cli.no_receipt).then_some(cli.receipt.as_path());

    let quote = match cli.command.unwrap_or(Command::Interactive) {
        Command::List => {
            return list(service.catalog(), &mut output);
        }
        Command::Interactive => {
            let stdin = io::stdin();
            console::run_interactive(&service, &mut stdin.lock(), &mut output)?
        }
        Command::Quote(args) => {
            let request = FareRequest {
                distance_km: parse_distance(&args.distance)?,
                time_minutes: parse_minutes(&args.time)?,
                model: args.model,
                variant: args.variant,
                traffic_jam: args.traffic_jam,
                night_charge: args.night_charge,
            };
            service.quote_request(&request)?
        }
    };

    console::present(&quote, &mut output, receipt_path)
        .context("failed to present the fare")?;
    output.flush()?;
    Ok(())
}

fn list<W: Write>(catalog: &Catalog, output: &mut W) -> Result<()> {
    console::write_menu(catalog, output)?;
    output.flush()?;
    Ok(())
}
