//! Terminal UI for tambang: choose a car, fill in the trip, and see the fare.

mod app;
mod input;
mod ui;

use std::{io, path::PathBuf, sync::Arc, time::Duration as StdDuration};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event as CEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tambang_core::{config::load_catalog, logging, service::FareService};
use tracing::info;

use crate::app::App;
use crate::input::Action;

#[derive(Parser, Debug)]
#[command(name = "tambang-tui")]
#[command(about = "Interactive car fare calculator")]
struct Cli {
    /// TOML catalog file to use instead of the built-in catalog
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Write log output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Some(path) = &cli.log_file {
        logging::init_file_logger(path, env!("CARGO_CRATE_NAME"), cli.verbose)
            .with_context(|| format!("failed to open log file {}", path.display()))?;
    }

    // Catalog + service setup
    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)
            .with_context(|| format!("failed to load catalog {}", path.display()))?,
        None => tambang_catalog_my::catalog().context("built-in catalog is invalid")?,
    };
    info!(variants = catalog.len(), "catalog ready");
    let service = Arc::new(FareService::new(Arc::new(catalog)));

    // App state
    let app = App::new(service);

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let res = run(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Poll for input (small timeout to keep CPU low)
        if event::poll(StdDuration::from_millis(100))?
            && let CEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match input::handle_key_event(key, &mut app) {
                Action::Quit => break,
                Action::None => {}
                Action::Calculate => app.calculate(),
            }
        }
    }

    Ok(())
}
